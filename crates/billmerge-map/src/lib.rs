//! Column normalization and synonym-based column resolution.
//!
//! Source exports name the same field in many ways (`ADDR1`,
//! `BILLING_ADDR1`, `BillingAddressLine1`, ...). This crate normalizes raw
//! headers and resolves each canonical address field to the raw columns that
//! carry it:
//!
//! - [`match_all`]: every column equal to or containing a synonym
//! - [`match_first`]: the highest-priority synonym present verbatim
//! - [`AddressColumns`]: all address fields resolved for one table

mod engine;
mod utils;
mod variants;

pub use engine::{AddressColumns, FieldResolution};
pub use utils::{normalize_column_name, normalize_column_names};
pub use variants::{match_all, match_first};
