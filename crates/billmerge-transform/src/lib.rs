//! Billing record reconciliation.
//!
//! This crate turns a concatenated [`billmerge_model::RecordTable`] into the
//! fixed output shape:
//!
//! - **address**: full street address synthesis (legacy and extended paths)
//! - **reconcile**: billing line combination, fill and duplicate-on-divergence
//! - **friendly_name**: two-pass customer name backfill
//! - **schema**: projection onto the expected output columns
//! - **pipeline**: all of the above in order, with run statistics

pub mod address;
pub mod data_utils;
pub mod friendly_name;
pub mod pipeline;
pub mod reconcile;
pub mod schema;

pub use address::{AddressSource, SynthesizedAddress, synthesize};
pub use friendly_name::{NameMap, backfill_friendly_names, build_name_map};
pub use pipeline::{ReconcileOutcome, ReconcileStats, reconcile};
pub use reconcile::{
    ReconcileCounts, combine_billing_lines, divergent_duplicate, fill_secondary_address,
    reconcile_addresses,
};
pub use schema::{finalize_schema, missing_columns};
