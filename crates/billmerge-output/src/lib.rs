//! Output generation for reconciled billing records.
//!
//! The output table is written as CSV into a temporary file next to the
//! destination and then renamed over it, so a failed run never leaves a
//! partial file behind.

mod csv_writer;
mod error;

pub use csv_writer::write_output_csv;
pub use error::{OutputError, Result};
