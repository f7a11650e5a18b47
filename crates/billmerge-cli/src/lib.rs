//! CLI library components for billmerge.

pub mod error;
pub mod logging;
pub mod pipeline;
pub mod types;
