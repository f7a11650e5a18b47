//! Configuration options for reconciliation.

use serde::{Deserialize, Serialize};

/// Mode for emitting a second record when the synthesized street address
/// diverges from the recorded secondary billing address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AddressDuplicationMode {
    /// Keep the recorded address and append a copy carrying the new one.
    #[default]
    Emit,
    /// Keep only the recorded address.
    Skip,
}

/// Mode for imputing missing customer friendly names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FriendlyNameMode {
    /// Fill blanks with the most common name seen for the same
    /// (location, customer) pair.
    #[default]
    Backfill,
    /// Leave blank names untouched.
    Skip,
}

/// Options controlling reconciliation behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingOptions {
    pub address_duplication: AddressDuplicationMode,
    pub friendly_names: FriendlyNameMode,
}

impl ProcessingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_address_duplication(mut self, mode: AddressDuplicationMode) -> Self {
        self.address_duplication = mode;
        self
    }

    pub fn with_friendly_names(mut self, mode: FriendlyNameMode) -> Self {
        self.friendly_names = mode;
        self
    }
}
