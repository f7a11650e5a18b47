//! Billing record data model.
//!
//! - **fields**: canonical field names, synonym lists, output schema
//! - **table**: records, the concatenated record table, the output table
//! - **options**: switches for the optional reconciliation stages

pub mod fields;
pub mod options;
pub mod table;

pub use fields::{
    AddressField, BILLING_ADDRESS1, BILLING_ADDRESS2, CUSTOMER_FRIENDLY_NAME, CUSTOMER_NUMBER,
    EXPECTED_COLUMNS, LOCATION_NUMBER, ResolutionMode, is_expected_column,
};
pub use options::{AddressDuplicationMode, FriendlyNameMode, ProcessingOptions};
pub use table::{OutputTable, Record, RecordKind, RecordOrigin, RecordTable};

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> RecordOrigin {
        RecordOrigin {
            file_index: 0,
            line: 1,
        }
    }

    #[test]
    fn duplicate_keeps_other_cells() {
        let record = Record::from_pairs(
            origin(),
            [(CUSTOMER_NUMBER, "C1"), (BILLING_ADDRESS2, "PO Box 5")],
        );
        let copy = record.duplicate_with(BILLING_ADDRESS2, "100 Main St");

        assert!(copy.is_duplicate());
        assert!(!record.is_duplicate());
        assert_eq!(copy.get(CUSTOMER_NUMBER), "C1");
        assert_eq!(copy.get(BILLING_ADDRESS2), "100 Main St");
        assert_eq!(record.get(BILLING_ADDRESS2), "PO Box 5");
    }

    #[test]
    fn options_serialize() {
        let options = ProcessingOptions::new().with_friendly_names(FriendlyNameMode::Skip);
        let json = serde_json::to_string(&options).expect("serialize options");
        let round: ProcessingOptions = serde_json::from_str(&json).expect("deserialize options");
        assert_eq!(round, options);
    }

    #[test]
    fn resolution_mode_displays_as_serialized() {
        for mode in [ResolutionMode::MatchAll, ResolutionMode::MatchFirst] {
            let json = serde_json::to_string(&mode).expect("serialize mode");
            assert_eq!(json, format!("\"{mode}\""));
        }
    }
}
