//! Property tests for address selection and duplication.

use proptest::prelude::*;

use billmerge_map::AddressColumns;
use billmerge_model::{
    AddressDuplicationMode, BILLING_ADDRESS2, CUSTOMER_NUMBER, Record, RecordOrigin, RecordTable,
};
use billmerge_transform::{reconcile_addresses, synthesize};

const COLUMNS: [&str; 8] = [
    CUSTOMER_NUMBER,
    BILLING_ADDRESS2,
    "STREETDIRECTION",
    "STREETNAME",
    "STREETDESIGNATION",
    "LOCATIONSTREETNUMBER",
    "LOCATIONSTREETNAME",
    "UNITNUMBER",
];

fn value() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), Just("  ".to_string()), "[A-Za-z0-9 ]{1,6}"]
}

fn record() -> impl Strategy<Value = Record> {
    proptest::collection::vec(value(), COLUMNS.len()).prop_map(|values| {
        Record::from_pairs(
            RecordOrigin {
                file_index: 0,
                line: 1,
            },
            COLUMNS.iter().copied().zip(values),
        )
    })
}

fn single_record_table(record: Record) -> RecordTable {
    let mut table = RecordTable::with_columns(COLUMNS);
    table.add_source("export.csv");
    table.push_record(record);
    table
}

proptest! {
    #[test]
    fn extended_address_wins_when_present(record in record()) {
        let columns = AddressColumns::resolve(&COLUMNS);
        let address = synthesize(&record, &columns);
        if !address.extended.is_empty() {
            prop_assert_eq!(address.preferred(), address.extended.as_str());
        }
    }

    #[test]
    fn duplicate_exists_exactly_when_addresses_diverge(record in record()) {
        let columns = AddressColumns::resolve(&COLUMNS);
        let synthesized = synthesize(&record, &columns).preferred().trim().to_string();
        let recorded = record.get(BILLING_ADDRESS2).trim().to_string();
        let post_fill = if recorded.is_empty() { synthesized.clone() } else { recorded };

        let mut table = single_record_table(record);
        let counts = reconcile_addresses(&mut table, &columns, AddressDuplicationMode::Emit);

        let diverges = !synthesized.is_empty() && synthesized != post_fill;
        prop_assert_eq!(counts.duplicates, usize::from(diverges));
        prop_assert_eq!(table.len(), 1 + usize::from(diverges));

        if diverges {
            let original = &table.records[0];
            let copy = &table.records[1];
            prop_assert!(copy.is_duplicate());
            prop_assert_eq!(copy.get(BILLING_ADDRESS2), synthesized.as_str());
            for column in COLUMNS.iter().filter(|column| **column != BILLING_ADDRESS2) {
                prop_assert_eq!(copy.get(column), original.get(column));
            }
        }
    }

    #[test]
    fn skip_mode_never_adds_records(record in record()) {
        let columns = AddressColumns::resolve(&COLUMNS);
        let mut table = single_record_table(record);
        let counts = reconcile_addresses(&mut table, &columns, AddressDuplicationMode::Skip);
        prop_assert_eq!(counts.duplicates, 0);
        prop_assert_eq!(table.len(), 1);
    }
}
