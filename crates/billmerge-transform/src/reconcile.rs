//! Billing address reconciliation.
//!
//! 1. **combine**: `BILLINGADDRESS1`/`BILLINGADDRESS2` become the joined
//!    values of every raw column resolved for them.
//! 2. **fill**: a blank `BILLINGADDRESS2` takes the synthesized address.
//! 3. **duplicate**: a record whose synthesized address differs from its
//!    `BILLINGADDRESS2` gets a copy carrying the synthesized address.
//!
//! The recorded secondary address is never overwritten when it is present.

use serde::Serialize;
use tracing::trace;

use billmerge_map::AddressColumns;
use billmerge_model::{
    AddressDuplicationMode, AddressField, BILLING_ADDRESS1, BILLING_ADDRESS2, Record, RecordTable,
};

use crate::address::{AddressSource, synthesize};
use crate::data_utils::{is_blank, join_columns};

/// Per-run counters for the reconciliation stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileCounts {
    pub from_extended: usize,
    pub from_legacy: usize,
    pub secondary_filled: usize,
    pub duplicates: usize,
}

/// Writes the combined billing address lines into every record.
///
/// With no resolved columns a field keeps whatever the record already holds
/// under its canonical name, which is empty when the column is absent.
pub fn combine_billing_lines(table: &mut RecordTable, columns: &AddressColumns) {
    for (field, name) in [
        (AddressField::BillingAddress1, BILLING_ADDRESS1),
        (AddressField::BillingAddress2, BILLING_ADDRESS2),
    ] {
        let sources = columns.columns_for(field);
        for record in &mut table.records {
            let value = if sources.is_empty() {
                record.get(name).to_string()
            } else {
                join_columns(record, &sources)
            };
            record.set(name, value);
        }
        table.ensure_column(name);
    }
}

/// Fills a blank `BILLINGADDRESS2` with `synthesized`.
///
/// Returns true when a non-empty address was written.
pub fn fill_secondary_address(record: &mut Record, synthesized: &str) -> bool {
    if !is_blank(record.get(BILLING_ADDRESS2)) {
        return false;
    }
    record.set(BILLING_ADDRESS2, synthesized);
    !synthesized.is_empty()
}

/// Copy of `record` carrying `synthesized` as its secondary address, when the
/// two diverge.
///
/// Returns `None` for a blank synthesized address or one equal (after
/// trimming) to the current `BILLINGADDRESS2`.
pub fn divergent_duplicate(record: &Record, synthesized: &str) -> Option<Record> {
    let synthesized = synthesized.trim();
    if synthesized.is_empty() || synthesized == record.get(BILLING_ADDRESS2).trim() {
        return None;
    }
    Some(record.duplicate_with(BILLING_ADDRESS2, synthesized))
}

/// Runs combine, fill and duplicate over the whole table.
///
/// Duplicates are appended after all existing records, in the order of the
/// records they were copied from, and are not themselves re-examined.
pub fn reconcile_addresses(
    table: &mut RecordTable,
    columns: &AddressColumns,
    mode: AddressDuplicationMode,
) -> ReconcileCounts {
    combine_billing_lines(table, columns);

    let mut counts = ReconcileCounts::default();
    let mut duplicates = Vec::new();
    for record in &mut table.records {
        let address = synthesize(record, columns);
        match address.source() {
            AddressSource::Extended => counts.from_extended += 1,
            AddressSource::Legacy => counts.from_legacy += 1,
            AddressSource::None => {}
        }
        let preferred = address.preferred();

        if fill_secondary_address(record, preferred) {
            counts.secondary_filled += 1;
            trace!(
                file_index = record.origin.file_index,
                line = record.origin.line,
                "filled secondary billing address"
            );
        }

        if mode == AddressDuplicationMode::Emit
            && let Some(copy) = divergent_duplicate(record, preferred)
        {
            trace!(
                file_index = record.origin.file_index,
                line = record.origin.line,
                "secondary billing address diverges; emitting duplicate"
            );
            duplicates.push(copy);
        }
    }

    counts.duplicates = duplicates.len();
    table.records.extend(duplicates);
    counts
}

#[cfg(test)]
mod tests {
    use billmerge_model::{RecordKind, RecordOrigin};

    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        Record::from_pairs(
            RecordOrigin {
                file_index: 0,
                line: 1,
            },
            pairs.iter().copied(),
        )
    }

    #[test]
    fn fill_only_touches_blank_values() {
        let mut blank = record(&[(BILLING_ADDRESS2, "  ")]);
        assert!(fill_secondary_address(&mut blank, "100 Main St"));
        assert_eq!(blank.get(BILLING_ADDRESS2), "100 Main St");

        let mut present = record(&[(BILLING_ADDRESS2, "PO Box 5")]);
        assert!(!fill_secondary_address(&mut present, "100 Main St"));
        assert_eq!(present.get(BILLING_ADDRESS2), "PO Box 5");

        let mut nothing = record(&[(BILLING_ADDRESS2, " ")]);
        assert!(!fill_secondary_address(&mut nothing, ""));
        assert_eq!(nothing.get(BILLING_ADDRESS2), "");
    }

    #[test]
    fn duplicate_only_on_divergence() {
        let same = record(&[(BILLING_ADDRESS2, " 100 Main St ")]);
        assert!(divergent_duplicate(&same, "100 Main St").is_none());
        assert!(divergent_duplicate(&same, "  ").is_none());

        let other = record(&[(BILLING_ADDRESS2, "PO Box 5"), ("CUSTOMERNUMBER", "C1")]);
        let copy = divergent_duplicate(&other, " 100 Main St").expect("duplicate");
        assert_eq!(copy.kind, RecordKind::AddressDuplicate);
        assert_eq!(copy.get(BILLING_ADDRESS2), "100 Main St");
        assert_eq!(copy.get("CUSTOMERNUMBER"), "C1");
    }

    #[test]
    fn combine_joins_split_lines() {
        let mut table = RecordTable::with_columns(["ADDR1", "ADDRESS1"]);
        table.push_record(record(&[("ADDR1", "Suite 4"), ("ADDRESS1", "1 Elm St")]));
        let columns = AddressColumns::resolve(&table.columns);

        combine_billing_lines(&mut table, &columns);

        assert_eq!(table.records[0].get(BILLING_ADDRESS1), "Suite 4 1 Elm St");
        assert_eq!(table.records[0].get(BILLING_ADDRESS2), "");
        assert!(table.has_column(BILLING_ADDRESS1));
        assert!(table.has_column(BILLING_ADDRESS2));
    }
}
