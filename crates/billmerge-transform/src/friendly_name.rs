//! Customer friendly-name backfill.
//!
//! The name map is built from every record first and applied afterwards, so
//! the result does not depend on record order beyond tie-breaking.

use std::collections::BTreeMap;

use tracing::trace;

use billmerge_model::{CUSTOMER_FRIENDLY_NAME, CUSTOMER_NUMBER, LOCATION_NUMBER, Record};

use crate::data_utils::is_blank;

/// `(LOCATIONNUMBER, CUSTOMERNUMBER)` pair.
pub type NameKey = (String, String);

/// Most common friendly name per key.
pub type NameMap = BTreeMap<NameKey, String>;

fn name_key(record: &Record) -> NameKey {
    (
        record.get(LOCATION_NUMBER).to_string(),
        record.get(CUSTOMER_NUMBER).to_string(),
    )
}

/// Tally of one key's names in first-seen order.
#[derive(Default)]
struct NameTally {
    counts: Vec<(String, usize)>,
}

impl NameTally {
    fn add(&mut self, name: &str) {
        match self.counts.iter_mut().find(|(seen, _)| seen == name) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((name.to_string(), 1)),
        }
    }

    /// Highest count; the earliest name wins a tie.
    fn mode(self) -> Option<String> {
        let mut best: Option<(String, usize)> = None;
        for (name, count) in self.counts {
            if best.as_ref().is_none_or(|(_, top)| count > *top) {
                best = Some((name, count));
            }
        }
        best.map(|(name, _)| name)
    }
}

/// Builds the name map from all records whose `CUSTOMERFRIENDLYNAME` is not
/// the empty string.
///
/// Keys and names are compared exactly; a whitespace-only name still counts
/// as observed.
pub fn build_name_map(records: &[Record]) -> NameMap {
    let mut tallies: BTreeMap<NameKey, NameTally> = BTreeMap::new();
    for record in records {
        let name = record.get(CUSTOMER_FRIENDLY_NAME);
        if name.is_empty() {
            continue;
        }
        tallies.entry(name_key(record)).or_default().add(name);
    }
    tallies
        .into_iter()
        .filter_map(|(key, tally)| tally.mode().map(|name| (key, name)))
        .collect()
}

/// Fills blank friendly names from `names`, or clears them to `""` when the
/// key is unknown.
///
/// Returns the number of records that received a non-empty name.
pub fn backfill_friendly_names(records: &mut [Record], names: &NameMap) -> usize {
    let mut filled = 0;
    for record in records.iter_mut() {
        if !is_blank(record.get(CUSTOMER_FRIENDLY_NAME)) {
            continue;
        }
        let name = names.get(&name_key(record)).cloned().unwrap_or_default();
        if !name.is_empty() {
            filled += 1;
            trace!(
                file_index = record.origin.file_index,
                line = record.origin.line,
                "backfilled friendly name"
            );
        }
        record.set(CUSTOMER_FRIENDLY_NAME, name);
    }
    filled
}
