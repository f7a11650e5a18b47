//! The full reconciliation pass over a loaded table.
//!
//! Stages run in a fixed order:
//!
//! 1. resolve address columns against the table's headers
//! 2. combine, fill and duplicate billing addresses
//! 3. backfill friendly names (over originals and duplicates)
//! 4. project onto the output schema

use std::time::Instant;

use serde::Serialize;
use tracing::{info, info_span};

use billmerge_map::{AddressColumns, FieldResolution};
use billmerge_model::{FriendlyNameMode, OutputTable, ProcessingOptions, RecordTable};

use crate::friendly_name::{backfill_friendly_names, build_name_map};
use crate::reconcile::reconcile_addresses;
use crate::schema::{finalize_schema, missing_columns};

/// Counts gathered over one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileStats {
    pub input_records: usize,
    pub address_from_extended: usize,
    pub address_from_legacy: usize,
    pub secondary_filled: usize,
    pub duplicates_emitted: usize,
    pub names_backfilled: usize,
    pub missing_columns: Vec<String>,
    pub output_records: usize,
}

/// Result of [`reconcile`].
#[derive(Debug, Clone)]
pub struct ReconcileOutcome {
    pub output: OutputTable,
    pub stats: ReconcileStats,
    pub resolutions: Vec<FieldResolution>,
}

/// Reconciles `table` into the fixed output shape.
///
/// The table is consumed: derived billing address columns and duplicates are
/// written into it before projection.
pub fn reconcile(mut table: RecordTable, options: &ProcessingOptions) -> ReconcileOutcome {
    let span = info_span!("reconcile", records = table.len());
    let _guard = span.enter();
    let start = Instant::now();

    let mut stats = ReconcileStats {
        input_records: table.len(),
        ..ReconcileStats::default()
    };

    let columns = AddressColumns::resolve(&table.columns);
    let resolutions = columns.resolutions();

    let counts = reconcile_addresses(&mut table, &columns, options.address_duplication);
    stats.address_from_extended = counts.from_extended;
    stats.address_from_legacy = counts.from_legacy;
    stats.secondary_filled = counts.secondary_filled;
    stats.duplicates_emitted = counts.duplicates;

    if options.friendly_names == FriendlyNameMode::Backfill {
        let names = build_name_map(&table.records);
        stats.names_backfilled = backfill_friendly_names(&mut table.records, &names);
    }

    stats.missing_columns = missing_columns(&table)
        .into_iter()
        .map(str::to_string)
        .collect();
    let output = finalize_schema(&table);
    stats.output_records = output.len();

    info!(
        input_records = stats.input_records,
        secondary_filled = stats.secondary_filled,
        duplicates = stats.duplicates_emitted,
        names_backfilled = stats.names_backfilled,
        output_records = stats.output_records,
        duration_ms = start.elapsed().as_millis(),
        "reconcile complete"
    );

    ReconcileOutcome {
        output,
        stats,
        resolutions,
    }
}
