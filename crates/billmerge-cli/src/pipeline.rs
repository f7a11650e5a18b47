//! Merge pipeline with explicit stages.
//!
//! 1. **Select**: check that the required paths were given
//! 2. **Ingest**: discover and read every CSV export in the input directory
//! 3. **Reconcile**: resolve columns, reconcile addresses, backfill names,
//!    project onto the output schema
//! 4. **Output**: write the CSV atomically, then the optional JSON report
//!
//! Any failure aborts the run before the output file is touched.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, info_span};

use billmerge_ingest::load_directory;
use billmerge_model::{OutputTable, ProcessingOptions, RecordTable};
use billmerge_output::write_output_csv;
use billmerge_transform::reconcile;

use crate::error::SelectionError;
use crate::types::{MergeResult, RunReport};

// ============================================================================
// Stage 1: Select
// ============================================================================

/// Everything a merge run needs, with paths already validated.
#[derive(Debug, Clone)]
pub struct MergeRequest {
    pub input_dir: PathBuf,
    /// `None` runs everything but the write.
    pub output: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub options: ProcessingOptions,
}

impl MergeRequest {
    /// Builds a request from optional command-line paths.
    ///
    /// The output path is required unless `dry_run` is set; with `dry_run`
    /// any given output path is ignored.
    pub fn select(
        input_dir: Option<&Path>,
        output: Option<&Path>,
        dry_run: bool,
    ) -> std::result::Result<Self, SelectionError> {
        let input_dir = input_dir.ok_or(SelectionError::NoInputSelected)?;
        let output = match (output, dry_run) {
            (_, true) => None,
            (Some(path), false) => Some(path.to_path_buf()),
            (None, false) => return Err(SelectionError::NoOutputSelected),
        };
        Ok(Self {
            input_dir: input_dir.to_path_buf(),
            output,
            report: None,
            options: ProcessingOptions::default(),
        })
    }

    #[must_use]
    pub fn with_report(mut self, report: Option<PathBuf>) -> Self {
        self.report = report;
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: ProcessingOptions) -> Self {
        self.options = options;
        self
    }
}

// ============================================================================
// Stage 2: Ingest
// ============================================================================

/// Loads every CSV export in `input_dir` into one table.
pub fn ingest(input_dir: &Path) -> Result<RecordTable> {
    let span = info_span!("ingest", input_dir = %input_dir.display());
    let start = Instant::now();
    let table = span
        .in_scope(|| load_directory(input_dir))
        .context("load input directory")?;
    info!(
        file_count = table.sources.len(),
        records = table.len(),
        columns = table.columns.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(table)
}

// ============================================================================
// Stage 4: Output
// ============================================================================

/// Writes the reconciled table to `path`.
pub fn output(table: &OutputTable, path: &Path) -> Result<()> {
    let span = info_span!("output", path = %path.display());
    let start = Instant::now();
    span.in_scope(|| write_output_csv(table, path))
        .with_context(|| format!("write {}", path.display()))?;
    info!(
        rows = table.len(),
        duration_ms = start.elapsed().as_millis(),
        "output complete"
    );
    Ok(())
}

/// Writes the JSON run report to `path`.
pub fn write_report(report: &RunReport<'_>, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)
        .with_context(|| format!("write report {}", path.display()))?;
    info!(path = %path.display(), "report written");
    Ok(())
}

/// Runs ingest, reconcile and output for one request.
pub fn run_pipeline(request: &MergeRequest) -> Result<MergeResult> {
    let started_at = Utc::now();
    let span = info_span!("merge", input_dir = %request.input_dir.display());
    let _guard = span.enter();

    let table = ingest(&request.input_dir)?;
    let files = table.sources.clone();

    // Stage 3: Reconcile
    let outcome = reconcile(table, &request.options);

    match &request.output {
        Some(path) => output(&outcome.output, path)?,
        None => info!(rows = outcome.output.len(), "dry run; nothing written"),
    }

    let result = MergeResult {
        input_dir: request.input_dir.clone(),
        output: request.output.clone(),
        report: request.report.clone(),
        files,
        options: request.options,
        stats: outcome.stats,
        resolutions: outcome.resolutions,
    };

    if let Some(path) = &request.report {
        write_report(&RunReport::new(&result, started_at, Utc::now()), path)?;
    }
    Ok(result)
}
