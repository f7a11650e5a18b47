use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use billmerge_map::FieldResolution;
use billmerge_model::ProcessingOptions;
use billmerge_transform::ReconcileStats;

#[derive(Debug)]
pub struct MergeResult {
    pub input_dir: PathBuf,
    /// `None` for a dry run.
    pub output: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub files: Vec<PathBuf>,
    pub options: ProcessingOptions,
    pub stats: ReconcileStats,
    pub resolutions: Vec<FieldResolution>,
}

impl MergeResult {
    pub fn is_dry_run(&self) -> bool {
        self.output.is_none()
    }
}

/// JSON run report written by `--report`.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub input_dir: &'a PathBuf,
    pub output: Option<&'a PathBuf>,
    pub dry_run: bool,
    pub files: &'a [PathBuf],
    pub options: ProcessingOptions,
    pub stats: &'a ReconcileStats,
    pub resolutions: &'a [FieldResolution],
}

impl<'a> RunReport<'a> {
    pub fn new(
        result: &'a MergeResult,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        Self {
            started_at,
            finished_at,
            input_dir: &result.input_dir,
            output: result.output.as_ref(),
            dry_run: result.is_dry_run(),
            files: &result.files,
            options: result.options,
            stats: &result.stats,
            resolutions: &result.resolutions,
        }
    }
}
