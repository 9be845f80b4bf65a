use std::path::PathBuf;

use farecast_model::{FeatureRow, GenerationMode};

/// Outcome of a single estimate call.
pub struct EstimateResult {
    pub fare: f64,
    pub row: FeatureRow,
    pub mode: GenerationMode,
}

/// Outcome of a batch engineering run.
pub struct EngineerSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows_in: usize,
    pub rows_out: usize,
    pub columns_out: usize,
    pub full_frame: bool,
    pub duration_ms: u128,
}
