use std::path::PathBuf;

use thiserror::Error;

/// Fatal artifact failures. The serving shell cannot proceed without a
/// loadable model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model artifact not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse model artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("model artifact declares {declared} features but carries {actual} weights")]
    WeightMismatch { declared: usize, actual: usize },
}
