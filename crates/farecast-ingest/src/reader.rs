//! Raw trip CSV loading.
//!
//! Full loads go through Polars with schema inference; a cheap header peek
//! via the `csv` crate lets callers fail with a clear message before the
//! full parse when a required column is absent.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("trip data file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("{path}: missing required column {column:?} (found: {found})")]
    MissingColumn {
        path: PathBuf,
        column: String,
        found: String,
    },
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read only the header row of a CSV file.
pub fn peek_headers(path: &Path) -> Result<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("read headers: {}", path.display()))?;
    Ok(headers.iter().map(normalize_header).collect())
}

/// Fail fast when any of `required` is absent from the file's header row.
pub fn ensure_columns(path: &Path, required: &[&str]) -> Result<()> {
    let headers = peek_headers(path)?;
    for column in required {
        if !headers.iter().any(|header| header == column) {
            return Err(IngestError::MissingColumn {
                path: path.to_path_buf(),
                column: (*column).to_string(),
                found: headers.join(", "),
            }
            .into());
        }
    }
    Ok(())
}

/// Load a raw trip CSV into a DataFrame with inferred dtypes.
pub fn read_trips_csv(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(IngestError::FileNotFound(path.to_path_buf()).into());
    }
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("Failed to create CSV reader: {}", path.display()))?
        .finish()
        .with_context(|| format!("Failed to read CSV: {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded trip data"
    );
    Ok(df)
}
