//! Type-safe enumerations shared across the pipelines.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the synthesizer fills fields that have no online data source.
///
/// Neither mode is live telemetry: `Dynamic` draws from plausible ranges to
/// mimic changing conditions, `Static` pins fixed midpoint constants for a
/// reproducible estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Randomized environment proxies within documented plausible ranges.
    #[default]
    Dynamic,
    /// Fixed representative constants.
    Static,
}

impl GenerationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationMode::Dynamic => "dynamic",
            GenerationMode::Static => "static",
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenerationMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "dynamic" => Ok(GenerationMode::Dynamic),
            "static" => Ok(GenerationMode::Static),
            other => Err(format!("unknown generation mode: {other}")),
        }
    }
}
