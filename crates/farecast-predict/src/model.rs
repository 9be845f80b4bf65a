//! The frozen regression artifact.
//!
//! A linear model over the shared feature schema, serialized as JSON:
//! `feature_count` weights in schema order, an intercept, and the declared
//! training target. The artifact states its own units — a model trained on
//! `log1p(price)` is stamped `"target": "log1p"` and the inverse transform
//! is applied at inference, so fare units are never guessed.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use farecast_model::FeatureRow;

use crate::error::ModelError;

/// Transform that was applied to the training target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetTransform {
    /// Trained directly on the price.
    #[default]
    Raw,
    /// Trained on log1p(price); predictions pass through expm1.
    Log1p,
}

impl TargetTransform {
    fn invert(&self, value: f64) -> f64 {
        match self {
            TargetTransform::Raw => value,
            TargetTransform::Log1p => value.exp_m1(),
        }
    }
}

/// A loaded regression artifact. Pure data: reading is reentrant, so one
/// handle can serve any number of concurrent callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FareModel {
    /// Expected row width; must equal the weight count.
    pub feature_count: usize,
    /// One coefficient per schema column, in schema order.
    pub weights: Vec<f64>,
    pub intercept: f64,
    #[serde(default)]
    pub target: TargetTransform,
}

impl FareModel {
    /// Load and validate an artifact from disk.
    ///
    /// Failures here are fatal to the serving shell: a missing file, broken
    /// JSON, or a weight vector that contradicts the declared width all
    /// surface as [`ModelError`].
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        if !path.exists() {
            return Err(ModelError::NotFound(path.to_path_buf()));
        }
        let raw = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let model: FareModel =
            serde_json::from_str(&raw).map_err(|source| ModelError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        if model.weights.len() != model.feature_count {
            return Err(ModelError::WeightMismatch {
                declared: model.feature_count,
                actual: model.weights.len(),
            });
        }
        Ok(model)
    }

    /// Predict a fare from a feature row.
    ///
    /// Consumption is purely positional: no schema validation happens at
    /// this boundary, and a row with the wrong width or column order yields
    /// undefined numeric output rather than an error. Rows built through
    /// `FeatureRowBuilder` uphold the contract; anything else is on the
    /// caller.
    pub fn predict(&self, row: &FeatureRow) -> f64 {
        let margin: f64 = self
            .weights
            .iter()
            .zip(row.values())
            .map(|(weight, value)| weight * value)
            .sum();
        self.target.invert(margin + self.intercept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use farecast_model::{FEATURE_COLUMNS, FEATURE_COUNT, FeatureRowBuilder};

    fn unit_row() -> FeatureRow {
        let mut builder = FeatureRowBuilder::new();
        for column in &FEATURE_COLUMNS {
            builder.set(column.name, 1.0).unwrap();
        }
        builder.finish().unwrap()
    }

    fn stub_model(intercept: f64) -> FareModel {
        FareModel {
            feature_count: FEATURE_COUNT,
            weights: vec![0.0; FEATURE_COUNT],
            intercept,
            target: TargetTransform::Raw,
        }
    }

    #[test]
    fn stub_scalar_propagates_unchanged() {
        let model = stub_model(13.37);
        assert_eq!(model.predict(&unit_row()), 13.37);
    }

    #[test]
    fn linear_combination_includes_intercept() {
        let mut model = stub_model(2.0);
        model.weights = (0..FEATURE_COUNT).map(|idx| idx as f64).collect();
        let expected: f64 = (0..FEATURE_COUNT).map(|idx| idx as f64).sum::<f64>() + 2.0;
        assert_eq!(model.predict(&unit_row()), expected);
    }

    #[test]
    fn log1p_target_is_inverted() {
        let mut model = stub_model(10.0f64.ln_1p());
        model.target = TargetTransform::Log1p;
        let fare = model.predict(&unit_row());
        assert!((fare - 10.0).abs() < 1e-9);
    }

    #[test]
    fn load_round_trips_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fare_model.json");
        let model = stub_model(5.0);
        std::fs::write(&path, serde_json::to_string(&model).unwrap()).unwrap();

        let loaded = FareModel::load(&path).unwrap();
        assert_eq!(loaded.feature_count, FEATURE_COUNT);
        assert_eq!(loaded.intercept, 5.0);
        assert_eq!(loaded.target, TargetTransform::Raw);
    }

    #[test]
    fn missing_artifact_is_fatal() {
        let error = FareModel::load(Path::new("/nonexistent/fare_model.json")).unwrap_err();
        assert!(matches!(error, crate::error::ModelError::NotFound(_)));
    }

    #[test]
    fn corrupt_artifact_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fare_model.json");
        std::fs::write(&path, "{ not json").unwrap();
        let error = FareModel::load(&path).unwrap_err();
        assert!(matches!(error, crate::error::ModelError::Parse { .. }));
    }

    #[test]
    fn weight_count_must_match_declared_width() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fare_model.json");
        let mut model = stub_model(0.0);
        model.weights.pop();
        std::fs::write(&path, serde_json::to_string(&model).unwrap()).unwrap();
        let error = FareModel::load(&path).unwrap_err();
        assert!(matches!(
            error,
            crate::error::ModelError::WeightMismatch { .. }
        ));
    }

    #[test]
    fn artifact_without_target_defaults_to_raw() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fare_model.json");
        let json = format!(
            "{{\"feature_count\":{FEATURE_COUNT},\"weights\":{},\"intercept\":1.0}}",
            serde_json::to_string(&vec![0.0; FEATURE_COUNT]).unwrap()
        );
        std::fs::write(&path, json).unwrap();
        let loaded = FareModel::load(&path).unwrap();
        assert_eq!(loaded.target, TargetTransform::Raw);
    }
}
