//! Ordered feature-derivation pipeline.
//!
//! Each stage implements [`FeatureStage`] and is executed strictly in order;
//! later stages assume the columns established by earlier ones. The master
//! entry points are [`engineer_features`] (clean + all stages) and
//! [`training_matrix`] (engineer + alignment to the shared schema).

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::debug;

use farecast_model::FEATURE_COLUMNS;

use crate::TARGET_COLUMN;
use crate::clean::clean_trip_data;
use crate::context::StageContext;
use crate::stages::{
    AstroStage, CabStage, HourExtractionStage, LocationStage, PriceStage, PruneStage, TimeStage,
    WeatherStage,
};

/// A single derivation stage: a pure frame-to-frame transform.
pub trait FeatureStage: Send + Sync {
    /// Apply this stage to the DataFrame in place.
    fn apply(&self, df: &mut DataFrame, ctx: &mut StageContext) -> Result<()>;

    /// Human-readable name for logging.
    fn stage_name(&self) -> &'static str;
}

/// An ordered pipeline of feature stages.
pub struct FeaturePipeline {
    stages: Vec<Box<dyn FeatureStage>>,
}

impl Default for FeaturePipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl FeaturePipeline {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    pub fn add_stage(mut self, stage: Box<dyn FeatureStage>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Execute all stages in order.
    pub fn execute(&self, df: &mut DataFrame, ctx: &mut StageContext) -> Result<()> {
        for stage in &self.stages {
            stage
                .apply(df, ctx)
                .with_context(|| format!("feature stage {}", stage.stage_name()))?;
            ctx.executed_stages.push(stage.stage_name().to_string());
            debug!(
                stage = stage.stage_name(),
                rows = df.height(),
                columns = df.width(),
                "stage complete"
            );
        }
        Ok(())
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.stage_name()).collect()
    }
}

/// The standard derivation order.
pub fn build_default_pipeline() -> FeaturePipeline {
    FeaturePipeline::new()
        .add_stage(Box::new(TimeStage))
        .add_stage(Box::new(LocationStage))
        .add_stage(Box::new(CabStage))
        .add_stage(Box::new(PriceStage))
        .add_stage(Box::new(WeatherStage))
        .add_stage(Box::new(AstroStage))
        .add_stage(Box::new(HourExtractionStage))
        .add_stage(Box::new(PruneStage))
}

/// Clean a raw trip frame and run every derivation stage in place.
///
/// Re-running on already-engineered data fails in the price stage (the raw
/// price was dropped on the first pass); the error names the missing column.
pub fn engineer_features(df: &mut DataFrame, ctx: &mut StageContext) -> Result<()> {
    clean_trip_data(df)?;
    build_default_pipeline().execute(df, ctx)
}

/// Project an engineered frame onto the training layout: the shared feature
/// schema, in order, plus the target column. Any missing column is a loud
/// error rather than silent schema drift.
pub fn align_to_schema(df: &DataFrame) -> Result<DataFrame> {
    let names: Vec<&str> = FEATURE_COLUMNS
        .iter()
        .map(|column| column.name)
        .chain(std::iter::once(TARGET_COLUMN))
        .collect();
    df.select(names)
        .context("align engineered frame to the training schema")
}

/// Engineer a raw trip frame and align it to the training layout.
pub fn training_matrix(mut df: DataFrame, ctx: &mut StageContext) -> Result<DataFrame> {
    engineer_features(&mut df, ctx)?;
    align_to_schema(&df)
}
