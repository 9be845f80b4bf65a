//! Weather-derived features.
//!
//! Every derivation is guarded on its source column: weather fields are
//! optional in raw exports, and an absent input just means the feature is
//! omitted for the batch, never a dropped row.

use anyhow::{Context, Result};
use polars::prelude::*;

use crate::context::StageContext;
use crate::frame_utils::has_column;
use crate::pipeline::FeatureStage;

pub struct WeatherStage;

impl FeatureStage for WeatherStage {
    fn apply(&self, df: &mut DataFrame, _ctx: &mut StageContext) -> Result<()> {
        let mut exprs: Vec<Expr> = Vec::new();

        if has_column(df, "temperature") && has_column(df, "apparentTemperature") {
            exprs.push((col("apparentTemperature") - col("temperature")).alias("feels_like"));
        }
        if has_column(df, "precipIntensity") {
            exprs.push(
                col("precipIntensity")
                    .gt(lit(0.0))
                    .cast(DataType::Int32)
                    .alias("precip_flag"),
            );
        }
        if has_column(df, "windSpeed") {
            exprs.push((col("windSpeed") * col("windSpeed")).alias("wind_stress"));
        }
        if has_column(df, "visibility") {
            exprs.push(
                col("visibility")
                    .lt(lit(5.0))
                    .cast(DataType::Int32)
                    .alias("visibility_flag"),
            );
        }
        if has_column(df, "summary") {
            // Independent flags; a "Partly Cloudy with Rain" summary sets two.
            for (pattern, name) in [
                ("(?i)rain", "is_rain"),
                ("(?i)clear", "is_clear"),
                ("(?i)cloud", "is_cloudy"),
            ] {
                exprs.push(
                    col("summary")
                        .str()
                        .contains(lit(pattern), false)
                        .cast(DataType::Int32)
                        .alias(name),
                );
            }
        }

        if exprs.is_empty() {
            return Ok(());
        }
        *df = df
            .clone()
            .lazy()
            .with_columns(exprs)
            .collect()
            .context("derive weather features")?;
        Ok(())
    }

    fn stage_name(&self) -> &'static str {
        "weather"
    }
}
