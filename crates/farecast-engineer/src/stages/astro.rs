//! Sun and moon features.

use anyhow::{Context, Result};
use polars::prelude::*;
use rand::RngExt;

use crate::context::StageContext;
use crate::frame_utils::has_column;
use crate::pipeline::FeatureStage;

pub struct AstroStage;

impl FeatureStage for AstroStage {
    fn apply(&self, df: &mut DataFrame, ctx: &mut StageContext) -> Result<()> {
        // The time stage normally established `hour`; recover it from the
        // datetime column when running standalone.
        if !has_column(df, "hour") && has_column(df, "datetime") {
            *df = df
                .clone()
                .lazy()
                .with_column(col("datetime").dt().hour().cast(DataType::Int32).alias("hour"))
                .collect()
                .context("derive hour for daytime flag")?;
        }
        if has_column(df, "hour") {
            *df = df
                .clone()
                .lazy()
                .with_column(
                    (col("hour").gt_eq(lit(6)).and(col("hour").lt_eq(lit(18))))
                        .cast(DataType::Int32)
                        .alias("is_daytime"),
                )
                .collect()
                .context("derive daytime flag")?;
        }

        // Uniform placeholder in [0, 1) until real ephemeris data is wired in.
        let brightness: Vec<f64> = (0..df.height()).map(|_| ctx.rng.random::<f64>()).collect();
        df.with_column(Series::new("moon_brightness".into(), brightness))?;
        Ok(())
    }

    fn stage_name(&self) -> &'static str {
        "astro"
    }
}
