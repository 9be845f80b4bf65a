//! Clock-derived features from the `datetime` column.
//!
//! These formulas are the train-time half of the serving contract: the
//! online synthesizer computes the same fields from the wall clock, so any
//! change here must be mirrored there.

use anyhow::{Context, Result};
use polars::prelude::*;
use tracing::debug;

use crate::context::StageContext;
use crate::frame_utils::has_column;
use crate::pipeline::FeatureStage;

pub struct TimeStage;

impl FeatureStage for TimeStage {
    fn apply(&self, df: &mut DataFrame, _ctx: &mut StageContext) -> Result<()> {
        let ready = has_column(df, "datetime")
            && matches!(
                df.column("datetime")?.dtype(),
                DataType::Datetime(_, _)
            );
        if !ready {
            debug!("no datetime column, skipping time features");
            return Ok(());
        }

        *df = df
            .clone()
            .lazy()
            .with_columns([
                col("datetime").dt().hour().cast(DataType::Int32).alias("hour"),
                col("datetime").dt().day().cast(DataType::Int32).alias("day"),
                col("datetime")
                    .dt()
                    .month()
                    .cast(DataType::Int32)
                    .alias("month"),
                // chrono-style weekday: 0 = Monday.
                (col("datetime").dt().weekday().cast(DataType::Int32) - lit(1))
                    .alias("day_of_week"),
            ])
            .with_columns([
                col("day_of_week")
                    .gt_eq(lit(5))
                    .cast(DataType::Int32)
                    .alias("is_weekend"),
                (col("hour").gt_eq(lit(7)).and(col("hour").lt_eq(lit(9))))
                    .or(col("hour").gt_eq(lit(17)).and(col("hour").lt_eq(lit(19))))
                    .cast(DataType::Int32)
                    .alias("rush_hour"),
                // (month % 12) // 3 + 1 -> 1:Winter, 2:Spring, 3:Summer, 4:Autumn
                when((col("month") % lit(12)).lt(lit(3)))
                    .then(lit(1))
                    .when((col("month") % lit(12)).lt(lit(6)))
                    .then(lit(2))
                    .when((col("month") % lit(12)).lt(lit(9)))
                    .then(lit(3))
                    .otherwise(lit(4))
                    .cast(DataType::Int32)
                    .alias("season"),
                (col("hour").gt_eq(lit(6)).and(col("hour").lt_eq(lit(18))))
                    .cast(DataType::Int32)
                    .alias("is_daytime"),
            ])
            .collect()
            .context("derive time features")?;
        Ok(())
    }

    fn stage_name(&self) -> &'static str {
        "time"
    }
}
