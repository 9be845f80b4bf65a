//! Price-derived features and the regression target.
//!
//! Price is the training target: rows without one carry no signal and are
//! dropped. The raw price leaves the feature set here, replaced by
//! `log_price`, which training sets aside as the target. This is the one
//! stage that hard-fails when its input column is gone — re-running the
//! pipeline on already-engineered data must surface a clear absence signal,
//! not silently succeed.

use anyhow::{Context, Result};
use polars::prelude::*;

use crate::context::StageContext;
use crate::frame_utils::has_column;
use crate::pipeline::FeatureStage;

pub struct PriceStage;

impl FeatureStage for PriceStage {
    fn apply(&self, df: &mut DataFrame, _ctx: &mut StageContext) -> Result<()> {
        if !has_column(df, "price") {
            anyhow::bail!("price column is required to derive price features (already dropped?)");
        }

        let before = df.height();
        let mut lazy = df
            .clone()
            .lazy()
            .filter(col("price").is_not_null());

        if has_column(df, "distance") {
            lazy = lazy.with_column(
                when(col("distance").neq(lit(0.0)))
                    .then(col("price") / col("distance"))
                    .otherwise(lit(Null {}))
                    .alias("price_per_km"),
            );
        }
        lazy = lazy.with_column(col("price").log1p().alias(crate::TARGET_COLUMN));

        *df = lazy.collect().context("derive price features")?;
        if df.height() < before {
            tracing::debug!(
                dropped = before - df.height(),
                "dropped rows without a price"
            );
        }
        df.drop_in_place("price").context("drop raw price")?;
        Ok(())
    }

    fn stage_name(&self) -> &'static str {
        "price"
    }
}
