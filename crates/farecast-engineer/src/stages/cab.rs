//! Cab vendor, surge, and product tier features.
//!
//! Vendor and tier codes come from the fixed encoding maps shared with the
//! synthesizer, so the same label always maps to the same code at train and
//! serve time. Unknown labels take the baseline code 0.

use anyhow::{Context, Result};
use polars::prelude::*;
use tracing::debug;

use farecast_model::{CAB_TYPE_MAP, ProductTier};

use crate::context::StageContext;
use crate::frame_utils::has_column;
use crate::pipeline::FeatureStage;

pub struct CabStage;

impl FeatureStage for CabStage {
    fn apply(&self, df: &mut DataFrame, _ctx: &mut StageContext) -> Result<()> {
        if has_column(df, "cab_type") {
            let column = df.column("cab_type")?;
            let ca = column.str().context("cab_type must be a string column")?;
            let encoded: Vec<Option<i64>> = ca
                .into_iter()
                .map(|value| value.map(|label| CAB_TYPE_MAP.encode(label)))
                .collect();
            df.with_column(Series::new("cab_type_encoded".into(), encoded))?;
        } else {
            debug!("missing cab_type column, skipping vendor encoding");
        }

        if has_column(df, "surge_multiplier") {
            *df = df
                .clone()
                .lazy()
                .with_column(
                    col("surge_multiplier")
                        .gt(lit(1.0))
                        .cast(DataType::Int32)
                        .alias("surge_flag"),
                )
                .collect()
                .context("derive surge flag")?;
        } else {
            debug!("missing surge_multiplier column, skipping surge flag");
        }

        if has_column(df, "name") {
            let column = df.column("name")?;
            let ca = column.str().context("name must be a string column")?;
            let mut tiers: Vec<Option<&'static str>> = Vec::with_capacity(df.height());
            let mut codes: Vec<Option<i64>> = Vec::with_capacity(df.height());
            for value in ca.into_iter() {
                match value {
                    Some(name) => {
                        let tier = ProductTier::from_product_name(name);
                        tiers.push(Some(tier.as_str()));
                        codes.push(Some(tier.code()));
                    }
                    None => {
                        tiers.push(None);
                        codes.push(None);
                    }
                }
            }
            df.with_column(Series::new("product_group".into(), tiers))?;
            df.with_column(Series::new("product_group_encoded".into(), codes))?;
        } else {
            debug!("missing name column, skipping product tier");
        }

        Ok(())
    }

    fn stage_name(&self) -> &'static str {
        "cab"
    }
}
