//! Hour-of-day extraction from remaining datetime columns.
//!
//! The `<name>_hour` intermediates land in the full engineered frame for
//! inspection; schema alignment keeps them out of the training matrix.

use anyhow::{Context, Result};
use polars::prelude::*;

use crate::context::StageContext;
use crate::pipeline::FeatureStage;

pub struct HourExtractionStage;

impl FeatureStage for HourExtractionStage {
    fn apply(&self, df: &mut DataFrame, _ctx: &mut StageContext) -> Result<()> {
        let exprs: Vec<Expr> = df
            .get_columns()
            .iter()
            .filter(|column| {
                column.name().contains("Time")
                    && matches!(column.dtype(), DataType::Datetime(_, _))
            })
            .map(|column| {
                let name = column.name().as_str();
                col(name)
                    .dt()
                    .hour()
                    .cast(DataType::Int32)
                    .alias(format!("{name}_hour"))
            })
            .collect();

        if exprs.is_empty() {
            return Ok(());
        }
        *df = df
            .clone()
            .lazy()
            .with_columns(exprs)
            .collect()
            .context("extract hour columns")?;
        Ok(())
    }

    fn stage_name(&self) -> &'static str {
        "hours"
    }
}
