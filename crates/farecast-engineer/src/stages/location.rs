//! Dense integer codes for source/destination identifiers.
//!
//! Codes are fit per batch over the sorted distinct labels, so they are
//! batch-local and not stable across runs. The online synthesizer cannot
//! reproduce this mapping and injects placeholder codes instead.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::Result;
use polars::prelude::*;
use tracing::debug;

use crate::context::StageContext;
use crate::frame_utils::has_column;
use crate::pipeline::FeatureStage;

pub struct LocationStage;

impl FeatureStage for LocationStage {
    fn apply(&self, df: &mut DataFrame, _ctx: &mut StageContext) -> Result<()> {
        for source in ["source", "destination"] {
            if !has_column(df, source) {
                debug!(column = source, "missing location column, skipping");
                continue;
            }
            let encoded = encode_sorted_labels(df, source, &format!("{source}_encoded"))?;
            df.with_column(encoded)?;
        }
        Ok(())
    }

    fn stage_name(&self) -> &'static str {
        "location"
    }
}

/// Encode a string column to dense codes over its sorted distinct labels.
fn encode_sorted_labels(df: &DataFrame, source: &str, target: &str) -> Result<Series> {
    let column = df.column(source)?;
    let casted;
    let ca = match column.dtype() {
        DataType::String => column.str()?,
        _ => {
            casted = column.cast(&DataType::String)?;
            casted.str()?
        }
    };

    let mut labels: BTreeSet<String> = BTreeSet::new();
    for value in ca.into_iter().flatten() {
        labels.insert(value.to_string());
    }
    let codes: BTreeMap<&str, i64> = labels
        .iter()
        .enumerate()
        .map(|(code, label)| (label.as_str(), code as i64))
        .collect();

    let encoded: Vec<Option<i64>> = ca
        .into_iter()
        .map(|value| value.map(|label| codes[label]))
        .collect();
    Ok(Series::new(target.into(), encoded))
}
