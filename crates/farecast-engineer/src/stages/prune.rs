//! Schema pruning: identifier, raw categorical, and intermediate datetime
//! columns that must not reach the model. The raw `summary` fields would
//! leak the weather flags' source text; `datetime` and the `*Time` columns
//! have served their derivations by this point.

use anyhow::Result;
use polars::prelude::DataFrame;

use crate::context::StageContext;
use crate::pipeline::FeatureStage;

/// Explicit deny-list; columns absent from the frame are ignored.
const DROP_COLUMNS: &[&str] = &[
    "id",
    "timezone",
    "source",
    "destination",
    "cab_type",
    "product_id",
    "name",
    "short_summary",
    "long_summary",
    "summary",
    "icon",
    "product_group",
    "windGustTime",
    "temperatureHighTime",
    "temperatureLowTime",
    "apparentTemperatureHighTime",
    "apparentTemperatureLowTime",
    "sunriseTime",
    "sunsetTime",
    "uvIndexTime",
    "temperatureMinTime",
    "temperatureMaxTime",
    "apparentTemperatureMinTime",
    "apparentTemperatureMaxTime",
    "datetime",
];

pub struct PruneStage;

impl FeatureStage for PruneStage {
    fn apply(&self, df: &mut DataFrame, _ctx: &mut StageContext) -> Result<()> {
        let present: Vec<&str> = DROP_COLUMNS
            .iter()
            .copied()
            .filter(|name| crate::frame_utils::has_column(df, name))
            .collect();
        if !present.is_empty() {
            *df = df.drop_many(present);
        }
        Ok(())
    }

    fn stage_name(&self) -> &'static str {
        "prune"
    }
}
