//! The feature schema shared by batch engineering and online synthesis.
//!
//! The regression artifact consumes columns positionally and has no
//! column-name awareness at inference, so the field set and order defined
//! here are the binding contract between training and serving. Both
//! pipelines import this constant; neither is allowed to carry its own copy.

use serde::{Deserialize, Serialize};

/// Semantic kind of a feature column, used for display formatting and
/// documentation. Every value is carried as `f64` at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureKind {
    /// Whole-valued feature (hour, encoded labels, bearings).
    Integer,
    /// Continuous measurement or derived ratio.
    Float,
    /// 0/1 indicator.
    Flag,
}

impl FeatureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureKind::Integer => "integer",
            FeatureKind::Float => "float",
            FeatureKind::Flag => "flag",
        }
    }
}

/// One named column of the feature contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureColumn {
    pub name: &'static str,
    pub kind: FeatureKind,
}

const fn int(name: &'static str) -> FeatureColumn {
    FeatureColumn {
        name,
        kind: FeatureKind::Integer,
    }
}

const fn float(name: &'static str) -> FeatureColumn {
    FeatureColumn {
        name,
        kind: FeatureKind::Float,
    }
}

const fn flag(name: &'static str) -> FeatureColumn {
    FeatureColumn {
        name,
        kind: FeatureKind::Flag,
    }
}

/// Number of columns in the feature contract.
pub const FEATURE_COUNT: usize = 47;

/// The exact feature set consumed by the regression artifact. Order matters.
pub const FEATURE_COLUMNS: [FeatureColumn; FEATURE_COUNT] = [
    int("hour"),
    int("day"),
    int("month"),
    float("distance"),
    float("surge_multiplier"),
    float("latitude"),
    float("longitude"),
    float("temperature"),
    float("apparentTemperature"),
    float("precipIntensity"),
    float("precipProbability"),
    float("humidity"),
    float("windSpeed"),
    float("windGust"),
    float("visibility"),
    float("temperatureHigh"),
    float("temperatureLow"),
    float("apparentTemperatureHigh"),
    float("apparentTemperatureLow"),
    float("dewPoint"),
    float("pressure"),
    int("windBearing"),
    float("cloudCover"),
    int("uvIndex"),
    float("ozone"),
    float("moonPhase"),
    float("precipIntensityMax"),
    float("temperatureMin"),
    float("temperatureMax"),
    float("apparentTemperatureMin"),
    float("apparentTemperatureMax"),
    int("day_of_week"),
    flag("is_weekend"),
    flag("rush_hour"),
    int("season"),
    flag("is_daytime"),
    int("source_encoded"),
    int("destination_encoded"),
    int("cab_type_encoded"),
    flag("surge_flag"),
    int("product_group_encoded"),
    float("price_per_km"),
    float("feels_like"),
    flag("precip_flag"),
    float("wind_stress"),
    flag("visibility_flag"),
    float("moon_brightness"),
];

/// Position of a column in the contract, or `None` for names outside it.
pub fn column_index(name: &str) -> Option<usize> {
    FEATURE_COLUMNS.iter().position(|column| column.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_has_exactly_47_columns() {
        assert_eq!(FEATURE_COLUMNS.len(), FEATURE_COUNT);
    }

    #[test]
    fn column_names_are_unique() {
        for (idx, column) in FEATURE_COLUMNS.iter().enumerate() {
            assert_eq!(
                column_index(column.name),
                Some(idx),
                "duplicate or misplaced column {}",
                column.name
            );
        }
    }

    #[test]
    fn order_matches_training_layout() {
        assert_eq!(FEATURE_COLUMNS[0].name, "hour");
        assert_eq!(FEATURE_COLUMNS[3].name, "distance");
        assert_eq!(FEATURE_COLUMNS[31].name, "day_of_week");
        assert_eq!(FEATURE_COLUMNS[46].name, "moon_brightness");
    }

    #[test]
    fn unknown_name_has_no_index() {
        assert_eq!(column_index("price"), None);
        assert_eq!(column_index("log_price"), None);
    }
}
