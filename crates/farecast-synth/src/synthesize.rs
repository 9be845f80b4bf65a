//! Single-row feature synthesis.
//!
//! Expands the four user inputs plus a generation mode into the full row the
//! model expects, in the exact order of the shared schema. Stateless apart
//! from consuming the caller's RNG in dynamic mode.

use chrono::{Local, NaiveDateTime};
use rand::{Rng, RngExt};
use tracing::debug;

use farecast_model::{
    CAB_TYPE_MAP, FeatureRow, FeatureRowBuilder, GenerationMode, PRODUCT_GROUP_MAP, SchemaError,
};

use crate::clock::ClockFeatures;
use crate::env::EnvConditions;

/// Surge multipliers the dynamic policy draws from when the flag is set.
pub const SURGE_STEPS: [f64; 4] = [1.25, 1.5, 1.75, 2.0];

/// Validated inputs from the serving shell.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateRequest {
    /// Trip distance in kilometers.
    pub distance: f64,
    /// Cab vendor label; unknown labels degrade to the baseline code.
    pub cab_type: String,
    /// Product tier label; unknown labels degrade to the baseline code.
    pub product_group: String,
    pub surge_flag: bool,
    pub mode: GenerationMode,
}

/// Surge policy: no flag means no surge in either mode; with the flag set,
/// dynamic mode draws one of the standard steps and static mode pins 1.5.
pub fn surge_multiplier<R: Rng>(surge_flag: bool, mode: GenerationMode, rng: &mut R) -> f64 {
    if !surge_flag {
        return 1.0;
    }
    match mode {
        GenerationMode::Dynamic => SURGE_STEPS[rng.random_range(0..SURGE_STEPS.len())],
        GenerationMode::Static => 1.5,
    }
}

/// Synthesize a feature row for the current local wall-clock time.
pub fn synthesize<R: Rng>(request: &EstimateRequest, rng: &mut R) -> Result<FeatureRow, SchemaError> {
    synthesize_at(request, Local::now().naive_local(), rng)
}

/// Synthesize a feature row for a fixed instant (tests freeze the clock).
pub fn synthesize_at<R: Rng>(
    request: &EstimateRequest,
    now: NaiveDateTime,
    rng: &mut R,
) -> Result<FeatureRow, SchemaError> {
    let clock = ClockFeatures::from_datetime(now);
    let surge = surge_multiplier(request.surge_flag, request.mode, rng);
    let env = match request.mode {
        GenerationMode::Dynamic => EnvConditions::dynamic(rng),
        GenerationMode::Static => EnvConditions::static_defaults(),
    };
    let cab_code = CAB_TYPE_MAP.encode(&request.cab_type);
    let product_code = PRODUCT_GROUP_MAP.encode(&request.product_group);
    debug!(
        mode = %request.mode,
        cab_code,
        product_code,
        surge,
        "synthesizing feature row"
    );

    let mut row = FeatureRowBuilder::new();
    row.set("hour", f64::from(clock.hour))?
        .set("day", f64::from(clock.day))?
        .set("month", f64::from(clock.month))?
        .set("distance", request.distance)?
        .set("surge_multiplier", surge)?
        .set("latitude", env.latitude)?
        .set("longitude", env.longitude)?
        .set("temperature", env.temperature)?
        .set("apparentTemperature", env.apparent_temperature)?
        .set("precipIntensity", env.precip_intensity)?
        .set("precipProbability", env.precip_probability)?
        .set("humidity", env.humidity)?
        .set("windSpeed", env.wind_speed)?
        .set("windGust", env.wind_gust)?
        .set("visibility", env.visibility)?
        .set("temperatureHigh", env.temperature_high)?
        .set("temperatureLow", env.temperature_low)?
        .set("apparentTemperatureHigh", env.apparent_temperature_high)?
        .set("apparentTemperatureLow", env.apparent_temperature_low)?
        .set("dewPoint", env.dew_point)?
        .set("pressure", env.pressure)?
        .set("windBearing", env.wind_bearing as f64)?
        .set("cloudCover", env.cloud_cover)?
        .set("uvIndex", env.uv_index as f64)?
        .set("ozone", env.ozone)?
        .set("moonPhase", env.moon_phase)?
        .set("precipIntensityMax", env.precip_intensity_max)?
        .set("temperatureMin", env.temperature_min)?
        .set("temperatureMax", env.temperature_max)?
        .set("apparentTemperatureMin", env.apparent_temperature_min)?
        .set("apparentTemperatureMax", env.apparent_temperature_max)?
        .set("day_of_week", f64::from(clock.day_of_week))?
        .set("is_weekend", flag(clock.is_weekend))?
        .set("rush_hour", flag(clock.rush_hour))?
        .set("season", f64::from(clock.season))?
        .set("is_daytime", flag(clock.is_daytime))?
        .set("source_encoded", env.source_code as f64)?
        .set("destination_encoded", env.destination_code as f64)?
        .set("cab_type_encoded", cab_code as f64)?
        .set("surge_flag", flag(request.surge_flag))?
        .set("product_group_encoded", product_code as f64)?
        .set("price_per_km", env.price_per_km)?
        .set("feels_like", env.feels_like)?
        .set("precip_flag", flag(env.precip_flag))?
        .set("wind_stress", env.wind_stress)?
        .set("visibility_flag", flag(env.visibility_flag))?
        .set("moon_brightness", env.moon_brightness)?;
    row.finish()
}

fn flag(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}
