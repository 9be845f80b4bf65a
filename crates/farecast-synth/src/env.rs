//! Environment proxies for fields with no online data source.
//!
//! There is no live weather or geo feed at serving time. Dynamic mode draws
//! each field from a plausible range to mimic changing conditions; static
//! mode pins the representative midpoints. Both are approximations standing
//! in for unavailable telemetry, not measurements.

use rand::{Rng, RngExt};

/// One sampled (or pinned) set of environment values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvConditions {
    pub temperature: f64,
    pub apparent_temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub wind_gust: f64,
    pub visibility: f64,
    pub dew_point: f64,
    pub pressure: f64,
    pub cloud_cover: f64,
    pub uv_index: i64,
    pub ozone: f64,
    pub moon_phase: f64,
    pub precip_intensity: f64,
    pub precip_probability: f64,
    pub precip_intensity_max: f64,
    pub temperature_high: f64,
    pub temperature_low: f64,
    pub apparent_temperature_high: f64,
    pub apparent_temperature_low: f64,
    pub temperature_min: f64,
    pub temperature_max: f64,
    pub apparent_temperature_min: f64,
    pub apparent_temperature_max: f64,
    /// Placeholder geography; no trip coordinates exist at serving time.
    pub latitude: f64,
    pub longitude: f64,
    pub wind_bearing: i64,
    pub price_per_km: f64,
    pub feels_like: f64,
    pub precip_flag: bool,
    pub wind_stress: f64,
    pub visibility_flag: bool,
    pub moon_brightness: f64,
    pub source_code: i64,
    pub destination_code: i64,
}

impl EnvConditions {
    /// Draw every field from its documented plausible range.
    pub fn dynamic<R: Rng>(rng: &mut R) -> Self {
        let temperature = rng.random_range(10.0..35.0);
        let apparent_temperature = temperature + rng.random_range(-2.0..2.0);
        let wind_speed = rng.random_range(0.0..20.0);
        let visibility = rng.random_range(5.0..15.0);
        let moon_phase = rng.random_range(0.0..1.0);
        let precip_intensity = rng.random_range(0.0..0.4);
        let precip_probability = rng.random_range(0.0..1.0);
        Self {
            temperature,
            apparent_temperature,
            humidity: rng.random_range(0.3..0.9),
            wind_speed,
            wind_gust: wind_speed + rng.random_range(0.0..10.0),
            visibility,
            dew_point: rng.random_range(0.0..25.0),
            pressure: rng.random_range(990.0..1025.0),
            cloud_cover: rng.random_range(0.0..1.0),
            uv_index: rng.random_range(0..=10),
            ozone: rng.random_range(250.0..350.0),
            moon_phase,
            precip_intensity,
            precip_probability,
            precip_intensity_max: rng.random_range(0.0..0.6),
            temperature_high: temperature + rng.random_range(1.0..4.0),
            temperature_low: temperature - rng.random_range(1.0..4.0),
            apparent_temperature_high: apparent_temperature + rng.random_range(0.5..2.0),
            apparent_temperature_low: apparent_temperature - rng.random_range(0.5..2.0),
            temperature_min: temperature - rng.random_range(1.0..5.0),
            temperature_max: temperature + rng.random_range(1.0..5.0),
            apparent_temperature_min: apparent_temperature - rng.random_range(1.0..3.0),
            apparent_temperature_max: apparent_temperature + rng.random_range(1.0..3.0),
            latitude: rng.random_range(-90.0..90.0),
            longitude: rng.random_range(-180.0..180.0),
            wind_bearing: rng.random_range(0..=360),
            price_per_km: rng.random_range(8.0..20.0),
            feels_like: apparent_temperature,
            precip_flag: precip_intensity > 0.01 || precip_probability > 0.4,
            wind_stress: wind_speed * wind_speed / 400.0,
            visibility_flag: visibility >= 5.0,
            // Brightest near a half-phase moon.
            moon_brightness: 1.0 - (0.5 - moon_phase).abs() * 2.0,
            source_code: rng.random_range(0..=10),
            destination_code: rng.random_range(0..=10),
        }
    }

    /// Stable midpoints for a calm, reproducible estimate.
    pub fn static_defaults() -> Self {
        let wind_speed = 5.0f64;
        Self {
            temperature: 22.0,
            apparent_temperature: 22.5,
            humidity: 0.6,
            wind_speed,
            wind_gust: 8.0,
            visibility: 10.0,
            dew_point: 15.0,
            pressure: 1012.0,
            cloud_cover: 0.3,
            uv_index: 5,
            ozone: 300.0,
            moon_phase: 0.5,
            precip_intensity: 0.0,
            precip_probability: 0.1,
            precip_intensity_max: 0.0,
            temperature_high: 25.0,
            temperature_low: 20.0,
            apparent_temperature_high: 26.0,
            apparent_temperature_low: 21.0,
            temperature_min: 20.0,
            temperature_max: 25.0,
            apparent_temperature_min: 21.0,
            apparent_temperature_max: 26.0,
            latitude: 0.0,
            longitude: 0.0,
            wind_bearing: 180,
            price_per_km: 12.0,
            feels_like: 22.5,
            precip_flag: false,
            wind_stress: wind_speed * wind_speed / 400.0,
            visibility_flag: true,
            moon_brightness: 1.0,
            source_code: 0,
            destination_code: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn dynamic_draws_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let env = EnvConditions::dynamic(&mut rng);
            assert!((10.0..35.0).contains(&env.temperature));
            assert!((env.temperature - 2.0..env.temperature + 2.0)
                .contains(&env.apparent_temperature));
            assert!((0.3..0.9).contains(&env.humidity));
            assert!((0..=10).contains(&env.uv_index));
            assert!((0..=360).contains(&env.wind_bearing));
            assert!((0.0..=1.0).contains(&env.moon_brightness));
            assert!((0..=10).contains(&env.source_code));
            // Dynamic visibility never drops below the flag threshold.
            assert!(env.visibility_flag);
        }
    }

    #[test]
    fn static_defaults_are_the_documented_midpoints() {
        let env = EnvConditions::static_defaults();
        assert_eq!(env.temperature, 22.0);
        assert_eq!(env.apparent_temperature, 22.5);
        assert_eq!(env.pressure, 1012.0);
        assert_eq!(env.wind_stress, 0.0625);
        assert_eq!(env.moon_brightness, 1.0);
        assert_eq!(env.source_code, 0);
    }
}
