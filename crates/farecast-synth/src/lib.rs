pub mod clock;
pub mod env;
pub mod synthesize;

pub use clock::ClockFeatures;
pub use env::EnvConditions;
pub use synthesize::{EstimateRequest, SURGE_STEPS, surge_multiplier, synthesize, synthesize_at};
