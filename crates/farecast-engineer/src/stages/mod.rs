//! The eight derivation stages, in pipeline order.

mod astro;
mod cab;
mod hours;
mod location;
mod price;
mod prune;
mod time;
mod weather;

pub use astro::AstroStage;
pub use cab::CabStage;
pub use hours::HourExtractionStage;
pub use location::LocationStage;
pub use price::PriceStage;
pub use prune::PruneStage;
pub use time::TimeStage;
pub use weather::WeatherStage;
