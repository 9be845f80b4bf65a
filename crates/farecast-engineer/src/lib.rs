pub mod clean;
pub mod context;
pub mod frame_utils;
pub mod pipeline;
pub mod stages;

/// Column holding the regression target after price derivation. Set aside
/// during training, never a model input.
pub const TARGET_COLUMN: &str = "log_price";

pub use clean::clean_trip_data;
pub use context::{EngineerOptions, StageContext};
pub use pipeline::{
    FeaturePipeline, FeatureStage, align_to_schema, build_default_pipeline, engineer_features,
    training_matrix,
};
