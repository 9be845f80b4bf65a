pub mod encoding;
pub mod enums;
pub mod error;
pub mod row;
pub mod schema;

pub use encoding::{CAB_TYPE_MAP, EncodingMap, PRODUCT_GROUP_MAP, ProductTier};
pub use enums::GenerationMode;
pub use error::SchemaError;
pub use row::{FeatureRow, FeatureRowBuilder};
pub use schema::{FEATURE_COLUMNS, FEATURE_COUNT, FeatureColumn, FeatureKind, column_index};
