pub mod reader;
pub mod writer;

pub use reader::{IngestError, ensure_columns, peek_headers, read_trips_csv};
pub use writer::write_features_csv;
