use polars::prelude::DataFrame;

/// Exact-name column presence check.
pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names()
        .iter()
        .any(|column| column.as_str() == name)
}
