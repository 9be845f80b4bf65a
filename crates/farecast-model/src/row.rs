//! Dense feature rows aligned to the shared schema.

use serde::Serialize;
use serde::ser::SerializeMap;

use crate::error::SchemaError;
use crate::schema::{FEATURE_COLUMNS, FEATURE_COUNT, column_index};

/// A single fully-populated feature row in schema order.
///
/// Exactly one row exists per prediction request. It is immutable once
/// assembled and is consumed positionally by the predictor, so the only way
/// to construct one is through [`FeatureRowBuilder`], which enforces the
/// contract (no unknown, duplicate, or missing fields).
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    values: Vec<f64>,
}

impl FeatureRow {
    /// Values in schema order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value of a named column, `None` for names outside the schema.
    pub fn get(&self, name: &str) -> Option<f64> {
        column_index(name).map(|idx| self.values[idx])
    }

    /// `(name, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_COLUMNS
            .iter()
            .zip(self.values.iter())
            .map(|(column, value)| (column.name, *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for FeatureRow {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Serialized as an ordered map so inspection output preserves the
        // schema order the model consumes.
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}

/// Write-once builder for [`FeatureRow`].
#[derive(Debug, Default)]
pub struct FeatureRowBuilder {
    values: Vec<Option<f64>>,
}

impl FeatureRowBuilder {
    pub fn new() -> Self {
        Self {
            values: vec![None; FEATURE_COUNT],
        }
    }

    /// Set a named column. Unknown names and repeated sets are contract
    /// violations.
    pub fn set(&mut self, name: &str, value: f64) -> Result<&mut Self, SchemaError> {
        let idx = column_index(name).ok_or_else(|| SchemaError::UnknownColumn(name.to_string()))?;
        if self.values[idx].is_some() {
            return Err(SchemaError::DuplicateColumn(name.to_string()));
        }
        self.values[idx] = Some(value);
        Ok(self)
    }

    /// Finish the row, failing on the first unset column.
    pub fn finish(self) -> Result<FeatureRow, SchemaError> {
        let mut values = Vec::with_capacity(FEATURE_COUNT);
        for (idx, value) in self.values.into_iter().enumerate() {
            match value {
                Some(value) => values.push(value),
                None => {
                    return Err(SchemaError::MissingColumn(
                        FEATURE_COLUMNS[idx].name.to_string(),
                    ));
                }
            }
        }
        Ok(FeatureRow { values })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_builder() -> FeatureRowBuilder {
        let mut builder = FeatureRowBuilder::new();
        for (idx, column) in FEATURE_COLUMNS.iter().enumerate() {
            builder.set(column.name, idx as f64).unwrap();
        }
        builder
    }

    #[test]
    fn complete_row_preserves_schema_order() {
        let row = full_builder().finish().unwrap();
        assert_eq!(row.len(), FEATURE_COUNT);
        for (idx, (name, value)) in row.iter().enumerate() {
            assert_eq!(name, FEATURE_COLUMNS[idx].name);
            assert_eq!(value, idx as f64);
        }
    }

    #[test]
    fn unknown_column_is_rejected() {
        let mut builder = FeatureRowBuilder::new();
        assert!(matches!(
            builder.set("price", 1.0),
            Err(SchemaError::UnknownColumn(_))
        ));
    }

    #[test]
    fn duplicate_set_is_rejected() {
        let mut builder = FeatureRowBuilder::new();
        builder.set("hour", 8.0).unwrap();
        assert!(matches!(
            builder.set("hour", 9.0),
            Err(SchemaError::DuplicateColumn(_))
        ));
    }

    #[test]
    fn missing_column_fails_finish() {
        let mut builder = FeatureRowBuilder::new();
        builder.set("hour", 8.0).unwrap();
        assert!(matches!(
            builder.finish(),
            Err(SchemaError::MissingColumn(_))
        ));
    }

    #[test]
    fn serializes_as_ordered_map() {
        let row = full_builder().finish().unwrap();
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.starts_with("{\"hour\":0.0"));
        assert!(json.contains("\"moon_brightness\":46.0"));
    }
}
