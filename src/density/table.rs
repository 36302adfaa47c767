// Ingredient density table: grams per millilitre, keyed by display and normalised name

use crate::density::error::DensityError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

static INTERNAL_DENSITY_JSON: &str = include_str!("../../data/densities.json");

/// Boundary format: `{"prepared_at": "...", "key": [...], "values": [[id, name, normalised_name, density], ...]}`
#[derive(Deserialize)]
struct TableSchema {
    prepared_at: String,
    #[allow(dead_code)]
    key: Vec<String>,
    values: Vec<Vec<Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensityEntry {
    pub id: i64,
    pub name: String,
    pub normalised_name: String,
    /// g/ml
    pub density: f32,
}

/// Immutable once loaded; share it behind an `Arc`
#[derive(Debug, Clone, Default)]
pub struct DensityTable {
    prepared_at: String,
    by_name: HashMap<String, DensityEntry>,
    by_normalised_name: HashMap<String, DensityEntry>,
}

impl DensityTable {
    pub fn new(prepared_at: &str, entries: Vec<DensityEntry>) -> Self {
        let mut by_name = HashMap::new();
        let mut by_normalised_name = HashMap::new();

        for entry in entries {
            if by_normalised_name.contains_key(&entry.normalised_name) {
                warn!(
                    "Duplicate density entry for '{}', keeping row {}",
                    entry.normalised_name, entry.id
                );
            }
            by_name.insert(entry.name.clone(), entry.clone());
            by_normalised_name.insert(entry.normalised_name.clone(), entry);
        }

        Self {
            prepared_at: prepared_at.to_string(),
            by_name,
            by_normalised_name,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn prepared_at(&self) -> &str {
        &self.prepared_at
    }

    pub fn len(&self) -> usize {
        self.by_normalised_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_normalised_name.is_empty()
    }

    pub fn density_for(&self, name: &str) -> Option<f32> {
        self.by_name.get(name).map(|entry| entry.density)
    }

    pub fn density_for_norm(&self, normalised_name: &str) -> Option<f32> {
        self.by_normalised_name
            .get(normalised_name)
            .map(|entry| entry.density)
    }

    pub fn data_for(&self, name: &str) -> Option<&DensityEntry> {
        self.by_name.get(name)
    }

    pub fn data_for_norm(&self, normalised_name: &str) -> Option<&DensityEntry> {
        self.by_normalised_name.get(normalised_name)
    }

    /// Entries ordered by normalised name
    pub fn entries(&self) -> Vec<&DensityEntry> {
        let mut entries: Vec<_> = self.by_normalised_name.values().collect();
        entries.sort_by(|a, b| a.normalised_name.cmp(&b.normalised_name));
        entries
    }
}

/// Parse a density table, failing on the first bad row
pub fn load_density_table(raw: &str) -> Result<DensityTable, DensityError> {
    let value: Value = serde_json::from_str(raw).map_err(DensityError::InvalidJson)?;
    let schema: TableSchema = serde_json::from_value(value).map_err(DensityError::UnknownShape)?;

    let entries = schema
        .values
        .iter()
        .enumerate()
        .map(|(row, values)| parse_row(row, values))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        "Loaded {} densities prepared at {}",
        entries.len(),
        schema.prepared_at
    );
    Ok(DensityTable::new(&schema.prepared_at, entries))
}

/// The table shipped with the crate
pub fn load_internal_density_table() -> Result<DensityTable, DensityError> {
    load_density_table(INTERNAL_DENSITY_JSON)
}

fn parse_row(row: usize, values: &[Value]) -> Result<DensityEntry, DensityError> {
    if values.len() < 4 {
        return Err(DensityError::ShortRow {
            row,
            found: values.len(),
        });
    }

    let invalid = |field| DensityError::InvalidField { row, field };

    Ok(DensityEntry {
        id: values[0].as_i64().ok_or_else(|| invalid("id"))?,
        name: values[1].as_str().ok_or_else(|| invalid("name"))?.to_string(),
        normalised_name: values[2]
            .as_str()
            .ok_or_else(|| invalid("normalised_name"))?
            .to_string(),
        density: values[3].as_f64().ok_or_else(|| invalid("density"))? as f32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_TABLE: &str = r#"{
        "prepared_at": "2025-01-01T00:00:00",
        "key": ["id", "name", "normalised_name", "density"],
        "values": [
            [1, "Plain flour", "plain flour", 0.53],
            [2, "Caster sugar", "caster sugar", 0.85]
        ]
    }"#;

    #[test]
    fn test_load_density_table() {
        let table = load_density_table(SMALL_TABLE).unwrap();
        assert_eq!(table.prepared_at(), "2025-01-01T00:00:00");
        assert_eq!(table.len(), 2);
        assert_eq!(table.density_for("Plain flour"), Some(0.53));
        assert_eq!(table.density_for_norm("caster sugar"), Some(0.85));
        assert_eq!(table.density_for("plain flour"), None);
        assert_eq!(table.density_for_norm("Plain flour"), None);

        let entry = table.data_for_norm("plain flour").unwrap();
        assert_eq!(entry.id, 1);
        assert_eq!(entry.name, "Plain flour");
        assert_eq!(table.data_for("Caster sugar").map(|e| e.id), Some(2));
    }

    #[test]
    fn test_entries_sorted_by_normalised_name() {
        let table = load_density_table(SMALL_TABLE).unwrap();
        let names: Vec<_> = table
            .entries()
            .iter()
            .map(|entry| entry.normalised_name.as_str())
            .collect();
        assert_eq!(names, vec!["caster sugar", "plain flour"]);
    }

    #[test]
    fn test_load_internal_density_table() {
        let table = load_internal_density_table().unwrap();
        assert!(!table.is_empty());
        assert_eq!(table.density_for("Olive oil"), Some(0.91));
        assert_eq!(table.density_for_norm("olive oil"), Some(0.91));
        assert!(table.density_for_norm("plain flour").is_some());
    }

    #[test]
    fn test_invalid_json() {
        let err = load_density_table("{not json").unwrap_err();
        assert!(matches!(err, DensityError::InvalidJson(_)));
    }

    #[test]
    fn test_unknown_shape() {
        let err = load_density_table(r#"{"densities": {"flour": 0.53}}"#).unwrap_err();
        assert!(matches!(err, DensityError::UnknownShape(_)));
        assert!(err.to_string().contains("unknown shape"));
    }

    #[test]
    fn test_short_row() {
        let raw = r#"{"prepared_at": "x", "key": [], "values": [[1, "Plain flour", "plain flour", 0.53], [2, "Butter"]]}"#;
        let err = load_density_table(raw).unwrap_err();
        assert!(matches!(err, DensityError::ShortRow { row: 1, found: 2 }));
    }

    #[test]
    fn test_invalid_field() {
        let raw = r#"{"prepared_at": "x", "key": [], "values": [["one", "Plain flour", "plain flour", 0.53]]}"#;
        let err = load_density_table(raw).unwrap_err();
        assert!(matches!(
            err,
            DensityError::InvalidField { row: 0, field: "id" }
        ));

        let raw = r#"{"prepared_at": "x", "key": [], "values": [[1, "Plain flour", "plain flour", "heavy"]]}"#;
        let err = load_density_table(raw).unwrap_err();
        assert!(matches!(
            err,
            DensityError::InvalidField { row: 0, field: "density" }
        ));
    }

    #[test]
    fn test_empty_table() {
        let table = DensityTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.density_for_norm("anything"), None);
    }
}
