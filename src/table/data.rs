//! JSON representation of a breeding table.

use serde::{Deserialize, Serialize};

use super::BreedingTable;
use crate::error::Result;

/// Serialized form: the species list and a square offspring matrix whose
/// rows and columns follow the species order.
///
/// ```json
/// { "species": ["A", "B"], "matrix": [["A", "B"], ["B", "B"]] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableData {
    pub species: Vec<String>,
    pub matrix: Vec<Vec<String>>,
}

impl TableData {
    /// Captures a table in matrix form.
    pub fn from_table(table: &BreedingTable) -> Self {
        let species: Vec<String> = table.species_ids().map(|s| table.name(s).to_string()).collect();
        let matrix = table
            .species_ids()
            .map(|a| {
                table
                    .species_ids()
                    .map(|b| table.name(table.breed_id(a, b)).to_string())
                    .collect()
            })
            .collect();
        Self { species, matrix }
    }

    pub fn into_table(self) -> Result<BreedingTable> {
        BreedingTable::from_matrix(&self.species, &self.matrix)
    }
}

impl BreedingTable {
    /// Parses a table from its JSON matrix form.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: TableData = serde_json::from_str(json)?;
        data.into_table()
    }

    /// Serializes the table to its JSON matrix form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&TableData::from_table(self))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BreedError;

    #[test]
    fn test_from_json() {
        let json = r#"{"species": ["A", "B", "C"],
            "matrix": [["A", "C", "A"], ["C", "B", "B"], ["A", "B", "C"]]}"#;
        let table = BreedingTable::from_json(json).unwrap();
        assert_eq!(table.breed("A", "B").unwrap(), "C");
        assert_eq!(table.breed("C", "B").unwrap(), "B");
    }

    #[test]
    fn test_invalid_json_is_data_error() {
        let err = BreedingTable::from_json("{\"species\": [").unwrap_err();
        assert!(matches!(err, BreedError::Data(_)));
    }

    #[test]
    fn test_json_preserves_table() {
        let table = crate::table::fixtures::table(&["A", "B", "C", "Z"], &[("A", "B", "C")]);
        let parsed = BreedingTable::from_json(&table.to_json().unwrap()).unwrap();
        assert_eq!(parsed.len(), table.len());
        assert_eq!(parsed.breed("B", "A").unwrap(), "C");
        assert_eq!(parsed.breed("C", "A").unwrap(), "Z");
    }
}
