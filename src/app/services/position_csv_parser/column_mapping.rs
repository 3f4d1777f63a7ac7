//! Column mapping for position export headers
//!
//! Exports are produced by different tools, so column order is not fixed and
//! optional columns may be missing entirely. Lookups go through the header.

use crate::constants::{UTF8_BOM, columns};
use csv::StringRecord;
use std::collections::HashMap;

/// Column name to index mapping for one source
#[derive(Debug, Clone, Default)]
pub struct ColumnMapping {
    /// Column name to index mapping
    pub name_to_index: HashMap<String, usize>,

    /// Required columns the header does not name
    pub missing_required: Vec<String>,
}

impl ColumnMapping {
    /// Analyze the header row
    ///
    /// Names are trimmed and a leading byte order mark is dropped. When a name
    /// repeats, the last occurrence wins.
    pub fn analyze(headers: &StringRecord) -> Self {
        let mut name_to_index = HashMap::new();

        for (index, header) in headers.iter().enumerate() {
            let column_name = header.trim_start_matches(UTF8_BOM).trim().to_string();
            name_to_index.insert(column_name, index);
        }

        let missing_required = columns::REQUIRED
            .iter()
            .filter(|name| !name_to_index.contains_key(**name))
            .map(|name| name.to_string())
            .collect();

        ColumnMapping {
            name_to_index,
            missing_required,
        }
    }

    /// Get the index for a given column name
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }

    /// Check if a column exists in the mapping
    pub fn has_column(&self, column_name: &str) -> bool {
        self.name_to_index.contains_key(column_name)
    }

    /// Whether every required column is present
    pub fn is_complete(&self) -> bool {
        self.missing_required.is_empty()
    }

    /// Number of columns, and how many of the optional reading columns exist
    pub fn stats(&self) -> (usize, usize) {
        let optional_present = columns::OPTIONAL
            .iter()
            .filter(|name| self.has_column(name))
            .count();
        (self.name_to_index.len(), optional_present)
    }
}
