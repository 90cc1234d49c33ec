#![forbid(unsafe_code)]

//! Case-insensitive name search across tables and enums

use crate::extract::{enums, tables};

/// Table and enum names matching a search keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub tables: Vec<String>,
    pub enums: Vec<String>,
}

impl SearchResults {
    /// True when neither list has a match
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty() && self.enums.is_empty()
    }
}

/// Filters the full table and enum name lists by case-insensitive substring
/// match
///
/// Both lists keep their sorted order. An empty keyword matches every name.
pub fn search(content: &str, keyword: &str) -> SearchResults {
    let needle = keyword.to_lowercase();
    SearchResults {
        tables: filter(tables::list_all(content), &needle),
        enums: filter(enums::list_all(content), &needle),
    }
}

fn filter(names: Vec<String>, needle: &str) -> Vec<String> {
    names
        .into_iter()
        .filter(|name| name.to_lowercase().contains(needle))
        .collect()
}
