//! Keyword tables for the classifiers.
//!
//! Same YAML shape for every table: a flat list of keyword/category/weight
//! entries. The scoring function that consumes them lives in the analysis
//! crate; this module only owns loading and access.

use once_cell::sync::Lazy;
use serde::Deserialize;

const DAMAGE_TYPES_YAML: &str = include_str!("../data/damage_types.yaml");
const PLAYSTYLE_YAML: &str = include_str!("../data/playstyle.yaml");
const DAMAGE_SUPPORTS_YAML: &str = include_str!("../data/damage_supports.yaml");

static DAMAGE_TYPES: Lazy<KeywordTable> = Lazy::new(|| {
    KeywordTable::from_yaml(DAMAGE_TYPES_YAML).expect("embedded damage-type table is valid YAML")
});
static PLAYSTYLE: Lazy<KeywordTable> = Lazy::new(|| {
    KeywordTable::from_yaml(PLAYSTYLE_YAML).expect("embedded playstyle table is valid YAML")
});
static DAMAGE_SUPPORTS: Lazy<KeywordTable> = Lazy::new(|| {
    KeywordTable::from_yaml(DAMAGE_SUPPORTS_YAML)
        .expect("embedded damage-support table is valid YAML")
});

#[derive(Debug, Clone, Deserialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub category: String,
    pub weight: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeywordTable {
    pub version: String,
    pub entries: Vec<KeywordEntry>,
}

impl KeywordTable {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Damage-type keywords (fire/cold/lightning/chaos/physical).
    pub fn damage_types() -> &'static KeywordTable {
        &DAMAGE_TYPES
    }

    /// Clear-speed vs single-target keywords.
    pub fn playstyle() -> &'static KeywordTable {
        &PLAYSTYLE
    }

    /// Support gems the DPS estimator treats as "more damage" multipliers.
    pub fn damage_supports() -> &'static KeywordTable {
        &DAMAGE_SUPPORTS
    }

    /// Entries whose keyword occurs in `text` (case-insensitive).
    pub fn matches<'a>(&'a self, text: &str) -> impl Iterator<Item = &'a KeywordEntry> {
        let lowered = text.to_lowercase();
        self.entries
            .iter()
            .filter(move |e| lowered.contains(&e.keyword))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_tables_load() {
        assert!(!KeywordTable::damage_types().entries.is_empty());
        assert!(!KeywordTable::playstyle().entries.is_empty());
        assert!(!KeywordTable::damage_supports().entries.is_empty());
    }

    #[test]
    fn playstyle_sets_are_disjoint() {
        let table = KeywordTable::playstyle();
        let clear: Vec<_> = table
            .entries
            .iter()
            .filter(|e| e.category == "clear")
            .map(|e| &e.keyword)
            .collect();
        for entry in table.entries.iter().filter(|e| e.category == "boss") {
            assert!(!clear.contains(&&entry.keyword), "{} in both sets", entry.keyword);
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        let table = KeywordTable::damage_types();
        let hits: Vec<_> = table.matches("Fireball").collect();
        assert!(hits.iter().any(|e| e.category == "fire"));
    }
}
