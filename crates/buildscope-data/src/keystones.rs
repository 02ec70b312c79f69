//! Keystone lookup table.
//!
//! Maps allocated passive-tree node ids to the keystones they represent.
//! Loaded lazily from the embedded JSON asset; consumers receive a
//! reference at construction time rather than reaching for a global.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;

const KEYSTONES_JSON: &str = include_str!("../data/keystones.json");

static SHARED: Lazy<KeystoneTable> = Lazy::new(|| {
    KeystoneTable::from_json(KEYSTONES_JSON).expect("embedded keystone table is valid JSON")
});

#[derive(Debug, Clone, Deserialize)]
pub struct KeystoneRecord {
    pub id: u32,
    pub name: String,
    pub effect: String,
}

#[derive(Debug, Deserialize)]
struct KeystoneFile {
    #[allow(dead_code)]
    version: String,
    keystones: Vec<KeystoneRecord>,
}

#[derive(Debug)]
pub struct KeystoneTable {
    by_id: HashMap<u32, KeystoneRecord>,
}

impl KeystoneTable {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let file: KeystoneFile = serde_json::from_str(json)?;
        let by_id = file.keystones.into_iter().map(|k| (k.id, k)).collect();
        Ok(Self { by_id })
    }

    /// Process-wide table backed by the embedded asset.
    pub fn shared() -> &'static KeystoneTable {
        &SHARED
    }

    pub fn get(&self, id: u32) -> Option<&KeystoneRecord> {
        self.by_id.get(&id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_table_loads() {
        let table = KeystoneTable::shared();
        assert!(!table.is_empty());
    }

    #[test]
    fn chaos_inoculation_is_present() {
        let table = KeystoneTable::shared();
        let ci = table.get(11455).expect("CI in table");
        assert_eq!(ci.name, "Chaos Inoculation");
        assert!(ci.effect.contains("Immune to Chaos Damage"));
    }

    #[test]
    fn unknown_ids_are_absent() {
        assert!(!KeystoneTable::shared().contains(1));
    }
}
