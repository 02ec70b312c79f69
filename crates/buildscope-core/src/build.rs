//! Domain model for a decoded character build.
//!
//! `ParsedBuild` is the aggregate root the whole engine operates on. It is
//! assembled once by the decode pipeline and treated as read-only by every
//! downstream consumer, which is what makes sharing it out of the cache
//! safe without further locking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw input value object: the encoded string as received, plus the content
/// hash used as the cache key. The hash is over the raw string, not the
/// decoded payload, so cosmetically different inputs are distinct entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildCode {
    pub raw: String,
    pub content_hash: String,
}

impl BuildCode {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let content_hash = blake3::hash(raw.as_bytes()).to_hex().to_string();
        Self { raw, content_hash }
    }
}

/// The aggregate produced by the decode pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedBuild {
    /// Version of the export format the source document declared.
    pub format_version: String,
    /// Game version the build targets.
    pub game_version: String,
    pub character: Character,
    pub skills: Vec<SkillSetup>,
    pub passives: PassiveAllocation,
    /// Exactly fifteen entries, one per `SlotKind`, in fixed order.
    /// Unequipped slots carry the `"Empty"` sentinel, never a hole.
    pub gear: Vec<GearSlot>,
    pub stats: Vec<Stat>,
    pub parsed_at: DateTime<Utc>,
}

impl ParsedBuild {
    /// Case-insensitive stat lookup.
    pub fn stat(&self, name: &str) -> Option<f64> {
        self.stats
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .map(|s| s.value)
    }

    /// The skill flagged as the primary damage skill, if any.
    pub fn main_skill(&self) -> Option<&SkillSetup> {
        self.skills.iter().find(|s| s.is_main)
    }

    /// Gear entry for a slot. The fifteen-slot invariant makes this total.
    pub fn slot(&self, kind: SlotKind) -> Option<&GearSlot> {
        self.gear.iter().find(|g| g.slot == kind)
    }

    pub fn has_keystone(&self, name: &str) -> bool {
        self.passives
            .keystones
            .iter()
            .any(|k| k.name.eq_ignore_ascii_case(name))
    }

    /// Slots currently holding the `"Empty"` placeholder.
    pub fn empty_slots(&self) -> impl Iterator<Item = &GearSlot> {
        self.gear.iter().filter(|g| g.is_empty())
    }
}

/// Character identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub class_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ascendancy: Option<String>,
    /// Clamped into `[1, 100]` at extraction time.
    pub level: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub league: Option<String>,
}

impl Default for Character {
    fn default() -> Self {
        Self {
            class_name: "Scion".to_string(),
            ascendancy: None,
            level: 1,
            league: None,
        }
    }
}

/// One socketed skill with its supports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSetup {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub quality: u32,
    pub supports: Vec<SupportGem>,
    /// Always `supports.len() + 1`. Derived by the constructor; a declared
    /// socket count in the source never overrides it.
    pub link_count: usize,
    pub is_main: bool,
}

impl SkillSetup {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        level: u32,
        quality: u32,
        supports: Vec<SupportGem>,
        is_main: bool,
    ) -> Self {
        let link_count = supports.len() + 1;
        Self {
            id: id.into(),
            name: name.into(),
            level,
            quality,
            supports,
            link_count,
            is_main,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportGem {
    pub name: String,
    pub level: u32,
    pub quality: u32,
}

/// Allocated passive tree state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassiveAllocation {
    /// Always `nodes.len()`.
    pub point_count: usize,
    /// Allocated node ids in document order.
    pub nodes: Vec<u32>,
    /// Allocated nodes recognized against the injected keystone table.
    pub keystones: Vec<Keystone>,
    /// Notable detection has no lookup table in the core; always empty.
    pub notables: Vec<Notable>,
}

impl PassiveAllocation {
    pub fn new(nodes: Vec<u32>, keystones: Vec<Keystone>) -> Self {
        Self {
            point_count: nodes.len(),
            nodes,
            keystones,
            notables: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keystone {
    pub id: u32,
    pub name: String,
    pub effect: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notable {
    pub id: u32,
    pub name: String,
}

/// The fifteen fixed equipment slots, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlotKind {
    Weapon1,
    Weapon2,
    Helmet,
    BodyArmour,
    Gloves,
    Boots,
    Amulet,
    Ring1,
    Ring2,
    Belt,
    Flask1,
    Flask2,
    Flask3,
    Flask4,
    Flask5,
}

impl SlotKind {
    pub const ALL: [SlotKind; 15] = [
        SlotKind::Weapon1,
        SlotKind::Weapon2,
        SlotKind::Helmet,
        SlotKind::BodyArmour,
        SlotKind::Gloves,
        SlotKind::Boots,
        SlotKind::Amulet,
        SlotKind::Ring1,
        SlotKind::Ring2,
        SlotKind::Belt,
        SlotKind::Flask1,
        SlotKind::Flask2,
        SlotKind::Flask3,
        SlotKind::Flask4,
        SlotKind::Flask5,
    ];

    pub const FLASKS: [SlotKind; 5] = [
        SlotKind::Flask1,
        SlotKind::Flask2,
        SlotKind::Flask3,
        SlotKind::Flask4,
        SlotKind::Flask5,
    ];

    /// Slot label as the export format spells it.
    pub fn label(&self) -> &'static str {
        match self {
            SlotKind::Weapon1 => "Weapon 1",
            SlotKind::Weapon2 => "Weapon 2",
            SlotKind::Helmet => "Helmet",
            SlotKind::BodyArmour => "Body Armour",
            SlotKind::Gloves => "Gloves",
            SlotKind::Boots => "Boots",
            SlotKind::Amulet => "Amulet",
            SlotKind::Ring1 => "Ring 1",
            SlotKind::Ring2 => "Ring 2",
            SlotKind::Belt => "Belt",
            SlotKind::Flask1 => "Flask 1",
            SlotKind::Flask2 => "Flask 2",
            SlotKind::Flask3 => "Flask 3",
            SlotKind::Flask4 => "Flask 4",
            SlotKind::Flask5 => "Flask 5",
        }
    }

    pub fn is_flask(&self) -> bool {
        matches!(
            self,
            SlotKind::Flask1
                | SlotKind::Flask2
                | SlotKind::Flask3
                | SlotKind::Flask4
                | SlotKind::Flask5
        )
    }
}

/// Sentinel item name for an unequipped slot.
pub const EMPTY_SLOT_NAME: &str = "Empty";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GearSlot {
    pub slot: SlotKind,
    pub name: String,
    pub base_type: String,
    pub item_class: String,
    pub affixes: Vec<Affix>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit: Option<String>,
    pub corrupted: bool,
    pub influences: Vec<String>,
}

impl GearSlot {
    /// The placeholder emitted for a slot with no matching item, so
    /// consumers can index by slot without null checks.
    pub fn empty(slot: SlotKind) -> Self {
        Self {
            slot,
            name: EMPTY_SLOT_NAME.to_string(),
            base_type: String::new(),
            item_class: String::new(),
            affixes: Vec::new(),
            implicit: None,
            corrupted: false,
            influences: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name == EMPTY_SLOT_NAME
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AffixKind {
    Explicit,
    Implicit,
    CorruptedImplicit,
}

/// One modifier line on an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Affix {
    pub kind: AffixKind,
    pub text: String,
    /// Leading numeric value, when one could be parsed out of the text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Set when no numeric value could be extracted.
    pub unparsed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatSource {
    Explicit,
    Estimated,
    Calculated,
}

/// A named numeric stat with its provenance. Provenance is informational
/// only; it never changes classification logic beyond estimation triggers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stat {
    pub name: String,
    pub value: f64,
    pub source: StatSource,
}

impl Stat {
    pub fn new(name: impl Into<String>, value: f64, source: StatSource) -> Self {
        Self {
            name: name.into(),
            value,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_code_hash_is_deterministic() {
        let a = BuildCode::new("abc");
        let b = BuildCode::new("abc");
        let c = BuildCode::new("abc ");
        assert_eq!(a.content_hash, b.content_hash);
        assert_ne!(a.content_hash, c.content_hash);
    }

    #[test]
    fn link_count_is_derived_from_supports() {
        let setup = SkillSetup::new(
            "skill-1",
            "Arc",
            20,
            0,
            vec![SupportGem {
                name: "Spell Echo".into(),
                level: 20,
                quality: 0,
            }],
            true,
        );
        assert_eq!(setup.link_count, setup.supports.len() + 1);
    }

    #[test]
    fn slot_order_is_fixed_and_complete() {
        assert_eq!(SlotKind::ALL.len(), 15);
        assert_eq!(SlotKind::ALL[0], SlotKind::Weapon1);
        assert_eq!(SlotKind::ALL[14], SlotKind::Flask5);
    }

    #[test]
    fn empty_slot_sentinel() {
        let slot = GearSlot::empty(SlotKind::Belt);
        assert!(slot.is_empty());
        assert_eq!(slot.name, "Empty");
        assert!(slot.affixes.is_empty());
    }

    #[test]
    fn passive_allocation_counts_nodes() {
        let alloc = PassiveAllocation::new(vec![100, 200, 300], vec![]);
        assert_eq!(alloc.point_count, 3);
        assert!(alloc.notables.is_empty());
    }
}
