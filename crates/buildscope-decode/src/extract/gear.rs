//! Gear extraction from the `Items` section.
//!
//! The output always covers all fifteen slots in canonical order. Items
//! that name a slot take it; flask-named items without a slot fall into
//! the first free flask slot; anything else unassignable is dropped.

use std::collections::HashMap;

use buildscope_core::{Affix, AffixKind, GearSlot, SlotKind};
use lazy_static::lazy_static;
use regex::Regex;
use roxmltree::Node;

lazy_static! {
    static ref LEADING_NUMBER: Regex =
        Regex::new(r"^[+-]?(\d+(?:\.\d+)?)").expect("leading-number pattern compiles");
}

fn slot_from_label(label: &str) -> Option<SlotKind> {
    let normalized: String = label
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    SlotKind::ALL.into_iter().find(|slot| {
        slot.label()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase()
            == normalized
    })
}

fn infer_slot(item: Node, taken: &HashMap<SlotKind, GearSlot>) -> Option<SlotKind> {
    let name = item.attribute("name").unwrap_or("").to_lowercase();
    let base = item.attribute("base").unwrap_or("").to_lowercase();
    if name.contains("flask") || base.contains("flask") {
        return SlotKind::FLASKS
            .into_iter()
            .find(|slot| !taken.contains_key(slot));
    }
    None
}

fn parse_affix(el: Node) -> Affix {
    let kind = match el.attribute("kind") {
        Some("implicit") => AffixKind::Implicit,
        Some("corruptedImplicit") | Some("corrupted-implicit") => AffixKind::CorruptedImplicit,
        _ => AffixKind::Explicit,
    };
    let text = el.text().unwrap_or("").trim().to_string();
    let value = LEADING_NUMBER
        .captures(&text)
        .and_then(|c| c.get(0))
        .and_then(|m| m.as_str().parse::<f64>().ok());
    Affix {
        kind,
        unparsed: value.is_none(),
        text,
        value,
    }
}

fn parse_item(slot: SlotKind, item: Node) -> GearSlot {
    let affixes = item
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "Mod")
        .map(parse_affix)
        .collect();
    let influences = item
        .attribute("influences")
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    GearSlot {
        slot,
        name: item.attribute("name").unwrap_or("Unknown Item").to_string(),
        base_type: item.attribute("base").unwrap_or("").to_string(),
        item_class: item.attribute("class").unwrap_or("").to_string(),
        affixes,
        implicit: item.attribute("implicit").map(String::from),
        corrupted: item.attribute("corrupted") == Some("true"),
        influences,
    }
}

pub fn extract_gear(section: Option<Node>) -> Vec<GearSlot> {
    let mut assigned: HashMap<SlotKind, GearSlot> = HashMap::new();

    if let Some(node) = section {
        for item in node
            .children()
            .filter(|n| n.is_element() && n.tag_name().name() == "Item")
        {
            let slot = item
                .attribute("slot")
                .and_then(slot_from_label)
                .or_else(|| infer_slot(item, &assigned));
            let Some(slot) = slot else {
                continue;
            };
            // First item wins a contested slot.
            assigned
                .entry(slot)
                .or_insert_with(|| parse_item(slot, item));
        }
    }

    SlotKind::ALL
        .into_iter()
        .map(|slot| {
            assigned
                .remove(&slot)
                .unwrap_or_else(|| GearSlot::empty(slot))
        })
        .collect()
}
