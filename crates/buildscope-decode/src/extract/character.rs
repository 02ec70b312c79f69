//! Character identity extraction from the `Build` section.

use buildscope_core::Character;
use roxmltree::Node;

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == "None" {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn extract_character(section: Option<Node>) -> Character {
    let Some(node) = section else {
        return Character::default();
    };

    let defaults = Character::default();
    let class_name = node
        .attribute("className")
        .and_then(non_empty)
        .unwrap_or(defaults.class_name);
    let level = node
        .attribute("level")
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(1)
        .clamp(1, 100) as u8;

    Character {
        class_name,
        ascendancy: node.attribute("ascendClassName").and_then(non_empty),
        level,
        league: node.attribute("league").and_then(non_empty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{parse_document, section, validate_root};

    fn build_section(doc: &str) -> Character {
        let doc = parse_document(doc).unwrap();
        let root = validate_root(&doc).unwrap();
        extract_character(section(root, "Build"))
    }

    #[test]
    fn missing_section_yields_default_character() {
        let character = build_section("<PathOfBuilding/>");
        assert_eq!(character.class_name, "Scion");
        assert_eq!(character.level, 1);
        assert!(character.ascendancy.is_none());
        assert!(character.league.is_none());
    }

    #[test]
    fn reads_all_attributes() {
        let character = build_section(
            "<PathOfBuilding><Build className=\"Witch\" ascendClassName=\"Necromancer\" \
             level=\"92\" league=\"Settlers\"/></PathOfBuilding>",
        );
        assert_eq!(character.class_name, "Witch");
        assert_eq!(character.ascendancy.as_deref(), Some("Necromancer"));
        assert_eq!(character.level, 92);
        assert_eq!(character.league.as_deref(), Some("Settlers"));
    }

    #[test]
    fn level_is_clamped_into_range() {
        let high = build_section("<PathOfBuilding><Build level=\"250\"/></PathOfBuilding>");
        assert_eq!(high.level, 100);
        let low = build_section("<PathOfBuilding><Build level=\"0\"/></PathOfBuilding>");
        assert_eq!(low.level, 1);
        let junk = build_section("<PathOfBuilding><Build level=\"ninety\"/></PathOfBuilding>");
        assert_eq!(junk.level, 1);
    }

    #[test]
    fn none_ascendancy_is_treated_as_absent() {
        let character =
            build_section("<PathOfBuilding><Build ascendClassName=\"None\"/></PathOfBuilding>");
        assert!(character.ascendancy.is_none());
    }
}
