//! Skill and support extraction from the `Skills` section.

use buildscope_core::{SkillSetup, SupportGem};
use roxmltree::Node;

fn attr_u32(node: Node, name: &str, default: u32) -> u32 {
    node.attribute(name)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn is_true(value: &str) -> bool {
    value == "true" || value == "1"
}

/// Extract skill setups in document order.
///
/// Ids are auto-generated as `skill-<1-based index>`. The primary damage
/// skill is the one declaring `main="true"`; with no declaration, the
/// skill with the most supports is flagged (first wins ties). Link count
/// is always derived from the support list, never from a declared socket
/// count.
pub fn extract_skills(section: Option<Node>) -> Vec<SkillSetup> {
    let Some(node) = section else {
        return Vec::new();
    };

    let mut skills: Vec<SkillSetup> = node
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "Skill")
        .enumerate()
        .map(|(idx, el)| {
            let supports = el
                .children()
                .filter(|n| {
                    n.is_element()
                        && n.tag_name().name() == "Gem"
                        && n.attribute("type") == Some("Support")
                })
                .map(|gem| SupportGem {
                    name: gem.attribute("name").unwrap_or("Unknown Support").to_string(),
                    level: attr_u32(gem, "level", 1),
                    quality: attr_u32(gem, "quality", 0),
                })
                .collect();

            SkillSetup::new(
                format!("skill-{}", idx + 1),
                el.attribute("name").unwrap_or("Unknown Skill"),
                attr_u32(el, "level", 1),
                attr_u32(el, "quality", 0),
                supports,
                el.attribute("main").map(is_true).unwrap_or(false),
            )
        })
        .collect();

    // Exactly one primary skill: first declared wins, otherwise the best
    // supported one.
    let mut seen_main = false;
    for skill in &mut skills {
        if skill.is_main {
            if seen_main {
                skill.is_main = false;
            }
            seen_main = true;
        }
    }
    if !seen_main && !skills.is_empty() {
        let mut best = 0;
        for (idx, skill) in skills.iter().enumerate() {
            if skill.supports.len() > skills[best].supports.len() {
                best = idx;
            }
        }
        skills[best].is_main = true;
    }

    skills
}
