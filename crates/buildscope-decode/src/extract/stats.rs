//! Stat extraction from the `Stats` section.

use buildscope_core::{Stat, StatSource};
use buildscope_data::stat_names;
use roxmltree::Node;

fn stat_value(el: Node) -> f64 {
    // Accepts a value attribute, numeric text content, or a nested
    // <Value value="..."/> child. Total failure parses as zero.
    el.attribute("value")
        .and_then(|v| v.trim().parse().ok())
        .or_else(|| el.text().and_then(|t| t.trim().parse().ok()))
        .or_else(|| {
            el.children()
                .find(|n| n.is_element() && n.tag_name().name() == "Value")
                .and_then(|v| v.attribute("value"))
                .and_then(|v| v.trim().parse().ok())
        })
        .unwrap_or(0.0)
}

/// Copy explicit stats in order, or materialise the six canonical
/// defensive stats at zero (provenance "estimated") when the section is
/// entirely absent, so the aggregate always carries predictable keys.
pub fn extract_stats(section: Option<Node>) -> Vec<Stat> {
    match section {
        Some(node) => node
            .children()
            .filter(|n| n.is_element() && n.tag_name().name() == "Stat")
            .map(|el| {
                Stat::new(
                    el.attribute("name").unwrap_or("Unknown"),
                    stat_value(el),
                    StatSource::Explicit,
                )
            })
            .collect(),
        None => stat_names::DEFAULT_DEFENSIVE_STATS
            .iter()
            .map(|name| Stat::new(*name, 0.0, StatSource::Estimated))
            .collect(),
    }
}
