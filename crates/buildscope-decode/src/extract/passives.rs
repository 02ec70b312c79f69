//! Passive allocation extraction from the `Tree` section.

use buildscope_core::{Keystone, PassiveAllocation};
use buildscope_data::KeystoneTable;
use roxmltree::Node;

/// Flatten allocated node ids from every `<Spec nodes="...">` entry in
/// document order, then recognize keystones against the injected table.
///
/// Unmatched ids are left alone: notable detection has no lookup table in
/// the core, so `notables` stays empty rather than guessing.
pub fn extract_passives(section: Option<Node>, keystones: &KeystoneTable) -> PassiveAllocation {
    let Some(node) = section else {
        return PassiveAllocation::default();
    };

    let mut nodes: Vec<u32> = Vec::new();
    for spec in node
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "Spec")
    {
        if let Some(list) = spec.attribute("nodes") {
            nodes.extend(list.split(',').filter_map(|part| part.trim().parse::<u32>().ok()));
        }
    }

    let recognized = nodes
        .iter()
        .filter_map(|id| keystones.get(*id))
        .map(|record| Keystone {
            id: record.id,
            name: record.name.clone(),
            effect: record.effect.clone(),
        })
        .collect();

    PassiveAllocation::new(nodes, recognized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{parse_document, section, validate_root};

    fn passives_from(doc: &str) -> PassiveAllocation {
        let doc = parse_document(doc).unwrap();
        let root = validate_root(&doc).unwrap();
        extract_passives(section(root, "Tree"), KeystoneTable::shared())
    }

    #[test]
    fn missing_section_yields_empty_allocation() {
        let alloc = passives_from("<PathOfBuilding/>");
        assert_eq!(alloc.point_count, 0);
        assert!(alloc.nodes.is_empty());
        assert!(alloc.keystones.is_empty());
    }

    #[test]
    fn flattens_specs_in_document_order() {
        let alloc = passives_from(
            "<PathOfBuilding><Tree>\
               <Spec nodes=\"10,20, 30\"/>\
               <Spec nodes=\"40\"/>\
             </Tree></PathOfBuilding>",
        );
        assert_eq!(alloc.nodes, vec![10, 20, 30, 40]);
        assert_eq!(alloc.point_count, 4);
    }

    #[test]
    fn recognizes_keystones_by_node_id() {
        // 11455 is Chaos Inoculation in the embedded table.
        let alloc = passives_from(
            "<PathOfBuilding><Tree><Spec nodes=\"500,11455\"/></Tree></PathOfBuilding>",
        );
        assert_eq!(alloc.keystones.len(), 1);
        assert_eq!(alloc.keystones[0].name, "Chaos Inoculation");
        assert!(alloc.notables.is_empty());
    }

    #[test]
    fn junk_ids_are_skipped() {
        let alloc = passives_from(
            "<PathOfBuilding><Tree><Spec nodes=\"1,abc,,3\"/></Tree></PathOfBuilding>",
        );
        assert_eq!(alloc.nodes, vec![1, 3]);
    }
}
