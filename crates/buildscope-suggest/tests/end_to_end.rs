//! Full engine walk on a degenerate build: parse, analyze, suggest.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use buildscope_core::{
    DefenseRating, OffenseRating, PlaystyleType, StatSource, SuggestionCategory,
    SuggestionPriority,
};
use buildscope_decode::BuildPipeline;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::Write;

fn encode(xml: &str) -> String {
    let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
    enc.write_all(xml.as_bytes()).unwrap();
    STANDARD.encode(enc.finish().unwrap())
}

// No passives, a single unsupported skill, no items, no stats section.
const DEGENERATE: &str = r#"<PathOfBuilding version="1.5.1">
  <Skills><Skill name="Firestorm"/></Skills>
</PathOfBuilding>"#;

#[test]
fn degenerate_build_walks_the_whole_engine() {
    let pipeline = BuildPipeline::default();
    let build = pipeline.parse(&encode(DEGENERATE)).unwrap();

    assert_eq!(build.stats.len(), 6);
    assert!(build.stats.iter().all(|s| s.source == StatSource::Estimated));
    assert_eq!(build.passives.point_count, 0);
    let main = build.main_skill().expect("single skill becomes main");
    assert!(main.supports.is_empty());

    let analysis = buildscope_analysis::analyze(&build);
    assert_eq!(analysis.defense, DefenseRating::GlassCannon);
    assert_eq!(analysis.offense, OffenseRating::Low);
    assert_eq!(analysis.playstyle, PlaystyleType::Unknown);

    let suggestions = buildscope_suggest::suggest(&build, &analysis);
    assert!(!suggestions.is_empty());

    let gear_criticals: Vec<_> = suggestions
        .iter()
        .filter(|s| {
            s.category == SuggestionCategory::Gear && s.priority == SuggestionPriority::Critical
        })
        .collect();
    for res in ["fire", "cold", "lightning"] {
        assert!(
            gear_criticals
                .iter()
                .any(|s| s.description.contains("Uncapped") && s.description.contains(res)),
            "no critical for uncapped {res} resistance"
        );
    }
    assert_eq!(
        gear_criticals
            .iter()
            .filter(|s| s.description.ends_with("slot is empty"))
            .count(),
        15
    );

    // The unsupported main skill escalates to critical as well.
    assert!(suggestions.iter().any(|s| {
        s.category == SuggestionCategory::Gems
            && s.priority == SuggestionPriority::Critical
            && s.description.contains("Firestorm has no supports")
    }));
}
