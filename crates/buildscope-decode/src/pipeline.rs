//! Cached parse pipeline.
//!
//! The cache sits strictly between the public entry point and the rest of
//! the pipeline: a hit returns the shared aggregate without touching the
//! decoder, parser or extractors.

use std::sync::Arc;

use buildscope_core::{BuildCache, BuildError, ParsedBuild};
use buildscope_data::KeystoneTable;

use crate::{assembler, decoder, extract, markup};

pub struct BuildPipeline {
    cache: BuildCache,
    keystones: &'static KeystoneTable,
}

impl BuildPipeline {
    pub fn new(cache: BuildCache, keystones: &'static KeystoneTable) -> Self {
        Self { cache, keystones }
    }

    /// Parse a raw build code, serving repeats from the content cache.
    pub fn parse(&self, raw: &str) -> Result<Arc<ParsedBuild>, BuildError> {
        if let Some(build) = self.cache.lookup(raw) {
            tracing::debug!(key = %BuildCache::key_for(raw), "build cache hit");
            return Ok(build);
        }
        let build = self.parse_uncached(raw)?;
        tracing::info!(
            class = %build.character.class_name,
            level = build.character.level,
            skills = build.skills.len(),
            passives = build.passives.point_count,
            "parsed build"
        );
        Ok(self.cache.store(raw, build))
    }

    /// Run the full decode-through-assemble pipeline, bypassing the cache.
    pub fn parse_uncached(&self, raw: &str) -> Result<ParsedBuild, BuildError> {
        let text = decoder::decode(raw)?;
        let doc = markup::parse_document(&text)?;
        let root = markup::validate_root(&doc)?;
        let (format_version, game_version) = markup::version_gate(root)?;

        let character = extract::extract_character(markup::section(root, "Build"));
        let skills = extract::extract_skills(markup::section(root, "Skills"));
        let passives = extract::extract_passives(markup::section(root, "Tree"), self.keystones);
        let gear = extract::extract_gear(markup::section(root, "Items"));
        let stats = extract::extract_stats(markup::section(root, "Stats"));

        Ok(assembler::assemble(
            format_version,
            game_version,
            character,
            skills,
            passives,
            gear,
            stats,
        ))
    }

    pub fn cache(&self) -> &BuildCache {
        &self.cache
    }
}

impl Default for BuildPipeline {
    fn default() -> Self {
        Self::new(BuildCache::default(), KeystoneTable::shared())
    }
}
