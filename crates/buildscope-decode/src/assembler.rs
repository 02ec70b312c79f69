//! Build assembler: composes the five extracted slices into the aggregate.

use buildscope_core::{Character, GearSlot, ParsedBuild, PassiveAllocation, SkillSetup, Stat};
use chrono::Utc;

#[allow(clippy::too_many_arguments)]
pub fn assemble(
    format_version: String,
    game_version: String,
    character: Character,
    skills: Vec<SkillSetup>,
    passives: PassiveAllocation,
    gear: Vec<GearSlot>,
    stats: Vec<Stat>,
) -> ParsedBuild {
    ParsedBuild {
        format_version,
        game_version,
        character,
        skills,
        passives,
        gear,
        stats,
        parsed_at: Utc::now(),
    }
}
