//! Suggestion types and their ordering rules.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionCategory {
    Gems,
    Passives,
    Gear,
    Utility,
}

impl SuggestionCategory {
    /// Tie-break order used by the aggregator sort: gear, passives, gems,
    /// utility.
    pub fn sort_rank(&self) -> u8 {
        match self {
            SuggestionCategory::Gear => 0,
            SuggestionCategory::Passives => 1,
            SuggestionCategory::Gems => 2,
            SuggestionCategory::Utility => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionPriority {
    Critical,
    Important,
    Optional,
}

impl SuggestionPriority {
    /// Sort rank, highest priority first.
    pub fn sort_rank(&self) -> u8 {
        match self {
            SuggestionPriority::Critical => 0,
            SuggestionPriority::Important => 1,
            SuggestionPriority::Optional => 2,
        }
    }
}

/// A single improvement recommendation. Immutable except for the
/// aggregator's one-shot rescoring pass, which produces a new value rather
/// than mutating in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub category: SuggestionCategory,
    pub priority: SuggestionPriority,
    pub description: String,
    pub action: String,
    pub impact: String,
}

impl Suggestion {
    pub fn new(
        category: SuggestionCategory,
        priority: SuggestionPriority,
        description: impl Into<String>,
        action: impl Into<String>,
        impact: impl Into<String>,
    ) -> Self {
        Self {
            category,
            priority,
            description: description.into(),
            action: action.into(),
            impact: impact.into(),
        }
    }

    /// Copy of this suggestion at a different priority.
    pub fn with_priority(&self, priority: SuggestionPriority) -> Self {
        Self {
            priority,
            ..self.clone()
        }
    }

    /// Deduplication identity used by the aggregator.
    pub fn dedupe_key(&self) -> (SuggestionCategory, &str) {
        (self.category, self.description.as_str())
    }
}
