//! Analysis result types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Defensive rating, weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefenseRating {
    GlassCannon,
    Moderate,
    Tanky,
    UberViable,
}

/// Offensive rating by estimated or declared DPS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffenseRating {
    Low,
    Moderate,
    High,
    Extreme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaystyleType {
    Unknown,
    Clear,
    Boss,
    Hybrid,
}

/// Output of the analyze operation. Created fresh on every request and
/// never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildAnalysis {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub playstyle: PlaystyleType,
    pub defense: DefenseRating,
    pub offense: OffenseRating,
    pub analyzed_at: DateTime<Utc>,
}
