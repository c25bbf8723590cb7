// src/defense.rs

use crate::schedule::Opponent;
use crate::score::ScoreBreakdown;

/// One category table row for a defense (passing, rushing), as labels
/// paired with that team's cells.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryStats {
    pub category: String,
    pub labels: Vec<String>,
    pub values: Vec<String>,
}

/// Data holder for one rostered defense.
pub struct Defense {
    /// Canonical team name once resolved; the roster spelling until then.
    pub team: String,
    pub stats: Vec<CategoryStats>,
    /// Offenses already faced, chronological, canonical names.
    pub schedule: Vec<String>,
    pub opponent: Opponent,
    pub breakdown: Option<ScoreBreakdown>,
    pub score: f32,
}

impl Defense {
    pub fn new(team: &str) -> Self {
        Self {
            team: s!(team),
            stats: Vec::new(),
            schedule: Vec::new(),
            opponent: Opponent::Bye,
            breakdown: None,
            score: 0.0,
        }
    }
}
