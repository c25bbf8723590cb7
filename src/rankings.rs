// src/rankings.rs
//! League-wide per-game stat vectors, one map per role.
//!
//! Both maps are built in full before any score is derived and are never
//! mutated afterwards; every consumer takes them by shared reference. A team
//! missing from a map at lookup time means the session's data is unusable
//! for that entity, so lookups return `Err` instead of guessing.

use std::collections::HashMap;
use std::error::Error;

/// (total yds/g, passing yds/g, rushing yds/g, points/g)
pub type TeamVector = [f32; 4];

pub const ZERO_VECTOR: TeamVector = [0.0, 0.0, 0.0, 0.0];

pub const VECTOR_LABELS: [&str; 4] =
    ["Total yds/g", "Passing yds/g", "Rushing yds/g", "Points/g"];

/// Sentinel opponent for a team with no game this week.
pub const BYE_WEEK: &str = "Bye Week";

pub struct Rankings {
    offense: HashMap<String, TeamVector>,
    defense: HashMap<String, TeamVector>,
}

impl Rankings {
    /// Both maps must already cover the whole league; the defense map gets
    /// the zero-vector entry players on a bye resolve against.
    pub fn new(
        offense: HashMap<String, TeamVector>,
        mut defense: HashMap<String, TeamVector>,
    ) -> Self {
        defense.insert(s!(BYE_WEEK), ZERO_VECTOR);
        Self { offense, defense }
    }

    pub fn offense_for(&self, team: &str) -> Result<TeamVector, Box<dyn Error>> {
        self.offense
            .get(team)
            .copied()
            .ok_or_else(|| format!("No offense ranking entry for '{}'", team).into())
    }

    pub fn defense_for(&self, team: &str) -> Result<TeamVector, Box<dyn Error>> {
        self.defense
            .get(team)
            .copied()
            .ok_or_else(|| format!("No defense ranking entry for '{}'", team).into())
    }

    pub fn offense_map(&self) -> &HashMap<String, TeamVector> {
        &self.offense
    }

    pub fn defense_map(&self) -> &HashMap<String, TeamVector> {
        &self.defense
    }

    /// Entries of a map sorted by team name, for stable console dumps.
    pub fn sorted(map: &HashMap<String, TeamVector>) -> Vec<(&String, &TeamVector)> {
        let mut entries: Vec<_> = map.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
