// src/player.rs

use crate::schedule::Opponent;
use crate::score::ScoreBreakdown;

/// One row of a player's current-season game log, already cleaned
/// (no '@' markers, canonical opponent name) and sorted by week.
#[derive(Clone, Debug, PartialEq)]
pub struct GameRow {
    pub week: u32,
    pub opponent: String,
    /// Remaining cells of the row, in page order.
    pub stats: Vec<String>,
}

/// Data holder for one rostered player. Filled in place by the collect
/// phase, read-only from sorting onwards.
pub struct Player {
    pub name: String,
    pub position: String,
    pub team: String,
    /// Column labels for the game log rows.
    pub game_categories: Vec<String>,
    pub game_log: Vec<GameRow>,
    /// Column labels for the season stat lines.
    pub season_categories: Vec<String>,
    /// Season/career stat lines; the last row is the current season.
    pub season_rows: Vec<Vec<String>>,
    /// Opponents faced so far, chronological, canonical names.
    pub schedule: Vec<String>,
    pub opponent: Opponent,
    pub breakdown: Option<ScoreBreakdown>,
    pub score: f32,
}

impl Player {
    pub fn new(name: &str) -> Self {
        Self {
            name: s!(name),
            position: s!(),
            team: s!(),
            game_categories: Vec::new(),
            game_log: Vec::new(),
            season_categories: Vec::new(),
            season_rows: Vec::new(),
            schedule: Vec::new(),
            opponent: Opponent::Bye,
            breakdown: None,
            score: 0.0,
        }
    }

    /// Current-season stat line, when the stats page had one.
    pub fn season_line(&self) -> Option<&[String]> {
        self.season_rows.last().map(|r| r.as_slice())
    }
}
