// src/config/options.rs
use std::path::PathBuf;

use super::consts::DEFAULT_ROSTER_FILE;

/// How the session runs: full ranking pass, or a single-entity lookup
/// that prints its result and exits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Rank,
    LookupPlayer(String),
    LookupDefense(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub filename: String,         // roster input file
    pub verbosity: u8,            // 1..=3, gates console detail
    pub save: bool,               // write the ranked report to disk
    pub outputfile: Option<PathBuf>, // explicit report path (implies save)
    pub mode: Mode,
}

impl Params {
    pub fn new() -> Self {
        Self {
            filename: s!(DEFAULT_ROSTER_FILE),
            verbosity: 1,
            save: false,
            outputfile: None,
            mode: Mode::Rank,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
