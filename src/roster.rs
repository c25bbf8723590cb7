// src/roster.rs
//! Roster input file: one identifier per line. Lines tagged `defense` name
//! a defense (team name from a fixed offset); everything else is a player.

use std::{error::Error, fs, path::Path};

use crate::config::consts::{DEFENSE_NAME_OFFSET, DEFENSE_TAG};
use crate::defense::Defense;
use crate::player::Player;

pub struct Roster {
    pub players: Vec<Player>,
    pub defenses: Vec<Defense>,
}

/// Load and parse the roster file. A missing file is a configuration error
/// surfaced to the user, not a panic.
pub fn load(path: &str) -> Result<Roster, Box<dyn Error>> {
    if !Path::new(path).is_file() {
        return Err(format!("The roster file '{}' does not exist", path).into());
    }
    let text = fs::read_to_string(path)?;
    Ok(parse(&text))
}

/// Parse roster text. `defense: <team>` lines become defenses; other
/// non-empty lines are player names.
pub fn parse(text: &str) -> Roster {
    let mut players = Vec::new();
    let mut defenses = Vec::new();

    for line in text.lines() {
        let line = line.trim_end();
        if line.trim().is_empty() {
            continue;
        }
        if line.starts_with(DEFENSE_TAG) {
            // Name sits after the tag and separator, at a fixed offset.
            let name = line.get(DEFENSE_NAME_OFFSET..).unwrap_or("").trim();
            if name.is_empty() {
                loge!("Roster: defense line without a team name: '{}'", line);
                continue;
            }
            defenses.push(Defense::new(name));
        } else {
            players.push(Player::new(line.trim()));
        }
    }

    Roster { players, defenses }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn players_and_defenses_split() {
        let text = "Patrick Mahomes\ndefense: New England Patriots\nDavante Adams\n";
        let roster = parse(text);
        assert_eq!(roster.players.len(), 2);
        assert_eq!(roster.players[0].name, "Patrick Mahomes");
        assert_eq!(roster.defenses.len(), 1);
        assert_eq!(roster.defenses[0].team, "New England Patriots");
    }

    #[test]
    fn blank_lines_and_bad_defense_lines_skipped() {
        let text = "\ndefense: \nTom Brady\n\n";
        let roster = parse(text);
        assert_eq!(roster.players.len(), 1);
        assert!(roster.defenses.is_empty());
    }
}
