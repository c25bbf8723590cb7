// src/report.rs
//! Console output and the flat-text report.
//!
//! The report format is the contract here: a header line with the week
//! number, a "Players:" section grouped by position, a "Defenses:" section,
//! entries as `  - <name> , score = <N>`. `parse` reads the same format
//! back, so a saved report round-trips.

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::REPORT_FILE_PREFIX;
use crate::defense::Defense;
use crate::player::Player;
use crate::rank::RankedTeam;
use crate::rankings::{TeamVector, VECTOR_LABELS};
use crate::schedule::WeekSchedule;

/* ---------------- Console ---------------- */

pub fn print_team(team: &RankedTeam, defenses: &[Defense]) {
    println!("\n\nFinalized Team:\n");
    println!("Offensive Players:\n");
    for (position, group) in team {
        println!("{position}");
        for p in group {
            println!("\t-{} : {}", p.name, p.score);
        }
    }

    println!("\nDefensive Teams:\n");
    for d in defenses {
        println!("\t-{} : {}", d.team, d.score);
    }
    println!();
}

pub fn print_week_schedule(week: &WeekSchedule) {
    println!("\n*****************************************");
    println!("*\t\tWeek #{}\t\t\t*", week.week());
    println!("*****************************************");
    println!("\nThis Week's NFL Schedule\n");
    for (away, home) in week.matchups() {
        println!("  - {away} @ {home}");
    }
    println!();
}

pub fn print_roster_listing(players: &[Player], defenses: &[Defense]) {
    for p in players {
        println!("  --> {}", p.name);
    }
    println!("\nDefenses to choose from:\n");
    for d in defenses {
        println!("  --> {}", d.team);
    }
}

pub fn print_player_data(player: &Player) {
    println!("{}, Position: {}", player.name, player.position);
    println!("This Week's Opponent: {}", player.opponent.name());

    if let Some(line) = player.season_line() {
        println!("\nPLAYER DATA:\n");
        for (label, value) in player.season_categories.iter().zip(line) {
            println!("\t{label} --> {value}");
        }
    }

    if !player.game_log.is_empty() {
        println!("\nGAME LOG:\n");
        println!("\t{}", player.game_categories.join(" | "));
        for game in &player.game_log {
            println!("\t{} | {} | {}", game.week, game.opponent, game.stats.join(" | "));
        }
    }

    println!("\nTEAMS PLAYED:\n");
    for team in &player.schedule {
        println!("\t --> {team}");
    }

    if let Some(b) = &player.breakdown {
        if !player.opponent.is_bye() {
            print_breakdown(b);
        }
    }
}

pub fn print_defense_data(defense: &Defense) {
    println!("\nDEFENSE: {}", defense.team);
    println!("This Week's Opponent: {}\n", defense.opponent.name());

    for table in &defense.stats {
        println!("{} Stats:\n", capitalize(&table.category));
        for (label, value) in table.labels.iter().skip(1).zip(&table.values) {
            println!("\t{label} -> {value}");
        }
        println!();
    }

    println!("Opponents faced:\n");
    for team in &defense.schedule {
        println!("\t-> {team}");
    }

    if let Some(b) = &defense.breakdown {
        if !defense.opponent.is_bye() {
            print_breakdown(b);
        }
    }
}

/// Average vs current opponent, per component. The scalar is ranked on
/// elsewhere; the differential is what the matchup actually looks like.
fn print_breakdown(b: &crate::score::ScoreBreakdown) {
    println!("\nMatchup differential (current - average faced):\n");
    for (i, label) in VECTOR_LABELS.iter().enumerate() {
        println!(
            "\t{label}: {:.1} vs {:.1} ({:+.1})",
            b.current[i], b.average[i], b.diff[i]
        );
    }
}

pub fn print_vector_table(heading: &str, entries: &[(&String, &TeamVector)]) {
    println!("\n{heading}\n");
    for (team, v) in entries {
        println!("{team}:");
        println!(
            "   --> {}: {} , {}: {} , {}: {} , {}: {}",
            VECTOR_LABELS[0], v[0], VECTOR_LABELS[1], v[1],
            VECTOR_LABELS[2], v[2], VECTOR_LABELS[3], v[3]
        );
        println!();
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => s!(),
    }
}

/* ---------------- Report file ---------------- */

pub fn report_string(week: u32, team: &RankedTeam, defenses: &[Defense]) -> String {
    let mut out = format!("Fantasy Team for week {week}");
    out.push_str("\n\nPlayers:\n\n");
    for (position, group) in team {
        out.push_str(&format!("{position}:\n"));
        for p in group {
            out.push_str(&format!("  - {} , score = {}\n", p.name, p.score));
        }
    }
    out.push_str("\nDefenses:\n");
    for d in defenses {
        out.push_str(&format!("  - {} , score = {}\n", d.team, d.score));
    }
    out
}

/// Write the report; `path` falls back to `Week_<N>.txt`.
pub fn write_report(
    path: Option<&Path>,
    week: u32,
    team: &RankedTeam,
    defenses: &[Defense],
) -> Result<PathBuf, Box<dyn Error>> {
    let loc = match path {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(join!(REPORT_FILE_PREFIX, &week.to_string(), ".txt")),
    };
    fs::write(&loc, report_string(week, team, defenses))?;
    Ok(loc)
}

/// A report read back from disk.
#[derive(Debug, PartialEq)]
pub struct ParsedReport {
    pub week: u32,
    /// Position groups in file order with their (name, score) entries.
    pub players: Vec<(String, Vec<(String, f32)>)>,
    pub defenses: Vec<(String, f32)>,
}

pub fn parse_report(text: &str) -> Result<ParsedReport, Box<dyn Error>> {
    const HEADER: &str = "Fantasy Team for week ";
    const ENTRY: &str = "  - ";
    const SEP: &str = " , score = ";

    let mut lines = text.lines();
    let week: u32 = lines
        .next()
        .and_then(|l| l.strip_prefix(HEADER))
        .ok_or("Report header missing")?
        .trim()
        .parse()?;

    let mut players: Vec<(String, Vec<(String, f32)>)> = Vec::new();
    let mut defenses: Vec<(String, f32)> = Vec::new();
    let mut in_defenses = false;

    for line in lines {
        if line.trim().is_empty() || line == "Players:" {
            continue;
        }
        if line == "Defenses:" {
            in_defenses = true;
            continue;
        }

        if let Some(rest) = line.strip_prefix(ENTRY) {
            let (name, score_str) = rest
                .rsplit_once(SEP)
                .ok_or_else(|| format!("Malformed report entry: '{line}'"))?;
            let score: f32 = score_str.trim().parse()?;
            if in_defenses {
                defenses.push((s!(name), score));
            } else {
                let group = players
                    .last_mut()
                    .ok_or_else(|| format!("Report entry before any position: '{line}'"))?;
                group.1.push((s!(name), score));
            }
        } else if let Some(position) = line.strip_suffix(':') {
            players.push((s!(position), Vec::new()));
        } else {
            return Err(format!("Unrecognized report line: '{line}'").into());
        }
    }

    Ok(ParsedReport { week, players, defenses })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_string_shape() {
        let mut p = Player::new("Patrick Mahomes");
        p.position = s!("QB");
        p.score = 15.0;
        let team: RankedTeam = vec![(s!("QB"), vec![p])];

        let mut d = Defense::new("New England Patriots");
        d.score = 20.0;

        let text = report_string(8, &team, &[d]);
        assert!(text.starts_with("Fantasy Team for week 8"));
        assert!(text.contains("QB:\n  - Patrick Mahomes , score = 15\n"));
        assert!(text.contains("Defenses:\n  - New England Patriots , score = 20\n"));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_report("not a report").is_err());
    }
}
