// src/scrape.rs
//! Collect layer: fetches pages through the specs, stores them in the
//! session scratch directory, and fills the roster records in place.
//!
//! Order matters: the rankings maps are built completely before any entity
//! is scored, and every entity's fetch-then-derive sequence runs to
//! completion before the next begins. Any fetch or parse failure aborts the
//! session (no retries, no partial recovery).

use std::collections::HashMap;
use std::error::Error;

use crate::defense::{CategoryStats, Defense};
use crate::player::Player;
use crate::rankings::{Rankings, TeamVector};
use crate::schedule::WeekSchedule;
use crate::score;
use crate::specs;
use crate::specs::defense_stats::DefenseTable;
use crate::store::Scratch;
use crate::teams;

/// Current week number and matchups from the league schedule page.
pub fn collect_week_schedule(scratch: &Scratch) -> Result<WeekSchedule, Box<dyn Error>> {
    let bundle = specs::schedule::fetch(scratch)?;
    logf!("Schedule: week {} with {} matchups", bundle.week, bundle.matchups.len());
    Ok(WeekSchedule::new(bundle.week, bundle.matchups))
}

/// Both league-wide vector maps. Nothing may score until this returns.
pub fn collect_rankings(scratch: &Scratch) -> Result<Rankings, Box<dyn Error>> {
    let offense = vector_map(specs::team_stats::fetch_offense(scratch)?);
    let defense = vector_map(specs::team_stats::fetch_defense(scratch)?);
    logf!("Rankings: {} offense / {} defense entries", offense.len(), defense.len());
    Ok(Rankings::new(offense, defense))
}

fn vector_map(bundle: specs::team_stats::TeamStatsBundle) -> HashMap<String, TeamVector> {
    bundle.teams.into_iter().collect()
}

/// The league defense category tables, fetched once and shared by every
/// rostered defense.
pub struct DefenseTables {
    pub passing: DefenseTable,
    pub rushing: DefenseTable,
}

pub fn collect_defense_tables(scratch: &Scratch) -> Result<DefenseTables, Box<dyn Error>> {
    Ok(DefenseTables {
        passing: specs::defense_stats::fetch("passing", scratch)?,
        rushing: specs::defense_stats::fetch("rushing", scratch)?,
    })
}

/// Fetch one player's pages and derive everything: stats, schedule faced,
/// upcoming opponent, score.
pub fn collect_player(
    player: &mut Player,
    week: &WeekSchedule,
    rankings: &Rankings,
    scratch: &Scratch,
) -> Result<(), Box<dyn Error>> {
    let bundle = specs::player_stats::fetch(&player.name, scratch)?;
    player.position = bundle.position;
    player.team = bundle.team;
    player.game_categories = bundle.game_categories;
    player.game_log = bundle.game_rows;
    player.season_categories = bundle.season_categories;
    player.season_rows = bundle.season_rows;

    player.schedule = specs::game_log::fetch(&player.name, scratch)?;

    player.opponent = week.opponent_for(&player.team);
    let breakdown = score::score_against(
        &player.name,
        &player.opponent,
        &player.schedule,
        rankings.defense_map(),
    )?;
    player.score = breakdown.score;
    player.breakdown = Some(breakdown);

    logd!("Player: {} ({}, {}) vs {} -> {}",
        player.name, player.position, player.team, player.opponent.name(), player.score);
    Ok(())
}

/// Fetch one defense's pages and derive everything. The roster spelling is
/// replaced by the canonical franchise name on the way in; a spelling the
/// identity table cannot place is a configuration error.
pub fn collect_defense(
    defense: &mut Defense,
    tables: &DefenseTables,
    week: &WeekSchedule,
    rankings: &Rankings,
    scratch: &Scratch,
) -> Result<(), Box<dyn Error>> {
    let info = teams::canonical(&defense.team)
        .ok_or_else(|| format!("Unknown team in roster: '{}'", defense.team))?;
    defense.team = info.full_name();

    defense.stats = vec![
        category_stats(&tables.passing, &defense.team)?,
        category_stats(&tables.rushing, &defense.team)?,
    ];

    defense.schedule = specs::team_schedule::fetch(info, scratch)?;

    defense.opponent = week.opponent_for(&defense.team);
    let breakdown = score::score_against(
        &defense.team,
        &defense.opponent,
        &defense.schedule,
        rankings.offense_map(),
    )?;
    defense.score = breakdown.score;
    defense.breakdown = Some(breakdown);

    logd!("Defense: {} vs {} -> {}", defense.team, defense.opponent.name(), defense.score);
    Ok(())
}

/// Pull one team's row out of a league category table.
pub fn category_stats(table: &DefenseTable, team: &str) -> Result<CategoryStats, Box<dyn Error>> {
    let (_, values) = table
        .rows
        .iter()
        .find(|(name, _)| name == team)
        .ok_or_else(|| format!("No {} defense row for '{}'", table.category, team))?;
    Ok(CategoryStats {
        category: table.category.clone(),
        labels: table.labels.clone(),
        values: values.clone(),
    })
}
