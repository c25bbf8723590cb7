// src/specs/player_stats.rs
//! Scraping spec for a player's stat page.
//!
//! Ground truth:
//! - Position: the header span `nfl-c-player-header__position`.
//! - Team: the header span `nfl-c-player-header__team` when present,
//!   otherwise the team cell of the newest season row.
//! - One table: a `<th>` header row with game-log labels, game rows (week,
//!   matchup, cells…) until a second `<th>` row switches the table to the
//!   season/career section.
//!
//! Game rows arrive out of order and are sorted by week before return.
//! Matchup cells lose their '@' away marker and are canonicalized, which
//! folds the renamed Washington franchise onto one name.

use std::error::Error;

use crate::config::consts::PLAYER_STATS_URL;
use crate::core::html::{has_class, inner_after_open_tag, inner_texts, next_tag_block_ci, strip_tags};
use crate::core::net;
use crate::core::sanitize::{normalize_entities, slugify, strip_at};
use crate::player::GameRow;
use crate::store::Scratch;
use crate::teams;

pub struct PlayerStatsBundle {
    pub position: String,
    pub team: String,
    pub game_categories: Vec<String>,
    pub game_rows: Vec<GameRow>,
    pub season_categories: Vec<String>,
    pub season_rows: Vec<Vec<String>>,
}

pub fn fetch(name: &str, scratch: &Scratch) -> Result<PlayerStatsBundle, Box<dyn Error>> {
    let url = PLAYER_STATS_URL.replace("{slug}", &slugify(name));
    let doc = net::http_get(&url)?;
    let _ = scratch.save_page(name, &doc);
    parse_doc(&doc)
}

/// Split out for offline fixture tests.
pub fn parse_doc(doc: &str) -> Result<PlayerStatsBundle, Box<dyn Error>> {
    let position = header_span(doc, "nfl-c-player-header__position")
        .ok_or("Player position header not found (unknown player or layout drift)")?;

    let mut game_categories: Vec<String> = Vec::new();
    let mut game_rows: Vec<GameRow> = Vec::new();
    let mut season_categories: Vec<String> = Vec::new();
    let mut season_rows: Vec<Vec<String>> = Vec::new();
    let mut in_season = false;

    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(doc, "<tr", "</tr>", pos) {
        let row = &doc[tr_s..tr_e];
        pos = tr_e;

        let ths = inner_texts(row, "th");
        if !ths.is_empty() {
            if game_categories.is_empty() {
                game_categories = ths;
            } else {
                // Second header row: everything below is season/career data.
                season_categories = ths;
                in_season = true;
            }
            continue;
        }

        let tds = inner_texts(row, "td");
        if tds.is_empty() {
            continue;
        }

        if in_season {
            season_rows.push(tds);
        } else if let Some(game) = game_row(&tds) {
            game_rows.push(game);
        }
    }

    // The site hands the log out of order; week order is what everything
    // downstream assumes.
    game_rows.sort_by_key(|g| g.week);

    let team = header_span(doc, "nfl-c-player-header__team")
        .map(|t| teams::canonical_name(&t))
        .or_else(|| team_from_season_rows(&season_rows))
        .unwrap_or_default();

    Ok(PlayerStatsBundle {
        position,
        team,
        game_categories,
        game_rows,
        season_categories,
        season_rows,
    })
}

fn header_span(doc: &str, class: &str) -> Option<String> {
    let mut pos = 0usize;
    while let Some((s_s, s_e)) = next_tag_block_ci(doc, "<span", "</span>", pos) {
        let block = &doc[s_s..s_e];
        pos = s_e;
        if !has_class(block, class) {
            continue;
        }
        let text = strip_tags(normalize_entities(&inner_after_open_tag(block)));
        if !text.is_empty() {
            return Some(text);
        }
    }
    None
}

/// A game row is week, matchup, then stat cells. Rows whose first cell is
/// not a week number (spacers, notes) are skipped.
fn game_row(tds: &[String]) -> Option<GameRow> {
    let week: u32 = tds.first()?.trim().parse().ok()?;
    let opponent = teams::canonical_name(strip_at(tds.get(1)?));
    Some(GameRow {
        week,
        opponent,
        stats: tds.iter().skip(2).cloned().collect(),
    })
}

/// Season rows open with (year, team, …); the newest row names the team the
/// player belongs to now.
fn team_from_season_rows(rows: &[Vec<String>]) -> Option<String> {
    let cell = rows.last()?.get(1)?;
    if cell.is_empty() {
        return None;
    }
    Some(teams::canonical_name(cell))
}
