// src/specs/team_stats.rs
//! Scraping spec for the league team-stats tables (offense and defense
//! views share one layout).
//!
//! Ground truth: `<tr class="Table__TR--sm">` rows. The page renders the
//! 32 team-name rows first, then 32 data rows in the same order; within a
//! data row the 3rd/5th/7th/9th `<div>` cells are total yds/g, passing
//! yds/g, rushing yds/g and points/g.

use std::error::Error;

use crate::config::consts::{DEFENSE_PAGE, DEFENSE_STATS_URL, OFFENSE_PAGE, OFFENSE_STATS_URL};
use crate::core::html::{has_class, inner_after_open_tag, inner_texts, next_tag_block_ci, strip_tags};
use crate::core::net;
use crate::core::sanitize::normalize_entities;
use crate::rankings::TeamVector;
use crate::store::Scratch;
use crate::teams;

/// Indices of the per-game cells within a data row.
const STAT_CELLS: [usize; 4] = [2, 4, 6, 8];

pub struct TeamStatsBundle {
    /// (canonical team name, per-game vector), page order.
    pub teams: Vec<(String, TeamVector)>,
}

pub fn fetch_offense(scratch: &Scratch) -> Result<TeamStatsBundle, Box<dyn Error>> {
    let doc = net::http_get(OFFENSE_STATS_URL)?;
    let _ = scratch.save_page(OFFENSE_PAGE, &doc);
    parse_doc(&doc)
}

pub fn fetch_defense(scratch: &Scratch) -> Result<TeamStatsBundle, Box<dyn Error>> {
    let doc = net::http_get(DEFENSE_STATS_URL)?;
    let _ = scratch.save_page(DEFENSE_PAGE, &doc);
    parse_doc(&doc)
}

/// Split out for offline fixture tests and the bench.
pub fn parse_doc(doc: &str) -> Result<TeamStatsBundle, Box<dyn Error>> {
    let rows = stat_rows(doc);
    let league = teams::TEAMS.len();
    if rows.len() < 2 * league {
        return Err(format!(
            "Stat table layout drift: found {} rows, expected {}",
            rows.len(),
            2 * league
        )
        .into());
    }

    let mut out = Vec::with_capacity(league);
    for i in 0..league {
        let name_text = strip_tags(normalize_entities(&inner_after_open_tag(rows[i])));
        let name = teams::canonical_name(&name_text);

        let cells = inner_texts(rows[i + league], "div");
        let mut vector: TeamVector = [0.0; 4];
        for (slot, &cell_ix) in STAT_CELLS.iter().enumerate() {
            let cell = cells.get(cell_ix).ok_or_else(|| {
                format!("Stat row for '{}' is missing cell {}", name, cell_ix)
            })?;
            vector[slot] = parse_stat(cell)?;
        }
        out.push((name, vector));
    }

    Ok(TeamStatsBundle { teams: out })
}

fn stat_rows(doc: &str) -> Vec<&str> {
    let mut rows = Vec::new();
    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(doc, "<tr", "</tr>", pos) {
        let block = &doc[tr_s..tr_e];
        pos = tr_e;
        if has_class(block, "Table__TR--sm") {
            rows.push(block);
        }
    }
    rows
}

fn parse_stat(cell: &str) -> Result<f32, Box<dyn Error>> {
    let cleaned = cell.replace(',', "");
    cleaned
        .trim()
        .parse::<f32>()
        .map_err(|_| format!("Unparseable stat cell '{}'", cell).into())
}
