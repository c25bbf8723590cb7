// src/specs/defense_stats.rs
//! Scraping spec for the league defense category tables (passing, rushing).
//!
//! Ground truth: `<thead>` labels, then one `<tr>` per team whose first
//! cell carries the full club name in a `d3-o-club-fullname` div; the
//! remaining cells are that team's category stats.

use std::error::Error;

use crate::config::consts::TEAM_DEFENSE_URL;
use crate::core::html::{has_class, inner_after_open_tag, inner_texts, next_tag_block_ci, slice_between_ci, strip_tags};
use crate::core::net;
use crate::core::sanitize::normalize_entities;
use crate::store::Scratch;
use crate::teams;

pub struct DefenseTable {
    /// Category this table covers ("passing", "rushing").
    pub category: String,
    /// Column labels, first label belongs to the club-name column.
    pub labels: Vec<String>,
    /// (canonical team name, stat cells after the name column).
    pub rows: Vec<(String, Vec<String>)>,
}

pub fn fetch(category: &str, scratch: &Scratch) -> Result<DefenseTable, Box<dyn Error>> {
    let url = TEAM_DEFENSE_URL.replace("{category}", category);
    let doc = net::http_get(&url)?;
    let _ = scratch.save_page(&join!(category, "_defense_stats"), &doc);
    parse_doc(category, &doc)
}

/// Split out for offline fixture tests.
pub fn parse_doc(category: &str, doc: &str) -> Result<DefenseTable, Box<dyn Error>> {
    let thead = slice_between_ci(doc, "<thead", "</thead>")
        .ok_or("Defense stats table header not found (layout drift?)")?;
    let labels = inner_texts(thead, "th");
    if labels.is_empty() {
        return Err("Defense stats table has no column labels".into());
    }

    let mut rows = Vec::new();
    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(doc, "<tr", "</tr>", pos) {
        let row = &doc[tr_s..tr_e];
        pos = tr_e;

        let name = match club_name(row) {
            Some(n) => n,
            None => continue, // header row or filler
        };
        let values = inner_texts(row, "td").into_iter().skip(1).collect();
        rows.push((teams::canonical_name(&name), values));
    }

    if rows.is_empty() {
        return Err("Defense stats table has no team rows".into());
    }

    Ok(DefenseTable { category: s!(category), labels, rows })
}

fn club_name(row: &str) -> Option<String> {
    let mut pos = 0usize;
    while let Some((d_s, d_e)) = next_tag_block_ci(row, "<div", "</div>", pos) {
        let block = &row[d_s..d_e];
        pos = d_e;
        if !has_class(block, "d3-o-club-fullname") {
            continue;
        }
        let text = strip_tags(normalize_entities(&inner_after_open_tag(block)));
        if !text.is_empty() {
            return Some(text);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
    <table>
      <thead><tr><th>Team</th><th>Att</th><th>Yds</th><th>Yds/G</th></tr></thead>
      <tbody>
        <tr>
          <td><div class="d3-o-club-fullname">New England Patriots</div></td>
          <td>210</td><td>1312</td><td>187.4</td>
        </tr>
        <tr>
          <td><div class="d3-o-club-fullname">Washington Football Team</div></td>
          <td>233</td><td>1405</td><td>200.7</td>
        </tr>
      </tbody>
    </table>
    "#;

    #[test]
    fn labels_and_team_rows_extracted() {
        let table = parse_doc("passing", DOC).unwrap();
        assert_eq!(table.labels, vec!["Team", "Att", "Yds", "Yds/G"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].0, "New England Patriots");
        assert_eq!(table.rows[0].1, vec!["210", "1312", "187.4"]);
        assert_eq!(table.rows[1].0, "Washington Football Team");
    }

    #[test]
    fn missing_thead_is_an_error() {
        assert!(parse_doc("passing", "<table></table>").is_err());
    }
}
