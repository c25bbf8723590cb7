// src/specs/game_log.rs
//! Scraping spec for a player's game-log page: the opponents already faced,
//! in chronological order.
//!
//! Ground truth: `<tbody>` rows; the third cell of each row names the
//! opponent ('@' marks away games and is dropped).

use std::error::Error;

use crate::config::consts::PLAYER_LOG_URL;
use crate::core::html::{inner_texts, next_tag_block_ci, slice_between_ci};
use crate::core::net;
use crate::core::sanitize::{slugify, strip_at};
use crate::store::Scratch;
use crate::teams;

const OPPONENT_CELL: usize = 2;

pub fn fetch(name: &str, scratch: &Scratch) -> Result<Vec<String>, Box<dyn Error>> {
    let url = PLAYER_LOG_URL.replace("{slug}", &slugify(name));
    let doc = net::http_get(&url)?;
    let _ = scratch.save_page(&join!(name, "_schedule"), &doc);
    parse_doc(&doc)
}

/// Split out for offline fixture tests. Canonical opponent names, page
/// (= chronological) order.
pub fn parse_doc(doc: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let tbody = slice_between_ci(doc, "<tbody", "</tbody>")
        .ok_or("Game log table body not found (layout drift?)")?;

    let mut opponents = Vec::new();
    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(tbody, "<tr", "</tr>", pos) {
        let row = &tbody[tr_s..tr_e];
        pos = tr_e;

        let tds = inner_texts(row, "td");
        if let Some(cell) = tds.get(OPPONENT_CELL) {
            let opp = strip_at(cell);
            if !opp.is_empty() {
                opponents.push(teams::canonical_name(opp));
            }
        }
    }

    Ok(opponents)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
    <table>
      <thead><tr><th>Week</th><th>Result</th><th>Opp</th></tr></thead>
      <tbody>
        <tr><td>1</td><td>W 34-20</td><td>Texans</td></tr>
        <tr><td>2</td><td>L 20-23</td><td>@Chargers</td></tr>
        <tr><td>3</td><td>W 26-10</td><td>Football Team</td></tr>
      </tbody>
    </table>
    "#;

    #[test]
    fn opponents_in_order_and_canonical() {
        let opponents = parse_doc(DOC).unwrap();
        assert_eq!(
            opponents,
            vec![
                s!("Houston Texans"),
                s!("Los Angeles Chargers"),
                s!("Washington Football Team"),
            ]
        );
    }

    #[test]
    fn missing_tbody_is_an_error() {
        assert!(parse_doc("<table></table>").is_err());
    }
}
