// src/specs/team_schedule.rs
//! Scraping spec for a team's schedule page: the opponents this team has
//! already faced this season.
//!
//! Ground truth: `<tr class="Table__TR--sm">` rows. A completed game row
//! carries eight cells and links the opponent as a dash-slug URL segment;
//! the first row with six cells is the upcoming game, where the played
//! portion of the schedule ends.

use std::error::Error;

use crate::config::consts::TEAM_SCHEDULE_URL;
use crate::core::html::{attr_value, has_class, next_tag_block_ci, to_lower};
use crate::core::net;
use crate::store::Scratch;
use crate::teams::{self, TeamInfo};

const PLAYED_CELLS: usize = 8;
const UPCOMING_CELLS: usize = 6;

pub fn fetch(team: &TeamInfo, scratch: &Scratch) -> Result<Vec<String>, Box<dyn Error>> {
    let url = TEAM_SCHEDULE_URL.replace("{slug}", team.slug);
    let doc = net::http_get(&url)?;
    let _ = scratch.save_page(&join!(team.slug, "_schedule"), &doc);
    parse_doc(&doc)
}

/// Split out for offline fixture tests. Canonical opponent names in played
/// order; stops at the first upcoming-game row.
pub fn parse_doc(doc: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let mut opponents = Vec::new();

    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(doc, "<tr", "</tr>", pos) {
        let row = &doc[tr_s..tr_e];
        pos = tr_e;

        if !has_class(row, "Table__TR--sm") {
            continue;
        }

        let cells = count_cells(row);
        if cells == UPCOMING_CELLS {
            break;
        }
        if cells != PLAYED_CELLS {
            continue; // header/bye filler rows
        }

        match opponent_from_row(row) {
            Some(name) => opponents.push(name),
            None => loge!("Team schedule: played row without an opponent link"),
        }
    }

    Ok(opponents)
}

fn count_cells(row: &str) -> usize {
    let mut n = 0usize;
    let mut pos = 0usize;
    while let Some((_, td_e)) = next_tag_block_ci(row, "<td", "</td>", pos) {
        n += 1;
        pos = td_e;
    }
    n
}

/// First anchor in the row whose href's trailing path segment resolves in
/// the franchise table.
fn opponent_from_row(row: &str) -> Option<String> {
    let lc = to_lower(row);
    let mut pos = 0usize;
    while let Some(rel) = lc[pos..].find("<a ") {
        let start = pos + rel;
        let end = row[start..].find('>').map(|e| start + e + 1).unwrap_or(row.len());
        let opener = &row[start..end];
        pos = end;

        if let Some(href) = attr_value(opener, "href") {
            if let Some(seg) = href.trim_end_matches('/').rsplit('/').next() {
                if let Some(team) = teams::by_slug(seg) {
                    return Some(team.full_name());
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
    <table>
      <tr class="Table__TR--sm"><td colspan="8">Regular Season</td></tr>
      <tr class="Table__TR--sm">
        <td>Sun 9/13</td>
        <td><a href="/nfl/team/_/name/hou/houston-texans">Texans</a></td>
        <td>W 34-20</td><td>1-0</td><td>a</td><td>b</td><td>c</td><td>d</td>
      </tr>
      <tr class="Table__TR--sm">
        <td>Sun 9/20</td>
        <td><a href="/nfl/team/_/name/lac/los-angeles-chargers">Chargers</a></td>
        <td>W 23-20</td><td>2-0</td><td>a</td><td>b</td><td>c</td><td>d</td>
      </tr>
      <tr class="Table__TR--sm">
        <td>Sun 10/4</td>
        <td><a href="/nfl/team/_/name/ne/new-england-patriots">Patriots</a></td>
        <td>1:00 PM</td><td>TBD</td><td>a</td><td>b</td>
      </tr>
      <tr class="Table__TR--sm">
        <td>Sun 10/11</td>
        <td><a href="/nfl/team/_/name/lv/las-vegas-raiders">Raiders</a></td>
        <td>1:00 PM</td><td>TBD</td><td>a</td><td>b</td>
      </tr>
    </table>
    "#;

    #[test]
    fn played_games_collected_until_upcoming_row() {
        let opponents = parse_doc(DOC).unwrap();
        assert_eq!(
            opponents,
            vec![s!("Houston Texans"), s!("Los Angeles Chargers")]
        );
    }

    #[test]
    fn empty_page_yields_empty_schedule() {
        assert!(parse_doc("<table></table>").unwrap().is_empty());
    }
}
