// src/specs/schedule.rs
//! Scraping spec for the league schedule page.
//!
//! Ground truth:
//! - Current week number: the `selected` option inside the week dropdown
//!   (`<div class="dropdown-type-week">`), text like "Week 8".
//! - Matchups: paired `<a class="team-name">` anchors, away first, home
//!   second; the full team name sits in the nested `<abbr title="…">`.

use std::error::Error;

use crate::config::consts::{SCHEDULE_PAGE, SCHEDULE_URL};
use crate::core::html::{attr_value, has_class, inner_after_open_tag, next_tag_block_ci, strip_tags};
use crate::core::net;
use crate::core::sanitize::normalize_entities;
use crate::store::Scratch;

pub struct ScheduleBundle {
    pub week: u32,
    /// (away, home), raw names as the page printed them.
    pub matchups: Vec<(String, String)>,
}

pub fn fetch(scratch: &Scratch) -> Result<ScheduleBundle, Box<dyn Error>> {
    let doc = net::http_get(SCHEDULE_URL)?;
    let _ = scratch.save_page(SCHEDULE_PAGE, &doc);
    parse_doc(&doc)
}

/// Split out for offline fixture tests.
pub fn parse_doc(doc: &str) -> Result<ScheduleBundle, Box<dyn Error>> {
    let week = detect_week(doc)
        .ok_or("Week selector not found on schedule page (layout drift?)")?;

    let names = team_anchor_names(doc);
    if names.len() % 2 != 0 {
        loge!("Schedule: odd team-anchor count ({}), dropping the last", names.len());
    }

    let mut matchups = Vec::with_capacity(names.len() / 2);
    let mut iter = names.into_iter();
    while let (Some(away), Some(home)) = (iter.next(), iter.next()) {
        matchups.push((away, home));
    }

    Ok(ScheduleBundle { week, matchups })
}

/// Week number from the dropdown's selected option. Falls back to scanning
/// the whole document when the dropdown wrapper is not where we expect it.
fn detect_week(doc: &str) -> Option<u32> {
    let scope = match next_tag_block_ci(doc, r#"<div class="dropdown-type-week""#, "</div>", 0) {
        Some((s, e)) => &doc[s..e],
        None => doc,
    };

    let mut pos = 0usize;
    while let Some((o_s, o_e)) = next_tag_block_ci(scope, "<option", "</option>", pos) {
        let block = &scope[o_s..o_e];
        pos = o_e;

        let opener = &block[..block.find('>').unwrap_or(block.len())];
        if !opener.to_ascii_lowercase().contains("selected") {
            continue;
        }

        let text = strip_tags(normalize_entities(&inner_after_open_tag(block)));
        let lc = text.to_ascii_lowercase();
        let idx = lc.find("week")?;
        let digits: String = text[idx + 4..]
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit())
            .collect();
        return digits.parse().ok();
    }
    None
}

/// Every `<a class="team-name">` in document order. Prefers the title
/// attribute of the nested abbreviation (full "City TeamName"); falls back
/// to the anchor's visible text.
fn team_anchor_names(doc: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut pos = 0usize;

    while let Some((a_s, a_e)) = next_tag_block_ci(doc, "<a ", "</a>", pos) {
        let block = &doc[a_s..a_e];
        pos = a_e;

        if !has_class(block, "team-name") {
            continue;
        }

        let name = match next_tag_block_ci(block, "<abbr", "</abbr>", 0) {
            Some((b_s, b_e)) => {
                let abbr = &block[b_s..b_e];
                attr_value(abbr, "title").unwrap_or_else(|| {
                    strip_tags(normalize_entities(&inner_after_open_tag(abbr)))
                })
            }
            None => strip_tags(normalize_entities(&inner_after_open_tag(block))),
        };

        if !name.is_empty() {
            out.push(name);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
    <div class="dropdown-type-week">
      <select>
        <option value="7">Week 7</option>
        <option value="8" selected="selected">Week 8</option>
      </select>
    </div>
    <a name="away1" class="team-name" href="/nfl/team/_/name/ne">
      <abbr title="New England Patriots">NE</abbr>
    </a>
    <a name="home1" class="team-name" href="/nfl/team/_/name/buf">
      <abbr title="Buffalo Bills">BUF</abbr>
    </a>
    <a name="away2" class="team-name" href="/nfl/team/_/name/kc">
      <abbr title="Kansas City Chiefs">KC</abbr>
    </a>
    <a name="home2" class="team-name" href="/nfl/team/_/name/lac">
      <abbr title="Los Angeles Chargers">LAC</abbr>
    </a>
    "#;

    #[test]
    fn week_and_matchups_extracted() {
        let bundle = parse_doc(DOC).unwrap();
        assert_eq!(bundle.week, 8);
        assert_eq!(
            bundle.matchups,
            vec![
                (s!("New England Patriots"), s!("Buffalo Bills")),
                (s!("Kansas City Chiefs"), s!("Los Angeles Chargers")),
            ]
        );
    }

    #[test]
    fn missing_week_dropdown_is_an_error() {
        assert!(parse_doc("<html><body>nothing here</body></html>").is_err());
    }
}
