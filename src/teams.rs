// src/teams.rs
//! Canonical franchise identity table.
//!
//! Every team-name string scraped off a page (mascot tokens in schedule
//! titles, full names in stat tables, dash-slugs in schedule links, the
//! renamed Washington franchise) resolves through this one table. Nothing
//! else in the crate is allowed to slice team strings apart.

use crate::core::sanitize::{normalize_ws, slugify};

pub struct TeamInfo {
    pub abbr: &'static str,
    pub city: &'static str,
    /// Mascot / nickname ("Patriots"). For Washington this is the 2020
    /// placeholder name.
    pub name: &'static str,
    /// Schedule-page URL slug.
    pub slug: &'static str,
    /// Historical or colloquial names that must resolve to this franchise.
    pub aliases: &'static [&'static str],
}

impl TeamInfo {
    pub fn full_name(&self) -> String {
        join!(self.city, " ", self.name)
    }
}

pub static TEAMS: &[TeamInfo] = &[
    TeamInfo { abbr: "ARI", city: "Arizona", name: "Cardinals", slug: "ari", aliases: &[] },
    TeamInfo { abbr: "ATL", city: "Atlanta", name: "Falcons", slug: "atl", aliases: &[] },
    TeamInfo { abbr: "BAL", city: "Baltimore", name: "Ravens", slug: "bal", aliases: &[] },
    TeamInfo { abbr: "BUF", city: "Buffalo", name: "Bills", slug: "buf", aliases: &[] },
    TeamInfo { abbr: "CAR", city: "Carolina", name: "Panthers", slug: "car", aliases: &[] },
    TeamInfo { abbr: "CHI", city: "Chicago", name: "Bears", slug: "chi", aliases: &[] },
    TeamInfo { abbr: "CIN", city: "Cincinnati", name: "Bengals", slug: "cin", aliases: &[] },
    TeamInfo { abbr: "CLE", city: "Cleveland", name: "Browns", slug: "cle", aliases: &[] },
    TeamInfo { abbr: "DAL", city: "Dallas", name: "Cowboys", slug: "dal", aliases: &[] },
    TeamInfo { abbr: "DEN", city: "Denver", name: "Broncos", slug: "den", aliases: &[] },
    TeamInfo { abbr: "DET", city: "Detroit", name: "Lions", slug: "det", aliases: &[] },
    TeamInfo { abbr: "GB", city: "Green Bay", name: "Packers", slug: "gb", aliases: &[] },
    TeamInfo { abbr: "HOU", city: "Houston", name: "Texans", slug: "hou", aliases: &[] },
    TeamInfo { abbr: "IND", city: "Indianapolis", name: "Colts", slug: "ind", aliases: &[] },
    TeamInfo { abbr: "JAX", city: "Jacksonville", name: "Jaguars", slug: "jax", aliases: &[] },
    TeamInfo { abbr: "KC", city: "Kansas City", name: "Chiefs", slug: "kc", aliases: &[] },
    TeamInfo { abbr: "LAC", city: "Los Angeles", name: "Chargers", slug: "lac", aliases: &["San Diego Chargers"] },
    TeamInfo { abbr: "LAR", city: "Los Angeles", name: "Rams", slug: "lar", aliases: &["St. Louis Rams"] },
    TeamInfo { abbr: "LV", city: "Las Vegas", name: "Raiders", slug: "lv", aliases: &["Oakland Raiders"] },
    TeamInfo { abbr: "MIA", city: "Miami", name: "Dolphins", slug: "mia", aliases: &[] },
    TeamInfo { abbr: "MIN", city: "Minnesota", name: "Vikings", slug: "min", aliases: &[] },
    TeamInfo { abbr: "NE", city: "New England", name: "Patriots", slug: "ne", aliases: &[] },
    TeamInfo { abbr: "NO", city: "New Orleans", name: "Saints", slug: "no", aliases: &[] },
    TeamInfo { abbr: "NYG", city: "New York", name: "Giants", slug: "nyg", aliases: &[] },
    TeamInfo { abbr: "NYJ", city: "New York", name: "Jets", slug: "nyj", aliases: &[] },
    TeamInfo { abbr: "PHI", city: "Philadelphia", name: "Eagles", slug: "phi", aliases: &[] },
    TeamInfo { abbr: "PIT", city: "Pittsburgh", name: "Steelers", slug: "pit", aliases: &[] },
    TeamInfo { abbr: "SEA", city: "Seattle", name: "Seahawks", slug: "sea", aliases: &[] },
    TeamInfo { abbr: "SF", city: "San Francisco", name: "49ers", slug: "sf", aliases: &[] },
    TeamInfo { abbr: "TB", city: "Tampa Bay", name: "Buccaneers", slug: "tb", aliases: &[] },
    TeamInfo { abbr: "TEN", city: "Tennessee", name: "Titans", slug: "ten", aliases: &[] },
    TeamInfo {
        abbr: "WSH", city: "Washington", name: "Football Team", slug: "wsh",
        aliases: &["Washington", "Redskins", "Washington Redskins"],
    },
];

/// Resolve any scraped team string to its franchise.
///
/// Precedence: full name, alias, mascot, unique city, then containment of a
/// unique mascot anywhere in the string (covers "New England Patriots (4-2)"
/// style decorations). Ambiguous strings ("New York", "Los Angeles") resolve
/// to nothing rather than to the wrong franchise.
pub fn canonical(raw: &str) -> Option<&'static TeamInfo> {
    let raw = normalize_ws(raw);
    if raw.is_empty() {
        return None;
    }

    for t in TEAMS {
        if raw.eq_ignore_ascii_case(&t.full_name()) {
            return Some(t);
        }
    }
    for t in TEAMS {
        if t.aliases.iter().any(|a| raw.eq_ignore_ascii_case(a)) {
            return Some(t);
        }
    }
    for t in TEAMS {
        if raw.eq_ignore_ascii_case(t.name) {
            return Some(t);
        }
    }

    let city_hits: Vec<&'static TeamInfo> =
        TEAMS.iter().filter(|t| raw.eq_ignore_ascii_case(t.city)).collect();
    if let [only] = city_hits[..] {
        return Some(only);
    }

    let lc = raw.to_ascii_lowercase();
    let contained: Vec<&'static TeamInfo> = TEAMS
        .iter()
        .filter(|t| lc.contains(&t.name.to_ascii_lowercase()))
        .collect();
    if let [only] = contained[..] {
        return Some(only);
    }

    None
}

/// Canonical display name, or the cleaned input when the franchise is
/// unknown (the caller decides whether that is fatal).
pub fn canonical_name(raw: &str) -> String {
    match canonical(raw) {
        Some(t) => t.full_name(),
        None => normalize_ws(raw),
    }
}

/// Resolve a dash-slug URL path segment ("new-england-patriots", "wsh").
pub fn by_slug(seg: &str) -> Option<&'static TeamInfo> {
    let seg = seg.trim().trim_matches('/').to_ascii_lowercase();
    if seg.is_empty() {
        return None;
    }
    TEAMS.iter().find(|t| {
        seg == t.slug
            || seg == slugify(&t.full_name())
            || seg == slugify(t.city)
            || seg == slugify(t.name)
            || t.aliases.iter().any(|a| seg == slugify(a))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renamed_franchise_resolves_to_one_identity() {
        let a = canonical("Football Team").map(|t| t.abbr);
        let b = canonical("Washington").map(|t| t.abbr);
        let c = canonical("Washington Redskins").map(|t| t.abbr);
        assert_eq!(a, Some("WSH"));
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn mascot_and_decorated_strings() {
        assert_eq!(canonical("Patriots").map(|t| t.abbr), Some("NE"));
        assert_eq!(canonical("New England Patriots (4-2)").map(|t| t.abbr), Some("NE"));
    }

    #[test]
    fn ambiguous_city_is_not_guessed() {
        assert!(canonical("New York").is_none());
        assert!(canonical("Los Angeles").is_none());
        assert_eq!(canonical("New York Jets").map(|t| t.abbr), Some("NYJ"));
    }

    #[test]
    fn slug_roundtrip() {
        assert_eq!(by_slug("new-england-patriots").map(|t| t.abbr), Some("NE"));
        assert_eq!(by_slug("kc").map(|t| t.abbr), Some("KC"));
        assert_eq!(by_slug("washington-football-team").map(|t| t.abbr), Some("WSH"));
        assert!(by_slug("springfield-isotopes").is_none());
    }

    #[test]
    fn table_covers_the_league() {
        assert_eq!(TEAMS.len(), 32);
        let mut slugs: Vec<_> = TEAMS.iter().map(|t| t.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), 32);
    }
}
