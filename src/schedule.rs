// src/schedule.rs
//! Current-week schedule and opponent resolution.

use crate::rankings::BYE_WEEK;
use crate::teams;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Opponent {
    Team(String),
    Bye,
}

impl Opponent {
    pub fn name(&self) -> &str {
        match self {
            Opponent::Team(name) => name,
            Opponent::Bye => BYE_WEEK,
        }
    }

    pub fn is_bye(&self) -> bool {
        matches!(self, Opponent::Bye)
    }
}

/// The week number and this week's away/home pairs, canonical names.
pub struct WeekSchedule {
    week: u32,
    matchups: Vec<(String, String)>, // (away, home)
}

impl WeekSchedule {
    pub fn new(week: u32, matchups: Vec<(String, String)>) -> Self {
        let matchups = matchups
            .into_iter()
            .map(|(a, h)| (teams::canonical_name(&a), teams::canonical_name(&h)))
            .collect();
        Self { week, matchups }
    }

    pub fn week(&self) -> u32 {
        self.week
    }

    pub fn matchups(&self) -> &[(String, String)] {
        &self.matchups
    }

    /// Opponent of `team` this week, or `Bye` when the team appears in
    /// neither column. The query is canonicalized first, so "Football Team",
    /// "Washington" and "Washington Football Team" all resolve alike.
    pub fn opponent_for(&self, team: &str) -> Opponent {
        for (away, home) in &self.matchups {
            if names_match(away, team) {
                return Opponent::Team(home.clone());
            }
            if names_match(home, team) {
                return Opponent::Team(away.clone());
            }
        }
        Opponent::Bye
    }
}

/// Identity comparison via the franchise table, with a containment fallback
/// for strings the table cannot place (composite "City TeamName" vs bare
/// mascot).
fn names_match(entry: &str, query: &str) -> bool {
    match (teams::canonical(entry), teams::canonical(query)) {
        (Some(a), Some(b)) => std::ptr::eq(a, b),
        _ => {
            let entry_lc = entry.to_ascii_lowercase();
            let query_lc = query.to_ascii_lowercase();
            !query_lc.is_empty() && (entry_lc.contains(&query_lc) || query_lc.contains(&entry_lc))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week() -> WeekSchedule {
        WeekSchedule::new(
            8,
            vec![
                (s!("New England Patriots"), s!("Buffalo Bills")),
                (s!("Kansas City Chiefs"), s!("Los Angeles Chargers")),
            ],
        )
    }

    #[test]
    fn away_team_gets_home_opponent() {
        assert_eq!(
            week().opponent_for("New England Patriots"),
            Opponent::Team(s!("Buffalo Bills"))
        );
    }

    #[test]
    fn home_team_gets_away_opponent() {
        assert_eq!(
            week().opponent_for("Chargers"),
            Opponent::Team(s!("Kansas City Chiefs"))
        );
    }

    #[test]
    fn absent_team_is_a_bye() {
        assert_eq!(week().opponent_for("Dallas Cowboys"), Opponent::Bye);
    }

    #[test]
    fn historical_name_resolves_like_current() {
        let sched = WeekSchedule::new(3, vec![(s!("Washington"), s!("New York Giants"))]);
        assert_eq!(
            sched.opponent_for("Football Team"),
            Opponent::Team(s!("New York Giants"))
        );
        assert_eq!(
            sched.opponent_for("Washington Football Team"),
            Opponent::Team(s!("New York Giants"))
        );
    }
}
