// src/rank.rs
//! Presentation ordering: players grouped by position, every group and the
//! defense list descending by score. Groups keep the order positions first
//! appeared in; ties keep input order (stable sort throughout).

use std::cmp::Ordering;

use crate::defense::Defense;
use crate::player::Player;

/// Position groups in first-occurrence order, each sorted descending.
pub type RankedTeam = Vec<(String, Vec<Player>)>;

pub fn build_team(players: Vec<Player>) -> RankedTeam {
    let mut groups: RankedTeam = Vec::new();

    for player in players {
        match groups.iter_mut().find(|(pos, _)| *pos == player.position) {
            Some((_, group)) => group.push(player),
            None => groups.push((player.position.clone(), vec![player])),
        }
    }

    for (_, group) in groups.iter_mut() {
        sort_descending(group, |p| p.score);
    }
    groups
}

pub fn sort_defenses(defenses: &mut [Defense]) {
    sort_descending(defenses, |d| d.score);
}

// slice::sort_by is stable, which is the property that matters here;
// NaN never occurs (scores come from counts) but compares as equal anyway.
fn sort_descending<T, F: Fn(&T) -> f32>(items: &mut [T], score: F) {
    items.sort_by(|a, b| score(b).partial_cmp(&score(a)).unwrap_or(Ordering::Equal));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, position: &str, score: f32) -> Player {
        let mut p = Player::new(name);
        p.position = s!(position);
        p.score = score;
        p
    }

    #[test]
    fn groups_keep_first_occurrence_order() {
        let team = build_team(vec![
            player("a", "QB", 1.0),
            player("b", "WR", 2.0),
            player("c", "QB", 3.0),
        ]);
        let positions: Vec<&str> = team.iter().map(|(pos, _)| pos.as_str()).collect();
        assert_eq!(positions, vec!["QB", "WR"]);
    }

    #[test]
    fn groups_sorted_descending_with_stable_ties() {
        let team = build_team(vec![
            player("first", "RB", 5.0),
            player("second", "RB", 9.0),
            player("third", "RB", 5.0),
        ]);
        let names: Vec<&str> = team[0].1.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["second", "first", "third"]);
        for pair in team[0].1.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn defenses_sorted_descending() {
        let mut defs: Vec<Defense> = ["a", "b", "c"]
            .iter()
            .map(|t| Defense::new(t))
            .collect();
        defs[0].score = 1.0;
        defs[1].score = 7.0;
        defs[2].score = 4.0;
        sort_defenses(&mut defs);
        let teams: Vec<&str> = defs.iter().map(|d| d.team.as_str()).collect();
        assert_eq!(teams, vec!["b", "c", "a"]);
    }
}
