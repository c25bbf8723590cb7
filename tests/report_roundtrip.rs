// tests/report_roundtrip.rs
//
// Saving a ranked team and re-parsing the file must reproduce the same
// (name, score) pairs in the same order.
//
use std::fs;

use ff_scrape::defense::Defense;
use ff_scrape::player::Player;
use ff_scrape::rank::RankedTeam;
use ff_scrape::report::{parse_report, report_string, write_report};

fn player(name: &str, position: &str, score: f32) -> Player {
    let mut p = Player::new(name);
    p.position = position.to_string();
    p.score = score;
    p
}

fn defense(team: &str, score: f32) -> Defense {
    let mut d = Defense::new(team);
    d.score = score;
    d
}

fn sample_team() -> (RankedTeam, Vec<Defense>) {
    let team: RankedTeam = vec![
        (
            "QB".to_string(),
            vec![player("Patrick Mahomes", "QB", 15.0), player("Tom Brady", "QB", 9.0)],
        ),
        (
            "WR".to_string(),
            vec![player("Davante Adams", "WR", 13.0)],
        ),
    ];
    let defenses = vec![
        defense("New England Patriots", 20.0),
        defense("Kansas City Chiefs", 18.0),
    ];
    (team, defenses)
}

#[test]
fn string_roundtrip_preserves_pairs_and_order() {
    let (team, defenses) = sample_team();
    let text = report_string(8, &team, &defenses);
    let parsed = parse_report(&text).unwrap();

    assert_eq!(parsed.week, 8);

    let positions: Vec<&str> = parsed.players.iter().map(|(p, _)| p.as_str()).collect();
    assert_eq!(positions, vec!["QB", "WR"]);

    assert_eq!(
        parsed.players[0].1,
        vec![
            ("Patrick Mahomes".to_string(), 15.0),
            ("Tom Brady".to_string(), 9.0),
        ]
    );
    assert_eq!(
        parsed.defenses,
        vec![
            ("New England Patriots".to_string(), 20.0),
            ("Kansas City Chiefs".to_string(), 18.0),
        ]
    );
}

#[test]
fn file_roundtrip() {
    let (team, defenses) = sample_team();
    let path = std::env::temp_dir().join("ff_scrape_report_roundtrip.txt");

    let written = write_report(Some(&path), 4, &team, &defenses).unwrap();
    let text = fs::read_to_string(&written).unwrap();
    let parsed = parse_report(&text).unwrap();

    assert_eq!(parsed.week, 4);
    assert_eq!(parsed.players.len(), 2);
    assert_eq!(parsed.defenses.len(), 2);

    let _ = fs::remove_file(&written);
}

#[test]
fn default_report_path_carries_the_week() {
    let (team, defenses) = sample_team();
    let dir = std::env::temp_dir().join("ff_scrape_default_report");
    fs::create_dir_all(&dir).unwrap();
    let old = std::env::current_dir().unwrap();

    // Default path is relative to the working directory.
    std::env::set_current_dir(&dir).unwrap();
    let written = write_report(None, 11, &team, &defenses).unwrap();
    let name = written.file_name().unwrap().to_string_lossy().into_owned();
    std::env::set_current_dir(old).unwrap();

    assert_eq!(name, "Week_11.txt");
    let _ = fs::remove_file(dir.join(name));
}
