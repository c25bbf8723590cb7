// src/runner.rs
//! Top-level orchestration: dispatch on mode, then run the session at the
//! requested verbosity. The phase order is fixed (week schedule, rankings,
//! players, defenses, cleanup, presentation) and any failure on the way
//! aborts the session.

use std::error::Error;

use crate::config::options::{Mode, Params};
use crate::progress::{ConsoleProgress, Progress};
use crate::rank;
use crate::rankings::Rankings;
use crate::report;
use crate::roster;
use crate::scrape;
use crate::store::Scratch;
use crate::teams;

pub fn run(params: &Params) -> Result<(), Box<dyn Error>> {
    match &params.mode {
        Mode::LookupPlayer(name) => lookup_player(name),
        Mode::LookupDefense(team) => lookup_defense(team),
        Mode::Rank => run_rank(params),
    }
}

fn run_rank(params: &Params) -> Result<(), Box<dyn Error>> {
    println!("verbosity of {} is being used...", params.verbosity);

    let roster = roster::load(&params.filename)?;
    let mut players = roster.players;
    let mut defenses = roster.defenses;

    let mut progress = ConsoleProgress { verbosity: params.verbosity };

    if params.verbosity >= 2 {
        println!("\nList of Players and Defenses found:\n");
        report::print_roster_listing(&players, &defenses);
        println!();
    }

    let scratch = Scratch::create();
    let week = scrape::collect_week_schedule(&scratch)?;

    // Rankings first: no entity may score against a partial map.
    progress.log("Retrieving Players Data...");
    let rankings = scrape::collect_rankings(&scratch)?;

    progress.begin(players.len());
    for player in players.iter_mut() {
        scrape::collect_player(player, &week, &rankings, &scratch)?;
        progress.item_done(&player.name);
    }
    progress.finish();
    progress.log("Done");

    progress.log("Retrieving Defense Data...");
    let tables = scrape::collect_defense_tables(&scratch)?;
    progress.begin(defenses.len());
    for defense in defenses.iter_mut() {
        scrape::collect_defense(defense, &tables, &week, &rankings, &scratch)?;
        progress.item_done(&defense.team);
    }
    progress.finish();
    progress.log("Done");

    // All derivations done; the scratch pages are no longer referenced.
    progress.log("Deleting the temporary data directory...");
    if let Err(e) = scratch.remove() {
        loge!("Scratch: cleanup failed: {}", e);
    }
    progress.log("Done");

    if params.verbosity >= 2 {
        report::print_week_schedule(&week);
    }
    if params.verbosity >= 3 {
        for player in &players {
            report::print_player_data(player);
            println!();
        }
        for defense in &defenses {
            report::print_defense_data(defense);
        }
        println!("\n\nAll of the general data gathered on offenses and defenses:\n");
        report::print_vector_table(
            "Current Offense Data:",
            &Rankings::sorted(rankings.offense_map()),
        );
        report::print_vector_table(
            "Current Defense Data:",
            &Rankings::sorted(rankings.defense_map()),
        );
    }

    let team = rank::build_team(players);
    rank::sort_defenses(&mut defenses);
    report::print_team(&team, &defenses);

    if params.save {
        let path = report::write_report(
            params.outputfile.as_deref(),
            week.week(),
            &team,
            &defenses,
        )?;
        println!("Saved team to {}", path.display());
    }

    Ok(())
}

/// Fetch and print one player, then exit. The ranking maps are not built
/// here, so the dump is the stats, log and opponents, without a score.
fn lookup_player(name: &str) -> Result<(), Box<dyn Error>> {
    let scratch = Scratch::create();
    let week = scrape::collect_week_schedule(&scratch)?;

    let mut player = crate::player::Player::new(name);
    let bundle = crate::specs::player_stats::fetch(name, &scratch)?;
    player.position = bundle.position;
    player.team = bundle.team;
    player.game_categories = bundle.game_categories;
    player.game_log = bundle.game_rows;
    player.season_categories = bundle.season_categories;
    player.season_rows = bundle.season_rows;
    player.schedule = crate::specs::game_log::fetch(name, &scratch)?;
    player.opponent = week.opponent_for(&player.team);

    report::print_player_data(&player);

    if let Err(e) = scratch.remove() {
        loge!("Scratch: cleanup failed: {}", e);
    }
    Ok(())
}

/// Fetch and print one defense, then exit.
fn lookup_defense(team: &str) -> Result<(), Box<dyn Error>> {
    let info = teams::canonical(team)
        .ok_or_else(|| format!("Unknown team: '{}'", team))?;

    let scratch = Scratch::create();
    let week = scrape::collect_week_schedule(&scratch)?;

    let mut defense = crate::defense::Defense::new(&info.full_name());
    let tables = scrape::collect_defense_tables(&scratch)?;
    defense.stats = vec![
        scrape::category_stats(&tables.passing, &defense.team)?,
        scrape::category_stats(&tables.rushing, &defense.team)?,
    ];
    defense.schedule = crate::specs::team_schedule::fetch(info, &scratch)?;
    defense.opponent = week.opponent_for(&defense.team);

    report::print_defense_data(&defense);

    if let Err(e) = scratch.remove() {
        loge!("Scratch: cleanup failed: {}", e);
    }
    Ok(())
}
