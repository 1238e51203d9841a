// tests/player_graph.rs
mod common;

use std::sync::atomic::Ordering;

use common::{fixture, Counting};
use sportgraph::{Level, Runner, RunnerOptions, Sport, Value};

#[test]
fn nfl_player_product_and_single_lookups() {
    let r = Runner::with_options(Counting::new(fixture()), RunnerOptions::pinned(2024));
    let g = r.graph(Sport::Nfl, 2021, Level::Player).unwrap().unwrap();

    let ids: Vec<_> = g.nodes().iter().filter_map(|n| n.id()).collect();
    assert_eq!(ids, vec!["MahoPa00", "MayfBa00", "KelcTr00", "CarrDe02"]);
    assert_eq!(g.edges().len(), 6);

    let src = r.source();
    assert_eq!(src.teams.load(Ordering::SeqCst), 1);
    assert_eq!(src.schedules.load(Ordering::SeqCst), 3);
    assert_eq!(src.boxscores.load(Ordering::SeqCst), 4);
    assert_eq!(src.players.load(Ordering::SeqCst), 4);
}

#[test]
fn failed_lookup_leaves_null_position() {
    let r = Runner::with_options(fixture(), RunnerOptions::pinned(2024));
    let g = r.graph(Sport::Nfl, 2021, Level::Player).unwrap().unwrap();

    let carr = g.node("CarrDe02").unwrap();
    assert_eq!(carr.get_str("name"), Some("Derek Carr"));
    assert_eq!(carr.get("position"), Some(&Value::Null));
    assert_eq!(g.node("KelcTr00").and_then(|n| n.get_str("position")), Some("TE"));
}

#[test]
fn player_edges_name_both_teams() {
    let r = Runner::with_options(fixture(), RunnerOptions::pinned(2024));
    let g = r.graph(Sport::Nfl, 2021, Level::Player).unwrap().unwrap();

    let first = &g.edges()[0];
    assert_eq!(
        first.keys().collect::<Vec<_>>(),
        vec![
            "source", "target", "source_team", "target_team", "source_win", "target_win",
            "week", "year", "season_type",
        ]
    );
    assert_eq!(first.get_str("source"), Some("MahoPa00"));
    assert_eq!(first.get_str("target"), Some("MayfBa00"));
    assert_eq!(first.get_str("source_team"), Some("KC"));
    assert_eq!(first.get_str("target_team"), Some("CLE"));
    assert_eq!(first.get_int("source_win"), Some(1));
}

#[test]
fn college_players_carry_class() {
    let r = Runner::with_options(fixture(), RunnerOptions::pinned(2024));
    let g = r.graph(Sport::Ncaaf, 2019, Level::Player).unwrap().unwrap();

    let burrow = g.node("joe-burrow-1").unwrap();
    assert_eq!(burrow.keys().collect::<Vec<_>>(), vec!["id", "name", "position", "class"]);
    assert_eq!(burrow.get_str("class"), Some("SR"));

    let walk_on = g.node("walk-on-1").unwrap();
    assert_eq!(walk_on.get("class"), Some(&Value::Null));

    assert_eq!(g.edges().len(), 3);
    assert!(g.edges().iter().all(|e| e.get("conference_game").is_some()));
}

#[test]
fn player_level_has_no_team_nodes() {
    let r = Runner::with_options(fixture(), RunnerOptions::pinned(2024));
    let g = r.graph(Sport::Nfl, 2021, Level::Player).unwrap().unwrap();
    assert!(!g.contains_node("KC"));
}
