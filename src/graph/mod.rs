// src/graph/mod.rs
//! # Graph builders
//!
//! Walk one season through a [`RecordSource`] and fold it into a [`Graph`].
//!
//! Both levels share the same traversal:
//! ```text
//! for team in teams(sport, year):
//!     for game in schedule(sport, team, year):
//!         resolve home/away + winner   (specs::Matchup)
//!         team level   → team + opponent node, one edge
//!         player level → every away×home player pair, one edge each
//! ```
//! Every real game is seen from both schedules, so it yields two team edges
//! (or two full player products). Edges are never merged.
//!
//! Team and schedule failures abort the build. A build that ends with no
//! nodes or no edges returns `Ok(None)`; the caller decides what that means.

use crate::error::Result;
use crate::model::Graph;
use crate::progress::{NullProgress, Progress};
use crate::source::RecordSource;
use crate::specs::{self, Matchup, Side, SportSpec};
use crate::sport::{Level, Sport};

mod player;
mod team;

/// Build the `level` graph of `sport` for `year`.
pub fn build(
    source: &dyn RecordSource,
    sport: Sport,
    year: i32,
    level: Level,
    progress: Option<&mut dyn Progress>,
) -> Result<Option<Graph>> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let spec = specs::spec_for(sport);
    let result = walk(source, spec, year, level, progress);
    progress.finish();

    let graph = result.inspect_err(|e| loge!("{sport} {year} {} build failed: {e}", level.as_str()))?;
    logd!(
        "{sport} {year} {}: {} nodes, {} edges",
        level.as_str(),
        graph.nodes().len(),
        graph.edges().len()
    );
    Ok(graph.has_content().then_some(graph))
}

fn walk(
    source: &dyn RecordSource,
    spec: &dyn SportSpec,
    year: i32,
    level: Level,
    progress: &mut dyn Progress,
) -> Result<Graph> {
    let sport = spec.sport();
    let teams = source.teams(sport, year)?;
    progress.begin(teams.len());

    let mut graph = Graph::new();
    // Member teams take their ids before any opponent stub can.
    if level == Level::Team {
        for team in &teams {
            graph.add_node(spec.team_node(&Side::of_team(spec, team, None)));
        }
    }

    for team in &teams {
        progress.log(&format!("{sport} {year}: {}", team.name));
        let games = source.schedule(sport, team, year)?;

        for game in &games {
            let m = Matchup::resolve(spec, team, game, year);
            match level {
                Level::Team => team::fold_game(&mut graph, spec, &m),
                Level::Player => {
                    let rosters = source.boxscore(sport, year, game)?;
                    player::fold_game(&mut graph, source, spec, &m, &rosters);
                }
            }
        }

        logd!("{sport} {year}: folded {} games of {}", games.len(), team.abbreviation);
        progress.item_done(&team.abbreviation);
    }

    Ok(graph)
}
