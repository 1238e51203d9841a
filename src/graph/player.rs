// src/graph/player.rs
use crate::model::Graph;
use crate::source::{PlayerRef, RecordSource, Rosters};
use crate::specs::{Matchup, SportSpec};

/// Every (away, home) player pair of one game → one edge.
/// Players are looked up once, on first sight.
pub(super) fn fold_game(
    graph: &mut Graph,
    source: &dyn RecordSource,
    spec: &dyn SportSpec,
    m: &Matchup,
    rosters: &Rosters,
) {
    for away in &rosters.away {
        for home in &rosters.home {
            add_player(graph, source, spec, away);
            add_player(graph, source, spec, home);
            graph.add_edge(spec.player_edge(m, away, home));
        }
    }
}

fn add_player(graph: &mut Graph, source: &dyn RecordSource, spec: &dyn SportSpec, player: &PlayerRef) {
    graph.add_node_with(&player.player_id, || {
        let attrs = match source.player_attributes(spec.sport(), &player.player_id) {
            Ok(attrs) => Some(attrs),
            Err(e) => {
                logd!("No attributes for {} ({}): {e}", player.name, player.player_id);
                None
            }
        };
        spec.player_node(player, attrs.as_ref())
    });
}
