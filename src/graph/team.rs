// src/graph/team.rs
use crate::model::Graph;
use crate::specs::{Matchup, SportSpec};

/// One schedule entry → opponent node (if unseen) + one edge.
pub(super) fn fold_game(graph: &mut Graph, spec: &dyn SportSpec, m: &Matchup) {
    let opponent = m.opponent();
    graph.add_node_with(&opponent.id, || spec.team_node(opponent));
    graph.add_edge(spec.team_edge(m));
}
