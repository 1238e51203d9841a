// src/specs/pro.rs
use crate::config::consts::{GAME_NUM_KEY, WEEK_KEY};
use crate::model::Attrs;
use crate::source::{PlayerAttributes, PlayerRef};
use crate::sport::Sport;

use super::{Matchup, Side, SportSpec};

/// Professional leagues: no conferences, no rankings.
pub struct ProLeague {
    sport: Sport,
    game_key: &'static str,
    season_type: bool,
}

impl ProLeague {
    pub const MLB: ProLeague = ProLeague { sport: Sport::Mlb, game_key: GAME_NUM_KEY, season_type: false };
    pub const NBA: ProLeague = ProLeague { sport: Sport::Nba, game_key: GAME_NUM_KEY, season_type: true };
    pub const NFL: ProLeague = ProLeague { sport: Sport::Nfl, game_key: WEEK_KEY, season_type: true };
    pub const NHL: ProLeague = ProLeague { sport: Sport::Nhl, game_key: GAME_NUM_KEY, season_type: true };

    fn finish_edge(&self, edge: &mut Attrs, m: &Matchup) {
        edge.push("source_win", m.away_win);
        edge.push("target_win", m.home_win);
        edge.push(self.game_key, m.game_number);
        edge.push("year", m.year);
        if self.season_type {
            edge.push("season_type", m.season_type);
        }
    }
}

impl SportSpec for ProLeague {
    fn sport(&self) -> Sport { self.sport }

    fn team_node(&self, side: &Side) -> Attrs {
        attrs! { "id" => &side.id, "label" => &side.label }
    }

    fn team_edge(&self, m: &Matchup) -> Attrs {
        let mut edge = attrs! { "source" => &m.away.id, "target" => &m.home.id };
        self.finish_edge(&mut edge, m);
        edge
    }

    fn player_node(&self, player: &PlayerRef, attrs: Option<&PlayerAttributes>) -> Attrs {
        attrs! {
            "id" => &player.player_id,
            "name" => &player.name,
            "position" => attrs.and_then(|a| a.position.clone()),
        }
    }

    fn player_edge(&self, m: &Matchup, away: &PlayerRef, home: &PlayerRef) -> Attrs {
        let mut edge = attrs! {
            "source" => &away.player_id,
            "target" => &home.player_id,
            "source_team" => &m.away.id,
            "target_team" => &m.home.id,
        };
        self.finish_edge(&mut edge, m);
        edge
    }
}
