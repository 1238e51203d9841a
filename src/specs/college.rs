// src/specs/college.rs
use crate::config::consts::WEEK_KEY;
use crate::model::Attrs;
use crate::source::{PlayerAttributes, PlayerRef};
use crate::sport::Sport;

use super::{Matchup, Side, SportSpec};

/// College sports: conference membership on nodes and edges, optional poll ranks.
pub struct College {
    sport: Sport,
    ranked: bool,
    season_type: bool,
    lowercase_ids: bool,
}

impl College {
    pub const NCAAB: College = College { sport: Sport::Ncaab, ranked: false, season_type: true, lowercase_ids: true };
    pub const NCAAF: College = College { sport: Sport::Ncaaf, ranked: true, season_type: false, lowercase_ids: false };

    fn finish_edge(&self, edge: &mut Attrs, m: &Matchup) {
        edge.push("source_win", m.away_win);
        edge.push("target_win", m.home_win);
        if self.ranked {
            edge.push("source_rank", m.away.rank);
            edge.push("target_rank", m.home.rank);
        }
        edge.push("source_conference", m.away.conference.as_ref());
        edge.push("target_conference", m.home.conference.as_ref());
        edge.push(WEEK_KEY, m.game_number);
        edge.push("conference_game", m.conference_game());
        edge.push("year", m.year);
        if self.season_type {
            edge.push("season_type", m.season_type);
        }
    }
}

impl SportSpec for College {
    fn sport(&self) -> Sport { self.sport }

    fn team_id(&self, abbreviation: &str) -> String {
        if self.lowercase_ids { abbreviation.to_lowercase() } else { s!(abbreviation) }
    }

    fn team_node(&self, side: &Side) -> Attrs {
        attrs! {
            "id" => &side.id,
            "label" => &side.label,
            "conference" => side.conference.as_ref(),
        }
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
            "class" => attrs.and_then(|a| a.class.clone()),
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
