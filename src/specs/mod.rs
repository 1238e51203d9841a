// src/specs/mod.rs
//! # Per-sport field schemas
//!
//! Each spec knows **which attributes a node or edge carries for one league**
//! and in which order. The builders in `graph` do the traversal; a spec only
//! shapes one record at a time from an already-resolved [`Matchup`].
//!
//! ## What lives here
//! - Home/away and winner resolution from one team's schedule entry.
//! - Team and player node shapes (`id` first, always).
//! - Team and player edge shapes (`source`/`target` first, then the win flags).
//!
//! ## What does **not** live here
//! - Fetching: specs never call the record source.
//! - Deduplication and edge emission order: that belongs to `graph`.
//! - Text output: the encoder never sees a spec.
//!
//! ## Current specs
//! - `pro::ProLeague` for mlb, nba, nfl, nhl (no conferences).
//! - `college::College` for ncaab, ncaaf (conferences, `conference_game`).

use crate::model::Attrs;
use crate::source::{GameRecord, GameResult, Location, PlayerAttributes, PlayerRef, SeasonType, TeamRecord};
use crate::sport::Sport;

pub mod college;
pub mod pro;

/// One side of a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Side {
    pub id: String,
    pub label: String,
    /// Lowercased so conference comparisons are case-insensitive.
    pub conference: Option<String>,
    pub rank: Option<u32>,
}

impl Side {
    /// The side of the scheduled team itself.
    pub fn of_team(spec: &dyn SportSpec, team: &TeamRecord, rank: Option<u32>) -> Side {
        Side {
            id: spec.team_id(&team.abbreviation),
            label: team.name.clone(),
            conference: team.conference.as_deref().map(str::to_lowercase),
            rank,
        }
    }
}

/// A schedule entry resolved into away/home terms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matchup {
    pub away: Side,
    pub home: Side,
    pub away_win: i64,
    pub home_win: i64,
    pub game_number: u32,
    pub season_type: Option<SeasonType>,
    pub year: i32,
    /// The scheduled (iterated) team is the away side.
    pub team_is_away: bool,
}

impl Matchup {
    /// Resolve `game` from `team`'s schedule. The team is the away side only
    /// when the game is marked `Away`; the opponent fills the other side.
    pub fn resolve(spec: &dyn SportSpec, team: &TeamRecord, game: &GameRecord, year: i32) -> Matchup {
        let own = Side::of_team(spec, team, game.rank);
        let opponent = Side {
            id: spec.team_id(&game.opponent_id),
            label: game.opponent_name.clone().unwrap_or_else(|| game.opponent_id.clone()),
            conference: game.opponent_conference.as_deref().map(str::to_lowercase),
            rank: game.opponent_rank,
        };

        let team_is_away = game.location == Location::Away;
        let team_won = game.result == GameResult::Win;
        let away_won = team_won == team_is_away;
        let (away, home) = if team_is_away { (own, opponent) } else { (opponent, own) };

        Matchup {
            away,
            home,
            away_win: i64::from(away_won),
            home_win: i64::from(!away_won),
            game_number: game.game_number,
            season_type: game.season_type,
            year,
            team_is_away,
        }
    }

    pub fn team(&self) -> &Side {
        if self.team_is_away { &self.away } else { &self.home }
    }

    pub fn opponent(&self) -> &Side {
        if self.team_is_away { &self.home } else { &self.away }
    }

    /// 1 when both sides report the same conference, else 0.
    pub fn conference_game(&self) -> i64 {
        match (&self.away.conference, &self.home.conference) {
            (Some(a), Some(h)) => i64::from(a.eq_ignore_ascii_case(h)),
            _ => 0,
        }
    }
}

pub trait SportSpec: Sync {
    fn sport(&self) -> Sport;

    /// Node id used for a team abbreviation.
    fn team_id(&self, abbreviation: &str) -> String {
        s!(abbreviation)
    }

    fn team_node(&self, side: &Side) -> Attrs;

    fn team_edge(&self, m: &Matchup) -> Attrs;

    /// `attrs` is `None` when the per-player lookup failed.
    fn player_node(&self, player: &PlayerRef, attrs: Option<&PlayerAttributes>) -> Attrs;

    fn player_edge(&self, m: &Matchup, away: &PlayerRef, home: &PlayerRef) -> Attrs;
}

static MLB: pro::ProLeague = pro::ProLeague::MLB;
static NBA: pro::ProLeague = pro::ProLeague::NBA;
static NFL: pro::ProLeague = pro::ProLeague::NFL;
static NHL: pro::ProLeague = pro::ProLeague::NHL;
static NCAAB: college::College = college::College::NCAAB;
static NCAAF: college::College = college::College::NCAAF;

pub fn spec_for(sport: Sport) -> &'static dyn SportSpec {
    match sport {
        Sport::Mlb => &MLB,
        Sport::Nba => &NBA,
        Sport::Nfl => &NFL,
        Sport::Nhl => &NHL,
        Sport::Ncaab => &NCAAB,
        Sport::Ncaaf => &NCAAF,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(abbr: &str, conf: Option<&str>) -> TeamRecord {
        TeamRecord { abbreviation: s!(abbr), name: format!("{abbr} name"), conference: conf.map(str::to_owned) }
    }

    fn game(location: Location, opp: &str, result: GameResult) -> GameRecord {
        GameRecord {
            location,
            opponent_id: s!(opp),
            opponent_name: None,
            opponent_conference: Some(s!("SEC")),
            result,
            game_number: 3,
            season_type: None,
            rank: Some(4),
            opponent_rank: None,
            rosters: None,
        }
    }

    #[test]
    fn away_team_is_source_side() {
        let spec = spec_for(Sport::Nfl);
        let m = Matchup::resolve(spec, &team("KC", None), &game(Location::Away, "CLE", GameResult::Win), 2021);
        assert_eq!(m.away.id, "KC");
        assert_eq!(m.home.id, "CLE");
        assert_eq!((m.away_win, m.home_win), (1, 0));
        assert_eq!(m.team().id, "KC");
        assert_eq!(m.opponent().label, "CLE");
    }

    #[test]
    fn home_loss_credits_the_visitor() {
        let spec = spec_for(Sport::Nfl);
        let m = Matchup::resolve(spec, &team("KC", None), &game(Location::Home, "LV", GameResult::Loss), 2021);
        assert_eq!((m.away.id.as_str(), m.home.id.as_str()), ("LV", "KC"));
        assert_eq!((m.away_win, m.home_win), (1, 0));
    }

    #[test]
    fn neutral_site_counts_as_home() {
        let spec = spec_for(Sport::Nfl);
        let m = Matchup::resolve(spec, &team("KC", None), &game(Location::Neutral, "SF", GameResult::Win), 2019);
        assert_eq!(m.home.id, "KC");
        assert_eq!((m.away_win, m.home_win), (0, 1));
    }

    #[test]
    fn conference_match_ignores_case() {
        let spec = spec_for(Sport::Ncaaf);
        let same = Matchup::resolve(spec, &team("ALA", Some("sec")), &game(Location::Home, "LSU", GameResult::Win), 2019);
        assert_eq!(same.conference_game(), 1);
        assert_eq!(same.home.rank, Some(4));
        assert_eq!(same.away.rank, None);

        let other = Matchup::resolve(spec, &team("OSU", Some("Big Ten")), &game(Location::Home, "LSU", GameResult::Win), 2019);
        assert_eq!(other.conference_game(), 0);

        let unknown = Matchup::resolve(spec, &team("ND", None), &game(Location::Home, "LSU", GameResult::Win), 2019);
        assert_eq!(unknown.conference_game(), 0);
    }

    #[test]
    fn ncaab_lowercases_team_ids() {
        let spec = spec_for(Sport::Ncaab);
        let m = Matchup::resolve(spec, &team("DUKE", Some("ACC")), &game(Location::Away, "UNC", GameResult::Loss), 2019);
        assert_eq!((m.away.id.as_str(), m.home.id.as_str()), ("duke", "unc"));
    }
}
