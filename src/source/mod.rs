// src/source/mod.rs
//! # Record sources
//!
//! The graph builders never fetch anything themselves. They walk whatever a
//! [`RecordSource`] hands back: the teams of a season, each team's schedule,
//! the two rosters of a game and, on first sight of a player, that player's
//! position/class.
//!
//! ## Call pattern during one build
//! ```text
//! teams(sport, year)                    once
//!   schedule(sport, team, year)         once per team
//!     boxscore(sport, year, game)       once per game (player level only)
//!       player_attributes(sport, id)    once per new player (player level only)
//! ```
//!
//! ## Failure policy
//! - Errors from `teams`, `schedule` and `boxscore` abort the whole build.
//! - Errors from `player_attributes` are swallowed by the builder and the
//!   attributes become `Value::Null`.
//!
//! Implementations must be `Send + Sync`: one runner may serve several
//! threads, and the response cache guarantees at most one build per key.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::SourceError;
use crate::model::Value;
use crate::sport::Sport;

pub mod memory;

pub use memory::MemorySource;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub abbreviation: String,
    pub name: String,
    #[serde(default)]
    pub conference: Option<String>,
}

/// Where the scheduled team played. Anything but `Away` counts as the home side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    Home,
    Away,
    Neutral,
}

/// Outcome from the scheduled team's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Win,
    Loss,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonType {
    Regular,
    Post,
}

impl SeasonType {
    pub fn as_str(self) -> &'static str {
        match self {
            SeasonType::Regular => "regular",
            SeasonType::Post => "post",
        }
    }
}

impl From<SeasonType> for Value {
    fn from(v: SeasonType) -> Self { Value::Str(s!(v.as_str())) }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRef {
    pub player_id: String,
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rosters {
    #[serde(default)]
    pub home: Vec<PlayerRef>,
    #[serde(default)]
    pub away: Vec<PlayerRef>,
}

/// One entry of a team's schedule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub location: Location,
    pub opponent_id: String,
    #[serde(default)]
    pub opponent_name: Option<String>,
    #[serde(default)]
    pub opponent_conference: Option<String>,
    pub result: GameResult,
    /// Game number or week, depending on the league.
    pub game_number: u32,
    #[serde(default)]
    pub season_type: Option<SeasonType>,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub opponent_rank: Option<u32>,
    #[serde(default)]
    pub rosters: Option<Rosters>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAttributes {
    #[serde(default)]
    pub position: Option<String>,
    /// Year in school (college sports only).
    #[serde(default)]
    pub class: Option<String>,
}

pub trait RecordSource: Send + Sync {
    fn teams(&self, sport: Sport, year: i32) -> Result<Vec<TeamRecord>, SourceError>;

    fn schedule(&self, sport: Sport, team: &TeamRecord, year: i32) -> Result<Vec<GameRecord>, SourceError>;

    /// Both rosters of `game`. Sources that embed rosters in the schedule
    /// can rely on the default.
    fn boxscore(&self, _sport: Sport, _year: i32, game: &GameRecord) -> Result<Rosters, SourceError> {
        Ok(game.rosters.clone().unwrap_or_default())
    }

    fn player_attributes(&self, sport: Sport, player_id: &str) -> Result<PlayerAttributes, SourceError>;
}

impl<T: RecordSource + ?Sized> RecordSource for Arc<T> {
    fn teams(&self, sport: Sport, year: i32) -> Result<Vec<TeamRecord>, SourceError> {
        (**self).teams(sport, year)
    }

    fn schedule(&self, sport: Sport, team: &TeamRecord, year: i32) -> Result<Vec<GameRecord>, SourceError> {
        (**self).schedule(sport, team, year)
    }

    fn boxscore(&self, sport: Sport, year: i32, game: &GameRecord) -> Result<Rosters, SourceError> {
        (**self).boxscore(sport, year, game)
    }

    fn player_attributes(&self, sport: Sport, player_id: &str) -> Result<PlayerAttributes, SourceError> {
        (**self).player_attributes(sport, player_id)
    }
}
