// src/source/memory.rs
//
// In-process record source backed by plain maps. Loads from a JSON document
// shaped like:
//
// {
//   "nfl": {
//     "seasons": { "2021": { "teams": [..], "schedules": { "KC": [..] } } },
//     "players": { "MahoPa00": { "position": "QB" } }
//   }
// }

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SourceError};
use crate::sport::Sport;

use super::{GameRecord, PlayerAttributes, RecordSource, TeamRecord};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SeasonRecords {
    #[serde(default)]
    pub teams: Vec<TeamRecord>,
    /// team abbreviation → schedule
    #[serde(default)]
    pub schedules: HashMap<String, Vec<GameRecord>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SportRecords {
    #[serde(default)]
    pub seasons: BTreeMap<i32, SeasonRecords>,
    #[serde(default)]
    pub players: HashMap<String, PlayerAttributes>,
}

#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    sports: HashMap<Sport, SportRecords>,
}

impl MemorySource {
    pub fn new() -> Self { Self::default() }

    pub fn from_json(text: &str) -> Result<Self> {
        let sports: HashMap<Sport, SportRecords> = serde_json::from_str(text)?;
        Ok(Self { sports })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let source = Self::from_json(&text)?;
        logd!("Loaded records for {} sports from {}", source.sports.len(), path.display());
        Ok(source)
    }

    /// Register a team and its schedule. Teams keep insertion order.
    pub fn with_team(mut self, sport: Sport, year: i32, team: TeamRecord, games: Vec<GameRecord>) -> Self {
        let season = self.sports.entry(sport).or_default().seasons.entry(year).or_default();
        season.schedules.insert(team.abbreviation.clone(), games);
        season.teams.push(team);
        self
    }

    pub fn with_player(mut self, sport: Sport, player_id: &str, attrs: PlayerAttributes) -> Self {
        self.sports.entry(sport).or_default().players.insert(s!(player_id), attrs);
        self
    }

    fn season(&self, sport: Sport, year: i32) -> Option<&SeasonRecords> {
        self.sports.get(&sport)?.seasons.get(&year)
    }
}

impl RecordSource for MemorySource {
    /// Unknown sport/year → empty season.
    fn teams(&self, sport: Sport, year: i32) -> std::result::Result<Vec<TeamRecord>, SourceError> {
        Ok(self.season(sport, year).map(|s| s.teams.clone()).unwrap_or_default())
    }

    fn schedule(
        &self,
        sport: Sport,
        team: &TeamRecord,
        year: i32,
    ) -> std::result::Result<Vec<GameRecord>, SourceError> {
        Ok(self
            .season(sport, year)
            .and_then(|s| s.schedules.get(&team.abbreviation))
            .cloned()
            .unwrap_or_default())
    }

    fn player_attributes(
        &self,
        sport: Sport,
        player_id: &str,
    ) -> std::result::Result<PlayerAttributes, SourceError> {
        self.sports
            .get(&sport)
            .and_then(|r| r.players.get(player_id))
            .cloned()
            .ok_or_else(|| SourceError::NotFound(format!("{sport} player {player_id}")))
    }
}
