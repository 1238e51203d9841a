// src/sport.rs
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::consts::*;
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Mlb,
    Nba,
    Ncaab,
    Ncaaf,
    Nfl,
    Nhl,
}

impl Sport {
    pub const ALL: [Sport; 6] = [Sport::Mlb, Sport::Nba, Sport::Ncaab, Sport::Ncaaf, Sport::Nfl, Sport::Nhl];

    pub fn as_str(self) -> &'static str {
        match self {
            Sport::Mlb => "mlb",
            Sport::Nba => "nba",
            Sport::Ncaab => "ncaab",
            Sport::Ncaaf => "ncaaf",
            Sport::Nfl => "nfl",
            Sport::Nhl => "nhl",
        }
    }

    /// Position in `Sport::ALL`.
    pub fn index(self) -> usize {
        match self {
            Sport::Mlb => 0,
            Sport::Nba => 1,
            Sport::Ncaab => 2,
            Sport::Ncaaf => 3,
            Sport::Nfl => 4,
            Sport::Nhl => 5,
        }
    }

    pub fn origin_year(self) -> i32 {
        match self {
            Sport::Mlb => MLB_ORIGIN_YEAR,
            Sport::Nba => NBA_ORIGIN_YEAR,
            Sport::Ncaab => NCAAB_ORIGIN_YEAR,
            Sport::Ncaaf => NCAAF_ORIGIN_YEAR,
            Sport::Nfl => NFL_ORIGIN_YEAR,
            Sport::Nhl => NHL_ORIGIN_YEAR,
        }
    }

    /// College seasons are only published once finished, so the running
    /// year is never requestable for them.
    pub fn finalized_retrospectively(self) -> bool {
        matches!(self, Sport::Ncaab | Sport::Ncaaf)
    }

    pub fn year_range(self, current_year: i32) -> YearRange {
        let max = if self.finalized_retrospectively() { current_year - 1 } else { current_year };
        YearRange { min: self.origin_year(), max }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sport {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Sport::ALL
            .into_iter()
            .find(|sport| sport.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownSport(s!(s)))
    }
}

/// Aggregation granularity of a graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    Team,
    Player,
}

impl Level {
    /// Case-insensitive `team` / `player`; anything else is unrecognized.
    pub fn parse(s: &str) -> Option<Level> {
        if s.eq_ignore_ascii_case("team") {
            Some(Level::Team)
        } else if s.eq_ignore_ascii_case("player") {
            Some(Level::Player)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Team => "team",
            Level::Player => "player",
        }
    }
}

/// Inclusive window of requestable seasons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    pub fn contains(&self, year: i32) -> bool {
        self.min <= year && year <= self.max
    }

    pub fn check(&self, year: i32) -> Result<()> {
        if self.contains(year) {
            Ok(())
        } else {
            Err(Error::InvalidYearRange { year, min: self.min, max: self.max })
        }
    }
}

/// Consecutive seasons requested together, e.g. `1998-2000`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeasonSpan {
    first: i32,
    last: i32,
}

impl SeasonSpan {
    pub fn single(year: i32) -> Self {
        Self { first: year, last: year }
    }

    /// Two distinct years joined by `-`, in either order.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || Error::InvalidSpan(s!(text));
        let (a, b) = text.split_once('-').ok_or_else(invalid)?;
        let a: i32 = a.trim().parse().map_err(|_| invalid())?;
        let b: i32 = b.trim().parse().map_err(|_| invalid())?;
        if a == b {
            return Err(invalid());
        }
        Ok(Self { first: a.min(b), last: a.max(b) })
    }

    pub fn first(&self) -> i32 { self.first }
    pub fn last(&self) -> i32 { self.last }

    pub fn years(&self) -> RangeInclusive<i32> {
        self.first..=self.last
    }
}
