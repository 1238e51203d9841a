// tests/common/mod.rs
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use sportgraph::source::{GameRecord, PlayerAttributes, Rosters, TeamRecord};
use sportgraph::{MemorySource, RecordSource, SourceError, Sport};

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/seasons.json")
}

pub fn fixture() -> MemorySource {
    MemorySource::from_path(&fixture_path()).unwrap()
}

/// Wraps a source and counts every call. `fail_schedules` turns schedule
/// fetches into faults; `delay` slows down `teams` so builds overlap.
pub struct Counting<S> {
    pub inner: S,
    pub teams: AtomicUsize,
    pub schedules: AtomicUsize,
    pub boxscores: AtomicUsize,
    pub players: AtomicUsize,
    pub fail_schedules: AtomicBool,
    pub delay: Option<Duration>,
}

impl<S: RecordSource> Counting<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            teams: AtomicUsize::new(0),
            schedules: AtomicUsize::new(0),
            boxscores: AtomicUsize::new(0),
            players: AtomicUsize::new(0),
            fail_schedules: AtomicBool::new(false),
            delay: None,
        }
    }

    pub fn total(&self) -> usize {
        self.teams.load(Ordering::SeqCst)
            + self.schedules.load(Ordering::SeqCst)
            + self.boxscores.load(Ordering::SeqCst)
            + self.players.load(Ordering::SeqCst)
    }
}

impl<S: RecordSource> RecordSource for Counting<S> {
    fn teams(&self, sport: Sport, year: i32) -> Result<Vec<TeamRecord>, SourceError> {
        self.teams.fetch_add(1, Ordering::SeqCst);
        if let Some(d) = self.delay {
            thread::sleep(d);
        }
        self.inner.teams(sport, year)
    }

    fn schedule(&self, sport: Sport, team: &TeamRecord, year: i32) -> Result<Vec<GameRecord>, SourceError> {
        self.schedules.fetch_add(1, Ordering::SeqCst);
        if self.fail_schedules.load(Ordering::SeqCst) {
            return Err(SourceError::Unavailable(format!("schedule for {}", team.abbreviation)));
        }
        self.inner.schedule(sport, team, year)
    }

    fn boxscore(&self, sport: Sport, year: i32, game: &GameRecord) -> Result<Rosters, SourceError> {
        self.boxscores.fetch_add(1, Ordering::SeqCst);
        self.inner.boxscore(sport, year, game)
    }

    fn player_attributes(&self, sport: Sport, player_id: &str) -> Result<PlayerAttributes, SourceError> {
        self.players.fetch_add(1, Ordering::SeqCst);
        self.inner.player_attributes(sport, player_id)
    }
}

/// One parsed `node[` / `edge[` block: kind plus raw `key value` pairs.
#[derive(Debug)]
pub struct Block {
    pub kind: String,
    pub attrs: Vec<(String, String)>,
}

impl Block {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }
}

/// Minimal reader for the emitted dialect. Values keep their quotes stripped.
pub fn parse_gml(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current: Option<Block> = None;
    for line in text.lines() {
        let trimmed = line.trim();
        match trimmed {
            "node[" | "edge[" => {
                current = Some(Block { kind: trimmed.trim_end_matches('[').to_string(), attrs: Vec::new() })
            }
            "]" => {
                if let Some(b) = current.take() {
                    blocks.push(b);
                }
            }
            _ => {
                if let Some(b) = current.as_mut() {
                    if let Some((k, v)) = trimmed.split_once(' ') {
                        b.attrs.push((k.to_string(), v.trim_matches('"').to_string()));
                    }
                }
            }
        }
    }
    blocks
}

pub fn nodes(blocks: &[Block]) -> Vec<&Block> {
    blocks.iter().filter(|b| b.kind == "node").collect()
}

pub fn edges(blocks: &[Block]) -> Vec<&Block> {
    blocks.iter().filter(|b| b.kind == "edge").collect()
}
