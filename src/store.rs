// src/store.rs
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::envelope::Envelope;
use crate::error::{Error, Result};
use crate::gml::{self, GmlOptions};
use crate::model::Graph;
use crate::sport::{Level, Sport, YearRange};

/// `(year, level)` with the level ASCII-lowercased, so `Team` and `team` share an entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub year: i32,
    pub level: String,
}

impl CacheKey {
    pub fn new(year: i32, level: &str) -> Self {
        Self { year, level: level.to_ascii_lowercase() }
    }
}

/// Cached outcome of one key. A refused level is rendered per request so the
/// diagnostic names the spelling that caller sent.
#[derive(Clone, Debug)]
enum Entry {
    Answered(Envelope),
    LevelRefused,
}

impl Entry {
    fn answer(&self, level: &str) -> Envelope {
        match self {
            Entry::Answered(env) => env.clone(),
            Entry::LevelRefused => level_refusal(level),
        }
    }
}

fn level_refusal(level: &str) -> Envelope {
    Envelope::bad_request(Error::InvalidLevel(s!(level)).to_string())
}

/// Memoized envelopes of one sport. Entries never expire.
///
/// Each key owns a build lock: concurrent misses on one key run the builder
/// once and the rest read its result. A builder that fails stores nothing.
#[derive(Default)]
pub struct ResponseCache {
    entries: Mutex<HashMap<CacheKey, Entry>>,
    building: Mutex<HashMap<CacheKey, Arc<Mutex<()>>>>,
}

impl ResponseCache {
    pub fn new() -> Self { Self::default() }

    pub fn get(&self, year: i32, level: &str) -> Option<Envelope> {
        self.lookup(&CacheKey::new(year, level)).map(|entry| entry.answer(level))
    }

    fn lookup(&self, key: &CacheKey) -> Option<Entry> {
        self.entries.lock().get(key).cloned()
    }

    pub fn len(&self) -> usize { self.entries.lock().len() }
    pub fn is_empty(&self) -> bool { self.entries.lock().is_empty() }

    /// Answer `(year, level)`, building on a miss.
    ///
    /// - `year` outside `range` → 400, cache untouched.
    /// - Hit → stored envelope.
    /// - Unrecognized level, or a build with no nodes/edges → 400, cached.
    /// - Build with content → 200 + GML, cached.
    /// - Build error → propagated, nothing cached.
    pub fn get_or_build<F>(
        &self,
        year: i32,
        level: &str,
        range: YearRange,
        opts: &GmlOptions,
        build: F,
    ) -> Result<Envelope>
    where
        F: FnOnce(Level) -> Result<Option<Graph>>,
    {
        if let Err(e) = range.check(year) {
            logd!("Rejected year {year}: outside {}..={}", range.min, range.max);
            return rejection(e);
        }

        let key = CacheKey::new(year, level);
        if let Some(hit) = self.lookup(&key) {
            logd!("Cache hit for {} {}", key.year, key.level);
            return Ok(hit.answer(level));
        }

        logd!("Cache miss for {} {}", key.year, key.level);
        let gate = self.building.lock().entry(key.clone()).or_default().clone();
        let _guard = gate.lock();

        // Another caller may have finished the build while we waited.
        if let Some(hit) = self.lookup(&key) {
            return Ok(hit.answer(level));
        }

        let entry = match Level::parse(level) {
            None => Entry::LevelRefused,
            Some(lvl) => match build(lvl)? {
                Some(graph) => {
                    logf!("Built {} {}: {} nodes, {} edges", key.year, key.level, graph.nodes().len(), graph.edges().len());
                    Entry::Answered(Envelope::ok(gml::encode_with(graph.nodes(), graph.edges(), opts)))
                }
                None => {
                    logf!("Empty graph for {} {}", key.year, key.level);
                    Entry::LevelRefused
                }
            },
        };

        let envelope = entry.answer(level);
        self.entries.lock().insert(key, entry);
        Ok(envelope)
    }
}

fn rejection(e: Error) -> Result<Envelope> {
    match Envelope::from_rejection(&e) {
        Some(env) => Ok(env),
        None => Err(e),
    }
}

/// One response cache per sport.
pub struct Caches([ResponseCache; Sport::ALL.len()]);

impl Default for Caches {
    fn default() -> Self {
        Self(std::array::from_fn(|_| ResponseCache::new()))
    }
}

impl Caches {
    pub fn new() -> Self { Self::default() }

    pub fn for_sport(&self, sport: Sport) -> &ResponseCache {
        &self.0[sport.index()]
    }
}
