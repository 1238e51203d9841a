// src/runner.rs
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::RunnerOptions;
use crate::envelope::Envelope;
use crate::error::Result;
use crate::graph;
use crate::model::Graph;
use crate::progress::Progress;
use crate::source::RecordSource;
use crate::sport::{Level, SeasonSpan, Sport, YearRange};
use crate::store::Caches;

/// Top-level entry: validate, consult the sport's cache, build on a miss.
///
/// A runner is `Sync` whenever its source is, so one instance can answer
/// requests from several threads; the caches make sure each `(year, level)`
/// of a sport is built at most once.
pub struct Runner<S: RecordSource> {
    source: S,
    caches: Arc<Caches>,
    options: RunnerOptions,
}

impl<S: RecordSource> Runner<S> {
    pub fn new(source: S) -> Self {
        Self::with_options(source, RunnerOptions::default())
    }

    pub fn with_options(source: S, options: RunnerOptions) -> Self {
        Self { source, caches: Arc::new(Caches::new()), options }
    }

    /// Share caches with another runner (e.g. a second source view over the same records).
    pub fn with_caches(mut self, caches: Arc<Caches>) -> Self {
        self.caches = caches;
        self
    }

    pub fn caches(&self) -> &Arc<Caches> { &self.caches }
    pub fn source(&self) -> &S { &self.source }
    pub fn options(&self) -> &RunnerOptions { &self.options }

    pub fn year_range(&self, sport: Sport) -> YearRange {
        sport.year_range(self.options.current_year())
    }

    /// `Ok` always carries a 200 or 400 envelope; `Err` means the record source failed.
    pub fn request(&self, sport: Sport, year: i32, level: &str) -> Result<Envelope> {
        self.request_with_progress(sport, year, level, None)
    }

    pub fn request_with_progress(
        &self,
        sport: Sport,
        year: i32,
        level: &str,
        progress: Option<&mut dyn Progress>,
    ) -> Result<Envelope> {
        let range = self.year_range(sport);
        self.caches
            .for_sport(sport)
            .get_or_build(year, level, range, &self.options.gml, |lvl| {
                logf!("Building {sport} {year} {} graph", lvl.as_str());
                graph::build(&self.source, sport, year, lvl, progress)
            })
    }

    /// One envelope per season of `span`, in year order. Stops at the first source fault.
    pub fn request_span(&self, sport: Sport, span: SeasonSpan, level: &str) -> Result<BTreeMap<i32, Envelope>> {
        span.years()
            .map(|year| self.request(sport, year, level).map(|env| (year, env)))
            .collect()
    }

    /// Build without validation or caching.
    pub fn graph(&self, sport: Sport, year: i32, level: Level) -> Result<Option<Graph>> {
        graph::build(&self.source, sport, year, level, None)
    }
}
