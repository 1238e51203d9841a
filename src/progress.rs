// src/progress.rs
/// Lightweight progress reporting for graph builds.
/// Hosts implement this to surface status while a season is walked team by team.
pub trait Progress {
    /// Called at the start with the number of teams in the season.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called once a team's schedule has been fully folded into the graph.
    fn item_done(&mut self, _team: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
