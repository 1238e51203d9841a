// src/config/options.rs
use chrono::Datelike;

use crate::gml::GmlOptions;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunnerOptions {
    /// Pin the "current" year used for range checks. `None` reads the local clock.
    pub current_year: Option<i32>,
    pub gml: GmlOptions,
}

impl RunnerOptions {
    pub fn pinned(year: i32) -> Self {
        Self { current_year: Some(year), ..Self::default() }
    }

    pub fn current_year(&self) -> i32 {
        self.current_year.unwrap_or_else(|| chrono::Local::now().year())
    }
}
