// src/lib.rs
// #![allow(dead_code)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod logging;

#[doc(hidden)]
pub use log as __log;

pub mod config;
pub mod envelope;
pub mod error;
pub mod file;
pub mod gml;
pub mod graph;
pub mod model;
pub mod progress;
pub mod runner;
pub mod source;
pub mod specs;
pub mod sport;
pub mod store;

pub use config::RunnerOptions;
pub use envelope::Envelope;
pub use error::{Error, Result, SourceError};
pub use gml::{GmlOptions, NullPolicy};
pub use model::{Attrs, Graph, Value};
pub use runner::Runner;
pub use source::{MemorySource, RecordSource};
pub use sport::{Level, SeasonSpan, Sport, YearRange};
