// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Faults raised by a record source. These are never turned into envelopes;
/// they abort the request that triggered them.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Record source unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed record: {0}")]
    Malformed(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("ERROR: Wrong input year. Must be between {min} and {max}")]
    InvalidYearRange { year: i32, min: i32, max: i32 },

    #[error("Error: Specified level must be T(t)eam or P(p)layer not {0}")]
    InvalidLevel(String),

    #[error("Invalid season span {0:?}: expected two distinct years such as 1998-2000")]
    InvalidSpan(String),

    #[error("Unknown sport: {0}")]
    UnknownSport(String),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Validation failures that are answered with a 400 envelope instead of
    /// being raised to the caller.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Error::InvalidYearRange { .. } | Error::InvalidLevel(_))
    }
}
