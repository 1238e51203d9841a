// src/envelope.rs
use serde::{Deserialize, Serialize};

use crate::config::consts::{API_BAD_REQUEST, API_OK};
use crate::error::Error;

/// What a request hands back: a status code and either GML text or a diagnostic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub api_code: u16,
    pub result: String,
}

impl Envelope {
    pub fn ok(text: String) -> Self {
        Self { api_code: API_OK, result: text }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self { api_code: API_BAD_REQUEST, result: message.into() }
    }

    /// 400 envelope for a rejected request; `None` for faults that must propagate.
    pub fn from_rejection(err: &Error) -> Option<Self> {
        err.is_rejection().then(|| Self::bad_request(err.to_string()))
    }

    pub fn is_ok(&self) -> bool {
        self.api_code == API_OK
    }
}
