//! Probe result data structures.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Existence verdict for one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Found")]
    Found,
    #[serde(rename = "Not Found")]
    NotFound,
}

impl Status {
    /// Label used in the cache file, exports and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Found => "Found",
            Status::NotFound => "Not Found",
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Status::Found)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of probing one platform for one username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileResult {
    /// Platform display name
    pub platform: String,

    /// Profile URL that was probed
    pub url: String,

    /// Found / Not Found
    pub status: Status,
}

impl ProfileResult {
    pub fn new(platform: impl Into<String>, url: impl Into<String>, status: Status) -> Self {
        Self {
            platform: platform.into(),
            url: url.into(),
            status,
        }
    }
}
