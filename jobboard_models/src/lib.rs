use chrono::{DateTime, Utc};

use crate::macros::nutype_string;

pub mod analytics;
pub mod application;
pub mod auth;
pub mod job;
mod macros;
pub mod saved_job;
pub mod url;
pub mod user;

nutype_string!(SearchTerm(validate(len_char_max = 256)));

/// Half-open interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

