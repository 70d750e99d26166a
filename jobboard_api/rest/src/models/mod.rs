use schemars::JsonSchema;
use serde::Serialize;
use thiserror::Error;

pub mod analytics;
pub mod job;
pub mod saved_job;

/// A confirmation message returned by endpoints without a resource body
#[derive(Serialize, JsonSchema)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Treat empty query parameters like absent ones.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|x| !x.trim().is_empty())
}

/// A query parameter that could not be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid query parameter: {0}")]
pub struct InvalidQueryParam(pub &'static str);
