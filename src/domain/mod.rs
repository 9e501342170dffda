// Domain layer: response records, the domain objects built from them, and the
// port they use to fetch related resources.

pub mod model;
pub mod ordering;
pub mod ports;
pub mod project;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

use crate::utils::error::{Result, ScratchError};
use chrono::{DateTime, Utc};

/// Base of the human-facing website, as opposed to the JSON API.
pub const SITE_URL: &str = "https://scratch.mit.edu";

pub(crate) fn parse_timestamp(field: &'static str, value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| ScratchError::Timestamp {
            field,
            value: value.to_string(),
            source,
        })
}
