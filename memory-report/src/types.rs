//! Core types for the memory report library
//!
//! A report is made of records: a block of narrative text paired with an
//! optional metadata mapping. Records are built once and never mutated.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// Timestamp type used for metadata instants
pub type Timestamp = DateTime<Utc>;

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// String-keyed metadata mapping, iterated in insertion order
pub type Metadata = Map<String, Value>;

/// Errors that can occur while rendering a report
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to serialize metadata: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A narrative paired with the metadata describing it
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Label printed in front of the metadata block
    label: String,
    /// Free-text narrative
    narrative: String,
    /// Metadata mapping (narrative-only records have none)
    metadata: Option<Metadata>,
}

impl Record {
    /// Create a record carrying a metadata mapping
    pub fn new(label: impl Into<String>, narrative: impl Into<String>, metadata: Metadata) -> Self {
        Self {
            label: label.into(),
            narrative: narrative.into(),
            metadata: Some(metadata),
        }
    }

    /// Create a record with narrative text only
    pub fn narrative_only(label: impl Into<String>, narrative: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            narrative: narrative.into(),
            metadata: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn narrative(&self) -> &str {
        &self.narrative
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    /// The `type` entry of the metadata, if it is a string
    pub fn kind(&self) -> Option<&str> {
        self.str_entry("type")
    }

    /// The `category` entry of the metadata, if it is a string
    pub fn category(&self) -> Option<&str> {
        self.str_entry("category")
    }

    /// Parse the `timestamp` entry as an RFC 3339 instant
    ///
    /// Returns `None` when the entry is missing or not a valid timestamp.
    pub fn timestamp(&self) -> Option<Timestamp> {
        let raw = self.str_entry("timestamp")?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    fn str_entry(&self, key: &str) -> Option<&str> {
        self.metadata.as_ref()?.get(key)?.as_str()
    }
}

/// Build a metadata mapping from key/value pairs, keeping their order
pub fn metadata<const N: usize>(entries: [(&str, Value); N]) -> Metadata {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value))
        .collect()
}
