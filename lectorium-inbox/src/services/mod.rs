//! Reference-data lookup capabilities
//!
//! The annotators resolve ids to display names through three read-only
//! capabilities: authors, locations and sources. Each lookup either yields a
//! record or fails; the annotators treat every failure as "not found".
//!
//! [`Dictionary`] is the in-memory implementation of all three.

pub mod dictionary;

pub use dictionary::Dictionary;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Locale used for every display name shown to reviewers
pub const DISPLAY_LOCALE: &str = "en";

/// Which form of a localized name to return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameVariant {
    Full,
    Short,
}

/// Kind of reference record, for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Author,
    Location,
    Source,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Author => write!(f, "author"),
            RecordKind::Location => write!(f, "location"),
            RecordKind::Source => write!(f, "source"),
        }
    }
}

/// Lookup capability failure
#[derive(Debug, Error)]
pub enum LookupError {
    /// No record with the requested id
    #[error("{kind} not found: {id}")]
    NotFound { kind: RecordKind, id: String },

    /// Backing store could not answer
    #[error("Lookup unavailable: {0}")]
    Unavailable(String),
}

/// Full and short forms of a name in one locale
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedName {
    #[serde(default)]
    pub full: Option<String>,
    #[serde(default)]
    pub short: Option<String>,
}

impl LocalizedName {
    pub fn get(&self, variant: NameVariant) -> Option<&str> {
        match variant {
            NameVariant::Full => self.full.as_deref(),
            NameVariant::Short => self.short.as_deref(),
        }
    }
}

/// Author reference record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    /// Names keyed by locale
    #[serde(default)]
    pub names: HashMap<String, LocalizedName>,
}

impl Author {
    pub fn name(&self, locale: &str, variant: NameVariant) -> Option<&str> {
        self.names.get(locale).and_then(|n| n.get(variant))
    }
}

/// Location reference record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    /// Names keyed by locale
    #[serde(default)]
    pub names: HashMap<String, String>,
}

impl Location {
    pub fn name(&self, locale: &str) -> Option<&str> {
        self.names.get(locale).map(String::as_str)
    }
}

/// Source (book) reference record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub id: String,
    /// Names keyed by locale
    #[serde(default)]
    pub names: HashMap<String, LocalizedName>,
}

impl Source {
    pub fn name(&self, locale: &str, variant: NameVariant) -> Option<&str> {
        self.names.get(locale).and_then(|n| n.get(variant))
    }
}

/// Read-only author lookup
#[async_trait]
pub trait AuthorsService: Send + Sync {
    async fn get_one(&self, id: &str) -> Result<Author, LookupError>;
}

/// Read-only location lookup
#[async_trait]
pub trait LocationsService: Send + Sync {
    async fn get_one(&self, id: &str) -> Result<Location, LookupError>;
}

/// Read-only source lookup
#[async_trait]
pub trait SourcesService: Send + Sync {
    async fn get_one(&self, id: &str) -> Result<Source, LookupError>;
}
