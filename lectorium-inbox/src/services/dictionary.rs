//! In-memory reference dictionary
//!
//! Holds the authors, locations and sources replicated from the library
//! dictionary, keyed by id, and serves them through the lookup capabilities.
//!
//! # Document format
//! ```json
//! {
//!   "authors":   [{ "id": "acbsp", "names": { "en": { "full": "...", "short": "..." } } }],
//!   "locations": [{ "id": "mayapur", "names": { "en": "Mayapur" } }],
//!   "sources":   [{ "id": "bg", "names": { "en": { "full": "...", "short": "BG" } } }]
//! }
//! ```

use super::{
    Author, AuthorsService, Location, LocationsService, LookupError, RecordKind, Source,
    SourcesService,
};
use async_trait::async_trait;
use lectorium_common::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Default, Deserialize)]
struct DictionaryDocument {
    #[serde(default)]
    authors: Vec<Author>,
    #[serde(default)]
    locations: Vec<Location>,
    #[serde(default)]
    sources: Vec<Source>,
}

/// Read-only reference data store
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    authors: HashMap<String, Author>,
    locations: HashMap<String, Location>,
    sources: HashMap<String, Source>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a dictionary document
    ///
    /// Duplicate ids are tolerated: the last record wins.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: DictionaryDocument = serde_json::from_str(json)?;

        let mut dictionary = Self::new();
        for author in document.authors {
            dictionary.insert_author(author);
        }
        for location in document.locations {
            dictionary.insert_location(location);
        }
        for source in document.sources {
            dictionary.insert_source(source);
        }

        debug!(
            authors = dictionary.authors.len(),
            locations = dictionary.locations.len(),
            sources = dictionary.sources.len(),
            "Dictionary loaded"
        );

        Ok(dictionary)
    }

    /// Read and parse a dictionary document from disk
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn insert_author(&mut self, author: Author) {
        if let Some(previous) = self.authors.insert(author.id.clone(), author) {
            warn!(id = %previous.id, "Duplicate author id in dictionary, keeping last");
        }
    }

    pub fn insert_location(&mut self, location: Location) {
        if let Some(previous) = self.locations.insert(location.id.clone(), location) {
            warn!(id = %previous.id, "Duplicate location id in dictionary, keeping last");
        }
    }

    pub fn insert_source(&mut self, source: Source) {
        if let Some(previous) = self.sources.insert(source.id.clone(), source) {
            warn!(id = %previous.id, "Duplicate source id in dictionary, keeping last");
        }
    }

    pub fn len(&self) -> usize {
        self.authors.len() + self.locations.len() + self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn not_found(kind: RecordKind, id: &str) -> LookupError {
    LookupError::NotFound {
        kind,
        id: id.to_string(),
    }
}

#[async_trait]
impl AuthorsService for Dictionary {
    async fn get_one(&self, id: &str) -> std::result::Result<Author, LookupError> {
        self.authors
            .get(id)
            .cloned()
            .ok_or_else(|| not_found(RecordKind::Author, id))
    }
}

#[async_trait]
impl LocationsService for Dictionary {
    async fn get_one(&self, id: &str) -> std::result::Result<Location, LookupError> {
        self.locations
            .get(id)
            .cloned()
            .ok_or_else(|| not_found(RecordKind::Location, id))
    }
}

#[async_trait]
impl SourcesService for Dictionary {
    async fn get_one(&self, id: &str) -> std::result::Result<Source, LookupError> {
        self.sources
            .get(id)
            .cloned()
            .ok_or_else(|| not_found(RecordKind::Source, id))
    }
}
