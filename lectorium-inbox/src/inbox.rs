//! Inbox track rows
//!
//! An inbox track is a freshly ingested record awaiting review. Annotating it
//! runs the five field annotators and collects their results into one row
//! for the review table.

use crate::annotation::{
    annotate_author, annotate_date, annotate_location, annotate_references, annotate_title,
    AnnotatedValue, RawField, RawReference, Severity,
};
use crate::services::{AuthorsService, Dictionary, LocationsService, SourcesService};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Raw inbox record as exported by the ingest pipeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InboxTrack {
    pub id: String,
    #[serde(default)]
    pub title: RawField<String>,
    #[serde(default)]
    pub author: RawField<String>,
    #[serde(default)]
    pub location: RawField<String>,
    #[serde(default)]
    pub date: RawField<Vec<Option<i64>>>,
    #[serde(default)]
    pub references: Option<Vec<RawReference>>,
}

/// Annotated view of one inbox track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboxTrackRow {
    pub id: String,
    pub title: AnnotatedValue,
    pub author: AnnotatedValue,
    pub location: AnnotatedValue,
    pub date: AnnotatedValue,
    pub references: Vec<AnnotatedValue>,
}

impl InboxTrackRow {
    fn fields(&self) -> impl Iterator<Item = &AnnotatedValue> {
        [&self.title, &self.author, &self.location, &self.date]
            .into_iter()
            .chain(self.references.iter())
    }

    /// True when no field carries a publish-blocking annotation
    pub fn is_publishable(&self) -> bool {
        self.error_count() == 0
    }

    pub fn error_count(&self) -> usize {
        self.fields().map(|f| f.count(Severity::Error)).sum()
    }

    pub fn warning_count(&self) -> usize {
        self.fields().map(|f| f.count(Severity::Warn)).sum()
    }
}

/// Annotates inbox tracks against a set of lookup capabilities
#[derive(Clone, Copy)]
pub struct InboxAnnotator<'a> {
    authors: &'a dyn AuthorsService,
    locations: &'a dyn LocationsService,
    sources: &'a dyn SourcesService,
}

impl<'a> InboxAnnotator<'a> {
    pub fn new(
        authors: &'a dyn AuthorsService,
        locations: &'a dyn LocationsService,
        sources: &'a dyn SourcesService,
    ) -> Self {
        Self {
            authors,
            locations,
            sources,
        }
    }

    /// Serve all three capabilities from one dictionary
    pub fn from_dictionary(dictionary: &'a Dictionary) -> Self {
        Self::new(dictionary, dictionary, dictionary)
    }

    /// Annotate every field of one track
    ///
    /// The fields are independent, so they are annotated concurrently.
    pub async fn annotate_track(&self, track: &InboxTrack) -> InboxTrackRow {
        let (author, location, references) = tokio::join!(
            annotate_author(self.authors, &track.author),
            annotate_location(self.locations, &track.location),
            annotate_references(self.sources, track.references.as_deref()),
        );

        let row = InboxTrackRow {
            id: track.id.clone(),
            title: annotate_title(&track.title),
            author,
            location,
            date: annotate_date(&track.date),
            references,
        };

        debug!(
            track_id = %row.id,
            errors = row.error_count(),
            warnings = row.warning_count(),
            "Inbox track annotated"
        );

        row
    }

    /// Annotate many tracks; rows come back in input order
    pub async fn annotate_inbox(&self, tracks: &[InboxTrack]) -> Vec<InboxTrackRow> {
        join_all(tracks.iter().map(|track| self.annotate_track(track))).await
    }
}
