//! lectorium-inbox library interface
//!
//! Annotation engine for reviewing freshly ingested track metadata:
//! - [`annotation`]: the five field annotators and their shared types
//! - [`services`]: lookup capabilities and the in-memory [`services::Dictionary`]
//! - [`inbox`]: per-track rows assembled from the field annotations

pub mod annotation;
pub mod inbox;
pub mod services;

pub use crate::annotation::{
    annotate_author, annotate_date, annotate_location, annotate_references, annotate_title,
    AnnotatedValue, Annotation, RawField, Severity,
};
pub use crate::inbox::{InboxAnnotator, InboxTrack, InboxTrackRow};
