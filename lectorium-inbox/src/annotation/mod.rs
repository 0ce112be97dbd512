//! Field annotation engine
//!
//! Turns raw ingested fields into display values annotated with
//! severity-tagged notes for inbox review.
//!
//! # Annotators
//! - **title** / **date**: pure
//! - **author** / **location**: one lookup each
//! - **references**: one lookup per entry, strictly sequential
//!
//! No annotator ever fails: missing or malformed input and failed lookups are
//! reported as annotations next to a best-effort display value.

pub mod author;
pub mod date;
pub mod location;
pub mod references;
pub mod title;
pub mod types;

pub use author::annotate_author;
pub use date::annotate_date;
pub use location::annotate_location;
pub use references::{annotate_references, RawReference, ReferencePart};
pub use title::annotate_title;
pub use types::{AnnotatedValue, Annotation, RawField, Severity, EMPTY_PLACEHOLDER};
