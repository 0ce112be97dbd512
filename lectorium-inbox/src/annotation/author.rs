//! Author annotation

use super::types::{fallback, AnnotatedValue, Annotation, RawField};
use crate::services::{AuthorsService, NameVariant, DISPLAY_LOCALE};
use tracing::debug;

/// Annotate an author id by resolving it to a display name
///
/// Issues exactly one lookup when a normalized id is present. Any lookup
/// failure becomes an error annotation naming the id; the display value then
/// falls back to the original text.
pub async fn annotate_author<S>(authors: &S, author: &RawField<String>) -> AnnotatedValue
where
    S: AuthorsService + ?Sized,
{
    let mut annotations = Vec::new();
    let mut name = None;

    match author.normalized.as_deref() {
        None | Some("") => annotations.push(Annotation::error("Author is not found")),
        Some(id) => match authors.get_one(id).await {
            Ok(record) => {
                name = record
                    .name(DISPLAY_LOCALE, NameVariant::Short)
                    .map(str::to_string);
            }
            Err(e) => {
                debug!(id, error = %e, "Author lookup failed");
                annotations.push(Annotation::error(format!(
                    "Author is not found by id \"{}\"",
                    id
                )));
            }
        },
    }

    let value = fallback([name.as_deref(), author.original.as_deref()]);
    AnnotatedValue::new(value, annotations)
}
