//! Location annotation

use super::types::{fallback, AnnotatedValue, Annotation, RawField};
use crate::services::{LocationsService, DISPLAY_LOCALE};
use tracing::debug;

/// Annotate a location id by resolving it to a display name
///
/// A missing location is only a warning. A failed lookup is an error, and
/// unlike authors the id is not echoed in the message.
pub async fn annotate_location<S>(locations: &S, location: &RawField<String>) -> AnnotatedValue
where
    S: LocationsService + ?Sized,
{
    let mut annotations = Vec::new();
    let mut name = None;

    match location.normalized.as_deref() {
        None | Some("") => annotations.push(Annotation::warn("Location is empty")),
        Some(id) => match locations.get_one(id).await {
            Ok(record) => name = record.name(DISPLAY_LOCALE).map(str::to_string),
            Err(e) => {
                debug!(id, error = %e, "Location lookup failed");
                annotations.push(Annotation::error("Location is not found"));
            }
        },
    }

    let value = fallback([name.as_deref(), location.original.as_deref()]);
    AnnotatedValue::new(value, annotations)
}
