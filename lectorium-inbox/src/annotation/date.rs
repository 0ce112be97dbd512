//! Date annotation
//!
//! A normalized date is a `[year, month, day]` sequence whose components may
//! individually be missing.

use super::types::{fallback, AnnotatedValue, Annotation, RawField};
use chrono::NaiveDate;

/// Annotate a recording date
///
/// **Rules (first match wins):**
/// 1. No normalized date: warning
/// 2. Missing component or wrong length: warning
/// 3. Not a real calendar date: error
pub fn annotate_date(date: &RawField<Vec<Option<i64>>>) -> AnnotatedValue {
    let mut annotations = Vec::new();

    match date.normalized.as_deref() {
        None => annotations.push(Annotation::warn("Date is not found")),
        Some([Some(year), Some(month), Some(day)]) => {
            if calendar_date(*year, *month, *day).is_none() {
                annotations.push(Annotation::error("Date is invalid"));
            }
        }
        Some(_) => annotations.push(Annotation::warn("Date is incomplete")),
    }

    let joined = date.normalized.as_deref().map(join_components);
    let value = fallback([joined.as_deref(), date.original.as_deref()]);
    AnnotatedValue::new(value, annotations)
}

/// Build a date from `year-month-day`, rejecting anything out of range
fn calendar_date(year: i64, month: i64, day: i64) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(
        i32::try_from(year).ok()?,
        u32::try_from(month).ok()?,
        u32::try_from(day).ok()?,
    )
}

/// Join components with `-`; a missing component leaves an empty segment
fn join_components(components: &[Option<i64>]) -> String {
    components
        .iter()
        .map(|c| c.map(|n| n.to_string()).unwrap_or_default())
        .collect::<Vec<_>>()
        .join("-")
}
