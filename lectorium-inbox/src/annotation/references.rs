//! References annotation
//!
//! A normalized reference is `[book_id, ...numbers]`, e.g. `["BG", 2, 13]`,
//! displayed as `"<short book name> 2.13"`.

use super::types::{AnnotatedValue, Annotation, RawField, EMPTY_PLACEHOLDER};
use crate::services::{NameVariant, SourcesService, DISPLAY_LOCALE};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// One element of a normalized reference: a book id or a number part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReferencePart {
    Number(f64),
    Text(String),
}

impl From<&str> for ReferencePart {
    fn from(value: &str) -> Self {
        ReferencePart::Text(value.to_string())
    }
}

impl fmt::Display for ReferencePart {
    /// Whole numbers render without a fractional part (`3`, not `3.0`)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferencePart::Text(text) => f.write_str(text),
            ReferencePart::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            ReferencePart::Number(n) => write!(f, "{}", n),
        }
    }
}

pub type RawReference = RawField<Vec<ReferencePart>>;

/// Annotate the references list of a track
///
/// **Algorithm:**
/// 1. No references at all: a single placeholder entry with a warning
/// 2. Otherwise one entry per reference, in input order
///
/// Lookups run one at a time: a reference is only resolved after the previous
/// one has produced its result.
pub async fn annotate_references<S>(
    sources: &S,
    references: Option<&[RawReference]>,
) -> Vec<AnnotatedValue>
where
    S: SourcesService + ?Sized,
{
    let references = match references {
        Some(references) if !references.is_empty() => references,
        _ => {
            return vec![AnnotatedValue::new(
                EMPTY_PLACEHOLDER,
                vec![Annotation::warn("No references")],
            )]
        }
    };

    let mut result = Vec::with_capacity(references.len());
    for reference in references {
        result.push(annotate_reference(sources, reference).await);
    }
    result
}

async fn annotate_reference<S>(sources: &S, reference: &RawReference) -> AnnotatedValue
where
    S: SourcesService + ?Sized,
{
    let mut annotated = AnnotatedValue::new(reference.original_or_placeholder(), Vec::new());

    let Some(parts) = reference.normalized.as_deref() else {
        annotated
            .annotations
            .push(Annotation::error("References is not found"));
        return annotated;
    };

    let Some((book, numbers)) = parts.split_first() else {
        debug!("Reference has no book id");
        annotated.annotations.push(not_found_by_id(""));
        return annotated;
    };

    let book_text = book.to_string();
    let book_id = book_text.to_lowercase();
    let numbers = numbers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(".");

    match sources.get_one(&book_id).await {
        Ok(record) => {
            // Nameless records show the book id as given; no trailing space without numbers
            let name = record
                .name(DISPLAY_LOCALE, NameVariant::Short)
                .filter(|name| !name.is_empty())
                .unwrap_or(book_text.as_str());
            annotated.value = if numbers.is_empty() {
                name.to_string()
            } else {
                format!("{} {}", name, numbers)
            };
        }
        Err(e) => {
            debug!(id = %book_id, error = %e, "Source lookup failed");
            annotated.annotations.push(not_found_by_id(&book_text));
        }
    }

    annotated
}

fn not_found_by_id(id: &str) -> Annotation {
    Annotation::error(format!("Reference is not found by id \"{}\"", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{Dictionary, LocalizedName, Source};
    use std::collections::HashMap;

    fn source(id: &str, short: &str) -> Source {
        Source {
            id: id.to_string(),
            names: HashMap::from([(
                "en".to_string(),
                LocalizedName {
                    full: None,
                    short: Some(short.to_string()),
                },
            )]),
        }
    }

    fn dictionary() -> Dictionary {
        let mut dictionary = Dictionary::new();
        dictionary.insert_source(source("jhn", "John"));
        dictionary.insert_source(source("bg", "BG"));
        dictionary
    }

    fn reference(parts: Vec<ReferencePart>) -> RawReference {
        RawField::normalized(parts)
    }

    #[tokio::test]
    async fn test_empty_list_yields_placeholder() {
        let expected = vec![AnnotatedValue::new("Empty", vec![Annotation::warn("No references")])];

        let none: Vec<RawReference> = Vec::new();

        assert_eq!(annotate_references(&dictionary(), Some(none.as_slice())).await, expected);
        assert_eq!(annotate_references(&dictionary(), None).await, expected);
    }

    #[tokio::test]
    async fn test_resolves_book_and_numbers() {
        let refs = vec![reference(vec![
            "jhn".into(),
            ReferencePart::Number(3.0),
            ReferencePart::Number(16.0),
        ])];
        let result = annotate_references(&dictionary(), Some(refs.as_slice())).await;

        assert_eq!(result, vec![AnnotatedValue::new("John 3.16", vec![])]);
    }

    #[tokio::test]
    async fn test_book_id_is_lowercased_for_lookup_only() {
        let refs = vec![
            reference(vec!["BG".into(), ReferencePart::Number(2.0), ReferencePart::Number(13.0)]),
            RawField::new(
                Some("SB 1.1.1".to_string()),
                Some(vec!["SB".into(), ReferencePart::Number(1.0)]),
            ),
        ];
        let result = annotate_references(&dictionary(), Some(refs.as_slice())).await;

        assert_eq!(result[0], AnnotatedValue::new("BG 2.13", vec![]));
        assert_eq!(result[1].value, "SB 1.1.1");
        assert_eq!(
            result[1].annotations,
            vec![Annotation::error("Reference is not found by id \"SB\"")]
        );
    }

    #[tokio::test]
    async fn test_unparsed_reference_keeps_verbatim_label() {
        let refs = vec![RawField::original_only("Gita ch. 2")];
        let result = annotate_references(&dictionary(), Some(refs.as_slice())).await;

        assert_eq!(result[0].value, "Gita ch. 2");
        assert_eq!(
            result[0].annotations,
            vec![Annotation::error("References is not found")]
        );
    }

    #[tokio::test]
    async fn test_reference_without_book_is_not_found() {
        let refs = vec![reference(vec![])];
        let result = annotate_references(&dictionary(), Some(refs.as_slice())).await;

        assert_eq!(result[0].value, "Empty");
        assert_eq!(
            result[0].annotations,
            vec![Annotation::error("Reference is not found by id \"\"")]
        );
    }

    #[tokio::test]
    async fn test_book_without_numbers_shows_name_only() {
        let refs = vec![reference(vec!["bg".into()])];
        let result = annotate_references(&dictionary(), Some(refs.as_slice())).await;

        assert_eq!(result, vec![AnnotatedValue::new("BG", vec![])]);
    }

    #[tokio::test]
    async fn test_source_without_short_name_shows_book_id() {
        let mut dictionary = dictionary();
        dictionary.insert_source(Source {
            id: "cc".to_string(),
            names: HashMap::new(),
        });

        let refs = vec![RawField::new(
            Some("CC Adi 1.1".to_string()),
            Some(vec!["CC".into(), ReferencePart::Number(1.0), ReferencePart::Number(1.0)]),
        )];
        let result = annotate_references(&dictionary, Some(refs.as_slice())).await;

        assert_eq!(result, vec![AnnotatedValue::new("CC 1.1", vec![])]);
    }

    #[test]
    fn test_number_rendering() {
        assert_eq!(ReferencePart::Number(3.0).to_string(), "3");
        assert_eq!(ReferencePart::Number(2.5).to_string(), "2.5");
        assert_eq!(ReferencePart::from("Bg").to_string(), "Bg");
    }

    #[test]
    fn test_deserializes_mixed_parts() {
        let parts: Vec<ReferencePart> = serde_json::from_str(r#"["bg", 2, 13]"#).unwrap();
        assert_eq!(parts, vec!["bg".into(), ReferencePart::Number(2.0), ReferencePart::Number(13.0)]);
    }
}
