//! Shared shapes for field annotation
//!
//! Every annotator reads a [`RawField`] and produces an [`AnnotatedValue`].

use serde::{Deserialize, Serialize};

/// Display placeholder used when no usable value exists
pub const EMPTY_PLACEHOLDER: &str = "Empty";

/// One ingested record field
///
/// `original` is the unparsed source text; `normalized` is present only when
/// the upstream pipeline managed to parse the field into `T`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawField<T> {
    pub original: Option<String>,
    pub normalized: Option<T>,
}

impl<T> Default for RawField<T> {
    fn default() -> Self {
        Self {
            original: None,
            normalized: None,
        }
    }
}

impl<T> RawField<T> {
    pub fn new(original: Option<String>, normalized: Option<T>) -> Self {
        Self {
            original,
            normalized,
        }
    }

    /// Field with only a parsed value
    pub fn normalized(value: T) -> Self {
        Self {
            original: None,
            normalized: Some(value),
        }
    }

    /// Field the pipeline could not parse
    pub fn original_only(original: impl Into<String>) -> Self {
        Self {
            original: Some(original.into()),
            normalized: None,
        }
    }

    /// `original` if non-empty, otherwise the placeholder
    pub(crate) fn original_or_placeholder(&self) -> String {
        fallback([self.original.as_deref()])
    }
}

/// Publish-blocking policy of an annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Reviewable but acceptable
    Warn,
    /// Must be corrected before publish
    Error,
}

/// Severity-tagged note about a field's validity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub text: String,
    pub severity: Severity,
}

impl Annotation {
    pub fn warn(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Warn,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Error,
        }
    }
}

/// Display string plus the annotations attached to it
///
/// `value` is never empty. No annotations means the field is fully valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedValue {
    pub value: String,
    pub annotations: Vec<Annotation>,
}

impl AnnotatedValue {
    pub fn new(value: impl Into<String>, annotations: Vec<Annotation>) -> Self {
        Self {
            value: value.into(),
            annotations,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.annotations.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.count(Severity::Error) > 0
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.annotations
            .iter()
            .filter(|a| a.severity == severity)
            .count()
    }
}

/// First non-empty candidate, else the placeholder
pub(crate) fn fallback<'a, I>(candidates: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .unwrap_or(EMPTY_PLACEHOLDER)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_skips_empty_strings() {
        assert_eq!(fallback([Some(""), None, Some("x")]), "x");
        assert_eq!(fallback([None, Some("")]), EMPTY_PLACEHOLDER);
        assert_eq!(fallback(std::iter::empty()), EMPTY_PLACEHOLDER);
    }

    #[test]
    fn test_raw_field_deserializes_missing_and_null() {
        let field: RawField<String> = serde_json::from_str(r#"{"normalized": null}"#).unwrap();
        assert_eq!(field, RawField::default());

        let field: RawField<String> = serde_json::from_str(r#"{"original": "Bhagavad"}"#).unwrap();
        assert_eq!(field.original.as_deref(), Some("Bhagavad"));
        assert!(field.normalized.is_none());
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let json = serde_json::to_string(&Annotation::warn("Title is too short")).unwrap();
        assert_eq!(json, r#"{"text":"Title is too short","severity":"warn"}"#);
    }

    #[test]
    fn test_counts_by_severity() {
        let value = AnnotatedValue::new(
            "x",
            vec![Annotation::warn("a"), Annotation::error("b"), Annotation::error("c")],
        );
        assert_eq!(value.count(Severity::Warn), 1);
        assert_eq!(value.count(Severity::Error), 2);
        assert!(value.has_errors());
        assert!(!value.is_valid());
    }
}
