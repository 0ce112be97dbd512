//! Title annotation

use super::types::{fallback, AnnotatedValue, Annotation, RawField};

/// Titles shorter than this many Unicode scalar values are flagged for review
pub const MIN_TITLE_LENGTH: usize = 5;

/// Annotate a track title
///
/// **Rules (first match wins):**
/// 1. Missing or empty title: error
/// 2. Fewer than [`MIN_TITLE_LENGTH`] characters: warning
pub fn annotate_title(title: &RawField<String>) -> AnnotatedValue {
    let mut annotations = Vec::new();

    match title.normalized.as_deref() {
        None | Some("") => annotations.push(Annotation::error("Title is empty")),
        Some(normalized) if normalized.chars().count() < MIN_TITLE_LENGTH => {
            annotations.push(Annotation::warn("Title is too short"))
        }
        Some(_) => {}
    }

    let value = fallback([title.normalized.as_deref(), title.original.as_deref()]);
    AnnotatedValue::new(value, annotations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::Severity;

    #[test]
    fn test_empty_title_falls_back_to_original() {
        let field = RawField::new(Some("x".to_string()), Some(String::new()));
        let result = annotate_title(&field);

        assert_eq!(result.value, "x");
        assert_eq!(result.annotations, vec![Annotation::error("Title is empty")]);
    }

    #[test]
    fn test_short_title_warns() {
        let result = annotate_title(&RawField::normalized("Hi".to_string()));

        assert_eq!(result.value, "Hi");
        assert_eq!(result.annotations, vec![Annotation::warn("Title is too short")]);
    }

    #[test]
    fn test_valid_title_has_no_annotations() {
        let result = annotate_title(&RawField::normalized("Valid Title".to_string()));

        assert_eq!(result.value, "Valid Title");
        assert!(result.is_valid());
    }

    #[test]
    fn test_boundary_length_is_accepted() {
        assert!(annotate_title(&RawField::normalized("Gita!".to_string())).is_valid());
        assert_eq!(
            annotate_title(&RawField::normalized("Gita".to_string())).annotations[0].severity,
            Severity::Warn
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 4 characters, 8 bytes
        let result = annotate_title(&RawField::normalized("Кришна".chars().take(4).collect()));
        assert_eq!(result.annotations, vec![Annotation::warn("Title is too short")]);
    }

    #[test]
    fn test_nothing_usable_shows_placeholder() {
        let result = annotate_title(&RawField::default());
        assert_eq!(result.value, "Empty");
        assert_eq!(result.annotations, vec![Annotation::error("Title is empty")]);

        let result = annotate_title(&RawField::original_only(""));
        assert_eq!(result.value, "Empty");
    }
}
