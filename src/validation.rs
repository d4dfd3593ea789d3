//! Catalog validation.
//!
//! Checks structural integrity of sections before a catalog is built.
//! Detects:
//! - Empty requirement or section IDs
//! - Duplicate section IDs within a requirement
//! - Sections without time slots
//!
//! Credits are per section; sections of one requirement may differ.
//!
//! Time values are not checked here: [`TimeInterval`](crate::models::TimeInterval)
//! cannot hold a malformed value, so parsing already rejected them.

use std::collections::HashSet;
use thiserror::Error;

use crate::models::Section;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A requirement or section ID is blank.
    EmptyId,
    /// Two sections of the same requirement share a section ID.
    DuplicateId,
    /// A section has no time slots.
    EmptyTimeSlots,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a list of sections.
///
/// Checks:
/// 1. Requirement and section IDs are non-blank
/// 2. No duplicate `(requirement, section)` pairs
/// 3. Every section has at least one time slot
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_sections(sections: &[Section]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen: HashSet<(&str, &str)> = HashSet::new();

    for section in sections {
        let req = section.requirement_id.as_str();
        let sec = section.section_id.as_str();

        if req.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Section '{sec}' has a blank requirement ID"),
            ));
        }
        if sec.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Requirement '{req}' has a section with a blank ID"),
            ));
        }

        if !seen.insert((req, sec)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate section ID '{sec}' in requirement '{req}'"),
            ));
        }

        if section.time_slots.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyTimeSlots,
                format!("Section '{sec}' of '{req}' has no time slots"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeInterval;

    fn slot(day: &str, start: &str, end: &str) -> TimeInterval {
        TimeInterval::parse(day, start, end).unwrap()
    }

    fn sample_sections() -> Vec<Section> {
        vec![
            Section::new("22CS101", "A1")
                .with_credits(4)
                .with_slot(slot("Monday", "09:00", "10:00")),
            Section::new("22CS101", "A2")
                .with_credits(4)
                .with_slot(slot("Tuesday", "09:00", "10:00")),
            Section::new("22MA201", "A1")
                .with_credits(3)
                .with_slot(slot("Monday", "11:00", "12:00")),
        ]
    }

    #[test]
    fn test_valid_sections() {
        assert!(validate_sections(&sample_sections()).is_ok());
    }

    #[test]
    fn test_same_section_id_in_different_requirements_is_fine() {
        let sections = sample_sections();
        assert_eq!(sections[0].section_id, sections[2].section_id);
        assert!(validate_sections(&sections).is_ok());
    }

    #[test]
    fn test_duplicate_section_id() {
        let mut sections = sample_sections();
        sections.push(
            Section::new("22CS101", "A1")
                .with_credits(4)
                .with_slot(slot("Friday", "09:00", "10:00")),
        );

        let errors = validate_sections(&sections).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_empty_time_slots() {
        let sections = vec![Section::new("22CS101", "A1")];
        let errors = validate_sections(&sections).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyTimeSlots));
    }

    #[test]
    fn test_blank_ids() {
        let sections = vec![Section::new(" ", "").with_slot(slot("Monday", "09:00", "10:00"))];
        let errors = validate_sections(&sections).unwrap_err();
        let blanks = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::EmptyId)
            .count();
        assert_eq!(blanks, 2);
    }

    #[test]
    fn test_mixed_credits_within_requirement() {
        let mut sections = sample_sections();
        sections[1].credits = 0;
        assert!(validate_sections(&sections).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let sections = vec![
            Section::new("A", "A1"),
            Section::new("A", "A1").with_slot(slot("Monday", "09:00", "10:00")),
        ];
        let errors = validate_sections(&sections).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
