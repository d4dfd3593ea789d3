//! Error taxonomy.
//!
//! Structural problems (malformed times, invalid catalogs, bad requests)
//! are errors and are surfaced immediately. Search exhaustion is *not* an
//! error: it is reported as
//! [`ScheduleResponse::Unsatisfiable`](crate::planner::ScheduleResponse)
//! with a diagnostic payload.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors raised while building catalogs or preparing a search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// A time-of-day string is not `HH:MM` within a single day.
    #[error("malformed time of day: {0:?}")]
    MalformedTime(String),

    /// A day string is not a recognised weekday.
    #[error("malformed weekday: {0:?}")]
    MalformedDay(String),

    /// An interval does not satisfy `start < end`.
    #[error("malformed interval on {day}: {start} - {end}")]
    MalformedInterval {
        day: String,
        start: String,
        end: String,
    },

    /// The catalog failed structural validation.
    #[error("invalid catalog: {} problem(s), first: {}", .0.len(), first_message(.0))]
    InvalidCatalog(Vec<ValidationError>),

    /// A request names a requirement that is not in the catalog.
    #[error("unknown requirement: {0}")]
    UnknownRequirement(String),

    /// A selection names a section that is not in the catalog.
    #[error("unknown section {section_id} of requirement {requirement_id}")]
    UnknownSection {
        requirement_id: String,
        section_id: String,
    },

    /// A request names the same requirement twice.
    #[error("requirement requested more than once: {0}")]
    DuplicateRequirement(String),

    /// Filtering left a requirement without admissible sections.
    #[error("no admissible sections remain for requirement {requirement_id}")]
    EmptyCandidateSet { requirement_id: String },

    /// A conflict graph was queried for a section it was not built over.
    #[error("section {section_id} of requirement {requirement_id} is not in the conflict graph")]
    SectionNotInGraph {
        requirement_id: String,
        section_id: String,
    },
}

fn first_message(errors: &[ValidationError]) -> &str {
    errors.first().map(|e| e.message.as_str()).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_display_messages() {
        let e = ScheduleError::EmptyCandidateSet {
            requirement_id: "22CS101".into(),
        };
        assert_eq!(
            e.to_string(),
            "no admissible sections remain for requirement 22CS101"
        );

        let e = ScheduleError::MalformedTime("9am".into());
        assert!(e.to_string().contains("9am"));
    }

    #[test]
    fn test_invalid_catalog_display() {
        let e = ScheduleError::InvalidCatalog(vec![ValidationError::new(
            ValidationErrorKind::EmptyTimeSlots,
            "Section 'A1' of 'A' has no time slots",
        )]);
        let msg = e.to_string();
        assert!(msg.contains("1 problem(s)"));
        assert!(msg.contains("A1"));
    }
}
