//! Per-run admissibility constraints.
//!
//! Constraints are applied as pre-filters by [`crate::filter`], never as
//! search-time checks, so the search only ever sees admissible sections.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::{Section, Weekday};

/// Exclusion rules for one search run.
///
/// An empty set (the default) admits every section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintSet {
    /// Days on which no chosen section may meet.
    #[serde(default)]
    pub excluded_days: BTreeSet<Weekday>,
    /// Per-requirement instructor whitelist. Requirements without an entry
    /// accept any instructor.
    #[serde(default)]
    pub allowed_instructors: BTreeMap<String, BTreeSet<String>>,
}

impl ConstraintSet {
    /// Creates an empty constraint set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Excludes a day.
    pub fn with_excluded_day(mut self, day: Weekday) -> Self {
        self.excluded_days.insert(day);
        self
    }

    /// Restricts a requirement to the given instructors.
    ///
    /// Repeated calls for the same requirement extend its whitelist.
    pub fn with_allowed_instructors<I, S>(
        mut self,
        requirement_id: impl Into<String>,
        instructors: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_instructors
            .entry(requirement_id.into())
            .or_default()
            .extend(instructors.into_iter().map(|s| {
                let s: String = s.into();
                s.trim().to_string()
            }));
        self
    }

    /// Whether no rule is set.
    pub fn is_empty(&self) -> bool {
        self.excluded_days.is_empty() && self.allowed_instructors.is_empty()
    }

    /// Whether `section` passes every rule.
    pub fn admits(&self, section: &Section) -> bool {
        if section.meets_on(&self.excluded_days) {
            return false;
        }
        match self.allowed_instructors.get(&section.requirement_id) {
            Some(allowed) => {
                let instructor = section.instructor.trim();
                allowed.iter().any(|a| a.trim() == instructor)
            }
            None => true,
        }
    }
}
