//! Constraint filter.
//!
//! Narrows each requirement's sections to those admitted by a
//! [`ConstraintSet`] before search begins. Catalog order is preserved;
//! it is the search's tie-breaking order.
//!
//! A requirement left with no admissible section fails the run
//! immediately with [`ScheduleError::EmptyCandidateSet`] instead of
//! surfacing later as an empty search result.

use std::collections::HashSet;

use crate::error::{Result, ScheduleError};
use crate::models::{Catalog, ConstraintSet, RequirementIndex, SectionIndex};

/// Admissible sections of one requirement, in catalog order.
pub fn filter_candidates(
    catalog: &Catalog,
    requirement: RequirementIndex,
    constraints: &ConstraintSet,
) -> Result<Vec<SectionIndex>> {
    let req = catalog.requirement(requirement);
    let candidates: Vec<SectionIndex> = req
        .sections
        .iter()
        .copied()
        .filter(|&s| constraints.admits(catalog.section(s)))
        .collect();

    log::trace!(
        "Requirement {}: {} of {} sections admissible",
        req.id,
        candidates.len(),
        req.sections.len()
    );

    if candidates.is_empty() {
        return Err(ScheduleError::EmptyCandidateSet {
            requirement_id: req.id.clone(),
        });
    }
    Ok(candidates)
}

/// Filtered candidate lists for an ordered list of requirements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSets {
    requirements: Vec<RequirementIndex>,
    candidates: Vec<Vec<SectionIndex>>,
}

impl CandidateSets {
    /// Resolves `requirement_ids` against `catalog` and filters each one.
    ///
    /// # Errors
    /// - [`ScheduleError::UnknownRequirement`] for an ID not in the catalog
    /// - [`ScheduleError::DuplicateRequirement`] for an ID listed twice
    /// - [`ScheduleError::EmptyCandidateSet`] for the first requirement the
    ///   constraints empty out (request order)
    pub fn build<S: AsRef<str>>(
        catalog: &Catalog,
        requirement_ids: &[S],
        constraints: &ConstraintSet,
    ) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut requirements = Vec::with_capacity(requirement_ids.len());

        for id in requirement_ids {
            let id = id.as_ref();
            let idx = catalog
                .requirement_index(id)
                .ok_or_else(|| ScheduleError::UnknownRequirement(id.to_string()))?;
            if !seen.insert(idx) {
                return Err(ScheduleError::DuplicateRequirement(id.to_string()));
            }
            requirements.push(idx);
        }

        let candidates = requirements
            .iter()
            .map(|&r| filter_candidates(catalog, r, constraints))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            requirements,
            candidates,
        })
    }

    /// Requirements in request order.
    pub fn requirements(&self) -> &[RequirementIndex] {
        &self.requirements
    }

    /// Candidates of the `i`-th requested requirement.
    pub fn candidates(&self, i: usize) -> &[SectionIndex] {
        &self.candidates[i]
    }

    /// Number of requested requirements.
    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// Every candidate section across all requirements.
    pub fn all_sections(&self) -> impl Iterator<Item = SectionIndex> + '_ {
        self.candidates.iter().flatten().copied()
    }

    /// Size of the unpruned search space (product of candidate counts),
    /// saturating at `u128::MAX`.
    pub fn search_space(&self) -> u128 {
        self.candidates
            .iter()
            .fold(1u128, |acc, c| acc.saturating_mul(c.len() as u128))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Section, TimeInterval, Weekday};

    fn slot(day: &str, start: &str, end: &str) -> TimeInterval {
        TimeInterval::parse(day, start, end).unwrap()
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            Section::new("A", "A1")
                .with_instructor("Rao")
                .with_slot(slot("Monday", "09:00", "10:00")),
            Section::new("A", "A2")
                .with_instructor("Iyer")
                .with_slot(slot("Tuesday", "09:00", "10:00")),
            Section::new("A", "A3")
                .with_instructor("Rao")
                .with_slot(slot("Wednesday", "09:00", "10:00"))
                .with_slot(slot("Saturday", "09:00", "10:00")),
            Section::new("M", "M1")
                .with_instructor("Menon")
                .with_slot(slot("Monday", "11:00", "12:00")),
        ])
        .unwrap()
    }

    fn labels(catalog: &Catalog, sections: &[SectionIndex]) -> Vec<String> {
        sections
            .iter()
            .map(|&s| catalog.section(s).section_id.clone())
            .collect()
    }

    #[test]
    fn test_no_constraints_keeps_catalog_order() {
        let catalog = sample_catalog();
        let a = catalog.requirement_index("A").unwrap();
        let c = filter_candidates(&catalog, a, &ConstraintSet::new()).unwrap();
        assert_eq!(labels(&catalog, &c), ["A1", "A2", "A3"]);
    }

    #[test]
    fn test_excluded_day_drops_any_meeting_on_it() {
        let catalog = sample_catalog();
        let a = catalog.requirement_index("A").unwrap();
        let constraints = ConstraintSet::new().with_excluded_day(Weekday::Saturday);
        let c = filter_candidates(&catalog, a, &constraints).unwrap();
        assert_eq!(labels(&catalog, &c), ["A1", "A2"]);
    }

    #[test]
    fn test_allowed_instructors() {
        let catalog = sample_catalog();
        let a = catalog.requirement_index("A").unwrap();
        let constraints = ConstraintSet::new().with_allowed_instructors("A", ["Rao"]);
        let c = filter_candidates(&catalog, a, &constraints).unwrap();
        assert_eq!(labels(&catalog, &c), ["A1", "A3"]);
    }

    #[test]
    fn test_empty_candidate_set_fails_fast() {
        let catalog = sample_catalog();
        let constraints = ConstraintSet::new().with_excluded_day(Weekday::Monday);
        let err = CandidateSets::build(&catalog, &["A", "M"], &constraints).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::EmptyCandidateSet {
                requirement_id: "M".into()
            }
        );
    }

    #[test]
    fn test_unknown_and_duplicate_requirements() {
        let catalog = sample_catalog();
        let none = ConstraintSet::new();
        assert_eq!(
            CandidateSets::build(&catalog, &["A", "Z"], &none).unwrap_err(),
            ScheduleError::UnknownRequirement("Z".into())
        );
        assert_eq!(
            CandidateSets::build(&catalog, &["A", "A"], &none).unwrap_err(),
            ScheduleError::DuplicateRequirement("A".into())
        );
    }

    #[test]
    fn test_candidate_sets_request_order() {
        let catalog = sample_catalog();
        let sets = CandidateSets::build(&catalog, &["M", "A"], &ConstraintSet::new()).unwrap();
        assert_eq!(sets.len(), 2);
        assert_eq!(labels(&catalog, sets.candidates(0)), ["M1"]);
        assert_eq!(sets.candidates(1).len(), 3);
        assert_eq!(sets.all_sections().count(), 4);
        assert_eq!(sets.search_space(), 3);
    }
}
