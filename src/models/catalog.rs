//! Section catalog arena.
//!
//! Sections are stored once in a flat vector and referred to by
//! [`SectionIndex`]; requirements are groups of section indices in catalog
//! order. Search and conflict checks work over these small integers rather
//! than over references into the catalog.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use super::{Section, SectionRecord};
use crate::error::{Result, ScheduleError};
use crate::validation::validate_sections;

/// Position of a section in [`Catalog::sections`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SectionIndex(usize);

/// Position of a requirement in [`Catalog::requirements`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RequirementIndex(usize);

impl SectionIndex {
    #[inline]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl RequirementIndex {
    #[inline]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for SectionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SectionIndex({})", self.0)
    }
}

impl fmt::Display for RequirementIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RequirementIndex({})", self.0)
    }
}

/// A course the user may want: all sections sharing one course code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    /// Course code.
    pub id: String,
    /// Course title, taken from the first section that carries one.
    pub name: Option<String>,
    /// Credits of the first section. Sections may carry their own values.
    pub credits: u32,
    /// Candidate sections in catalog order.
    pub sections: Vec<SectionIndex>,
}

/// An immutable, validated collection of sections grouped by requirement.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    sections: Vec<Section>,
    requirements: Vec<Requirement>,
    #[serde(skip)]
    by_id: HashMap<String, RequirementIndex>,
}

impl Catalog {
    /// Builds a catalog from typed sections.
    ///
    /// Requirements appear in order of their first section; within a
    /// requirement, sections keep their input order.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidCatalog`] with every structural problem found.
    pub fn new(sections: Vec<Section>) -> Result<Self> {
        validate_sections(&sections).map_err(ScheduleError::InvalidCatalog)?;

        let mut requirements: Vec<Requirement> = Vec::new();
        let mut by_id: HashMap<String, RequirementIndex> = HashMap::new();

        for (i, section) in sections.iter().enumerate() {
            let req_idx = *by_id
                .entry(section.requirement_id.clone())
                .or_insert_with(|| {
                    requirements.push(Requirement {
                        id: section.requirement_id.clone(),
                        name: None,
                        credits: section.credits,
                        sections: Vec::new(),
                    });
                    RequirementIndex(requirements.len() - 1)
                });

            let requirement = &mut requirements[req_idx.0];
            if requirement.name.is_none() {
                requirement.name = section.name.clone();
            }
            requirement.sections.push(SectionIndex(i));
        }

        log::debug!(
            "Built catalog: {} sections across {} requirements",
            sections.len(),
            requirements.len()
        );

        Ok(Self {
            sections,
            requirements,
            by_id,
        })
    }

    /// Parses raw parser output and builds a catalog.
    ///
    /// # Errors
    /// The first malformed day, time or interval aborts construction;
    /// structural problems are reported as [`ScheduleError::InvalidCatalog`].
    pub fn from_records(records: Vec<SectionRecord>) -> Result<Self> {
        let sections = records
            .into_iter()
            .map(SectionRecord::into_section)
            .collect::<Result<Vec<_>>>()?;
        Self::new(sections)
    }

    /// All sections in catalog order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// All requirements in order of first appearance.
    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    /// Section at `index`.
    ///
    /// # Panics
    /// If `index` was not produced by this catalog.
    #[inline]
    pub fn section(&self, index: SectionIndex) -> &Section {
        &self.sections[index.0]
    }

    /// Requirement at `index`.
    ///
    /// # Panics
    /// If `index` was not produced by this catalog.
    #[inline]
    pub fn requirement(&self, index: RequirementIndex) -> &Requirement {
        &self.requirements[index.0]
    }

    /// Looks up a requirement by course code.
    pub fn requirement_index(&self, id: &str) -> Option<RequirementIndex> {
        self.by_id.get(id).copied()
    }

    /// Looks up a section by course code and section label.
    pub fn find_section(&self, requirement_id: &str, section_id: &str) -> Option<SectionIndex> {
        let req = self.requirement_index(requirement_id)?;
        self.requirement(req)
            .sections
            .iter()
            .copied()
            .find(|&s| self.section(s).section_id == section_id)
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Number of requirements.
    pub fn requirement_count(&self) -> usize {
        self.requirements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SlotRecord, TimeInterval};
    use crate::validation::ValidationErrorKind;

    fn slot(day: &str, start: &str, end: &str) -> TimeInterval {
        TimeInterval::parse(day, start, end).unwrap()
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            Section::new("B", "B1").with_slot(slot("Monday", "09:00", "10:00")),
            Section::new("A", "A1")
                .with_name("Algebra")
                .with_slot(slot("Monday", "09:00", "10:00")),
            Section::new("B", "B2")
                .with_name("Biology")
                .with_slot(slot("Monday", "11:00", "12:00")),
        ])
        .unwrap()
    }

    #[test]
    fn test_grouping_preserves_order() {
        let catalog = sample_catalog();
        assert_eq!(catalog.requirement_count(), 2);
        assert_eq!(catalog.section_count(), 3);

        let ids: Vec<_> = catalog.requirements().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["B", "A"]);

        let b = catalog.requirement(catalog.requirement_index("B").unwrap());
        let labels: Vec<_> = b
            .sections
            .iter()
            .map(|&s| catalog.section(s).section_id.as_str())
            .collect();
        assert_eq!(labels, ["B1", "B2"]);
        assert_eq!(b.name.as_deref(), Some("Biology"));
    }

    #[test]
    fn test_find_section() {
        let catalog = sample_catalog();
        let idx = catalog.find_section("B", "B2").unwrap();
        assert_eq!(idx.get(), 2);
        assert!(catalog.find_section("B", "B9").is_none());
        assert!(catalog.find_section("Z", "B1").is_none());
    }

    #[test]
    fn test_invalid_catalog_is_rejected() {
        let err = Catalog::new(vec![Section::new("A", "A1")]).unwrap_err();
        match err {
            ScheduleError::InvalidCatalog(errors) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::EmptyTimeSlots);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_records_accepts_mixed_credits() {
        let record = |section_id: &str, credits| SectionRecord {
            requirement_id: "22CS101".into(),
            section_id: section_id.into(),
            instructor: "X".into(),
            credits,
            time_slots: vec![SlotRecord::new("Monday", "09:00", "10:00")],
            name: None,
            dates: None,
        };
        let catalog = Catalog::from_records(vec![record("A1", 4), record("A2", 0)]).unwrap();
        let req = catalog.requirement_index("22CS101").unwrap();
        assert_eq!(catalog.requirement(req).credits, 4);
        assert_eq!(catalog.requirement(req).sections.len(), 2);
        assert_eq!(catalog.sections()[1].credits, 0);
    }

    #[test]
    fn test_from_records_fails_closed_on_bad_time() {
        let records = vec![SectionRecord {
            requirement_id: "A".into(),
            section_id: "A1".into(),
            instructor: "X".into(),
            credits: 3,
            time_slots: vec![SlotRecord::new("Monday", "09:00", "08:00")],
            name: None,
            dates: None,
        }];
        assert!(matches!(
            Catalog::from_records(records),
            Err(ScheduleError::MalformedInterval { .. })
        ));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.requirement_count(), 0);
    }
}
