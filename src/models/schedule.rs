//! Assignment (solution) model.
//!
//! An assignment picks exactly one section per requested requirement.
//! It holds catalog indices only; names and times are resolved against
//! the [`Catalog`] it was produced from.

use serde::Serialize;
use std::collections::BTreeMap;

use super::{Catalog, Section, SectionIndex, TimeOfDay, Weekday};

/// One chosen section per requirement, in request order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Assignment {
    sections: Vec<SectionIndex>,
}

/// A single meeting in a weekly timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableEntry {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub requirement_id: String,
    pub section_id: String,
    pub instructor: String,
}

/// Meetings grouped by day (Monday first), each day sorted by start time.
/// Days without meetings are absent.
pub type WeeklyTimetable = BTreeMap<Weekday, Vec<TimetableEntry>>;

impl Assignment {
    /// Creates an assignment from section indices in request order.
    pub fn new(sections: Vec<SectionIndex>) -> Self {
        Self { sections }
    }

    /// Chosen sections in request order.
    pub fn sections(&self) -> &[SectionIndex] {
        &self.sections
    }

    /// Number of chosen sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Resolves the chosen sections against `catalog`.
    pub fn resolve<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = &'a Section> + 'a {
        self.sections.iter().map(move |&s| catalog.section(s))
    }

    /// Chosen section for a requirement, if it is part of this assignment.
    pub fn section_for<'a>(&self, catalog: &'a Catalog, requirement_id: &str) -> Option<&'a Section> {
        self.sections
            .iter()
            .map(|&s| catalog.section(s))
            .find(|s| s.requirement_id == requirement_id)
    }

    /// `requirementId → sectionId` view.
    pub fn to_map(&self, catalog: &Catalog) -> BTreeMap<String, String> {
        self.resolve(catalog)
            .map(|s| (s.requirement_id.clone(), s.section_id.clone()))
            .collect()
    }

    /// Sum of credits over chosen sections.
    pub fn total_credits(&self, catalog: &Catalog) -> u32 {
        self.resolve(catalog).map(|s| s.credits).sum()
    }

    /// Builds the weekly timetable of this assignment.
    ///
    /// Ties on start time keep request order.
    pub fn weekly_timetable(&self, catalog: &Catalog) -> WeeklyTimetable {
        let mut table = WeeklyTimetable::new();
        for section in self.resolve(catalog) {
            for slot in &section.time_slots {
                table.entry(slot.day()).or_default().push(TimetableEntry {
                    start: slot.start(),
                    end: slot.end(),
                    requirement_id: section.requirement_id.clone(),
                    section_id: section.section_id.clone(),
                    instructor: section.instructor.clone(),
                });
            }
        }
        for entries in table.values_mut() {
            entries.sort_by_key(|e| e.start);
        }
        table
    }
}
