//! Section (course offering) model.
//!
//! A section is one schedulable offering of a course: its own instructor
//! and a set of weekly time slots. Sections are immutable value records;
//! the search never mutates them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{TimeInterval, Weekday};
use crate::error::Result;

/// One schedulable offering of a requirement (course code).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Course code this section belongs to (e.g. `22CS101`).
    pub requirement_id: String,
    /// Section label, unique within its requirement.
    pub section_id: String,
    /// Instructor name as printed in the catalog.
    pub instructor: String,
    /// Credit value of the course.
    pub credits: u32,
    /// Weekly meeting times.
    pub time_slots: Vec<TimeInterval>,
    /// Course title, if the catalog carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-text term range (e.g. `01-08-2025 to 30-11-2025`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<String>,
}

impl Section {
    /// Creates a section with no time slots.
    pub fn new(requirement_id: impl Into<String>, section_id: impl Into<String>) -> Self {
        Self {
            requirement_id: requirement_id.into(),
            section_id: section_id.into(),
            instructor: String::new(),
            credits: 0,
            time_slots: Vec::new(),
            name: None,
            dates: None,
        }
    }

    /// Sets the instructor.
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = instructor.into();
        self
    }

    /// Sets the credit value.
    pub fn with_credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }

    /// Adds a time slot.
    pub fn with_slot(mut self, slot: TimeInterval) -> Self {
        self.time_slots.push(slot);
        self
    }

    /// Sets the course title.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the term date range.
    pub fn with_dates(mut self, dates: impl Into<String>) -> Self {
        self.dates = Some(dates.into());
        self
    }

    /// Whether this section meets on any of the given days.
    pub fn meets_on(&self, days: &BTreeSet<Weekday>) -> bool {
        self.time_slots.iter().any(|slot| days.contains(&slot.day()))
    }

    /// Total weekly contact time in minutes.
    pub fn weekly_minutes(&self) -> u32 {
        self.time_slots
            .iter()
            .map(|s| u32::from(s.duration_minutes()))
            .sum()
    }
}

/// A raw time slot as produced by an external catalog parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRecord {
    pub day: String,
    pub start: String,
    pub end: String,
}

impl SlotRecord {
    pub fn new(day: impl Into<String>, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            start: start.into(),
            end: end.into(),
        }
    }

    /// Parses into a validated interval.
    pub fn parse(&self) -> Result<TimeInterval> {
        TimeInterval::parse(&self.day, &self.start, &self.end)
    }
}

/// A raw section as produced by an external catalog parser.
///
/// Strings are untrusted: [`Catalog::from_records`](super::Catalog::from_records)
/// parses every slot and rejects the catalog on the first malformed value
/// rather than dropping it silently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRecord {
    pub requirement_id: String,
    pub section_id: String,
    #[serde(default)]
    pub instructor: String,
    #[serde(default)]
    pub credits: u32,
    #[serde(default)]
    pub time_slots: Vec<SlotRecord>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub dates: Option<String>,
}

impl SectionRecord {
    /// Parses all slots and produces a typed [`Section`].
    pub fn into_section(self) -> Result<Section> {
        let time_slots = self
            .time_slots
            .iter()
            .map(SlotRecord::parse)
            .collect::<Result<Vec<_>>>()?;

        Ok(Section {
            requirement_id: self.requirement_id.trim().to_string(),
            section_id: self.section_id.trim().to_string(),
            instructor: self.instructor.trim().to_string(),
            credits: self.credits,
            time_slots,
            name: self.name,
            dates: self.dates,
        })
    }
}
