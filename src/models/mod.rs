//! Timetabling domain models.
//!
//! Provides the value types a course catalog is made of and the
//! assignments the search produces. All types are immutable once built
//! and carry no references into each other: the [`Catalog`] arena is
//! addressed by typed integer indices.
//!
//! # Domain Mappings
//!
//! | u-timetable | University | Training center | Clinic rota |
//! |-------------|-----------|-----------------|-------------|
//! | Requirement | Course code | Module | Shift type |
//! | Section | Lecture section | Cohort | Shift slot |
//! | TimeInterval | Weekly class meeting | Session | Shift hours |
//! | Assignment | Term timetable | Enrollment plan | Staff roster |

mod catalog;
mod constraint;
mod schedule;
mod section;
mod time;

pub use catalog::{Catalog, Requirement, RequirementIndex, SectionIndex};
pub use constraint::ConstraintSet;
pub use schedule::{Assignment, TimetableEntry, WeeklyTimetable};
pub use section::{Section, SectionRecord, SlotRecord};
pub use time::{TimeInterval, TimeOfDay, Weekday, MINUTES_PER_DAY};
