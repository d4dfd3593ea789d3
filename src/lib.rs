//! Course timetable search for the U-Engine ecosystem.
//!
//! Picks one section per requested course such that no two chosen
//! sections meet at overlapping times, honoring excluded days and
//! per-course instructor whitelists. When no such timetable exists, the
//! crate says which pairs of courses can never be combined.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Weekday`, `TimeInterval`, `Section`,
//!   `Catalog`, `ConstraintSet`, `Assignment`
//! - **`validation`**: Structural catalog checks (blank/duplicate IDs, empty slots)
//! - **`conflict`**: Pairwise section conflicts, precomputed `ConflictGraph`,
//!   hand-picked selection checks
//! - **`filter`**: Constraint pre-filtering into `CandidateSets`
//! - **`search`**: Depth-first backtracking `SearchEngine`
//! - **`explain`**: Fully blocked requirement pairs for failed searches
//! - **`planner`**: `ScheduleRequest` → `ScheduleResponse` facade
//!
//! # Architecture
//!
//! Data flows one way: catalog → filtered candidates → search → assignment
//! or diagnostic. Catalog parsing and presentation live outside this crate;
//! it consumes an already-normalized catalog and holds no state between
//! calls.
//!
//! # Example
//!
//! ```
//! use u_timetable::models::{Catalog, Section, TimeInterval};
//! use u_timetable::planner::{Planner, ScheduleRequest, ScheduleResponse};
//!
//! let slot = |d, s, e| TimeInterval::parse(d, s, e).unwrap();
//! let catalog = Catalog::new(vec![
//!     Section::new("22CS101", "A1").with_slot(slot("Monday", "09:00", "10:00")),
//!     Section::new("22MA201", "B1").with_slot(slot("Monday", "09:00", "10:00")),
//!     Section::new("22MA201", "B2").with_slot(slot("Monday", "11:00", "12:00")),
//! ]).unwrap();
//!
//! let response = Planner::new(&catalog)
//!     .respond(&ScheduleRequest::new(["22CS101", "22MA201"]))
//!     .unwrap();
//! match response {
//!     ScheduleResponse::Assignment { assignment } => assert_eq!(assignment["22MA201"], "B2"),
//!     other => panic!("{other:?}"),
//! }
//! ```
//!
//! # References
//!
//! - Russell & Norvig (2021), "Artificial Intelligence: A Modern Approach", Ch. 6 (CSP backtracking)
//! - Schaerf (1999), "A Survey of Automated Timetabling"

pub mod conflict;
pub mod error;
pub mod explain;
pub mod filter;
pub mod models;
pub mod planner;
pub mod search;
pub mod validation;

pub use error::{Result, ScheduleError};
