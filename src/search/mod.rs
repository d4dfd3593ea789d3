//! Schedule search.
//!
//! Finds assignments of one section per requirement such that no two
//! chosen sections overlap. Candidates come prefiltered from
//! [`CandidateSets`](crate::filter::CandidateSets); conflicts are looked
//! up in a [`ConflictGraph`](crate::conflict::ConflictGraph) built once per
//! engine.
//!
//! # Modes
//!
//! | Method | Stops at |
//! |--------|----------|
//! | [`SearchEngine::find_one`] | first valid assignment |
//! | [`SearchEngine::find_all`] | `limit` assignments or exhaustion |
//!
//! Both stop at the inspection ceiling of [`SearchConfig`] and flag the
//! outcome as truncated. Output order is depth-first, left to right, and
//! fully determined by request order and catalog order.

mod config;
mod engine;
mod stats;

pub use config::{SearchConfig, DEFAULT_LIMIT, DEFAULT_MAX_INSPECTIONS};
pub use engine::{SearchEngine, SearchOutcome};
pub use stats::SearchStats;
