//! Backtracking search engine.
//!
//! # Algorithm
//!
//! Depth-first over requirements in request order:
//! 1. At depth *i*, try each candidate of requirement *i* in catalog order.
//! 2. Skip a candidate that conflicts with *any* section already chosen.
//! 3. Otherwise choose it and descend to depth *i + 1*.
//! 4. Past the last requirement the partial assignment is complete and
//!    valid; record it.
//!
//! `find_one` stops at the first record, `find_all` at `limit` records or
//! when the space is exhausted. Both stop early, with `truncated = true`,
//! once `max_inspections` candidates have been examined.
//!
//! # Complexity
//! Worst case O(Π cᵢ · n) for n requirements with cᵢ candidates each;
//! pruning cuts every subtree below a conflicting choice.

use std::ops::ControlFlow;
use std::time::Instant;

use super::{SearchConfig, SearchStats};
use crate::conflict::ConflictGraph;
use crate::filter::CandidateSets;
use crate::models::{Assignment, Catalog, SectionIndex};

/// Result of a search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Valid assignments in depth-first discovery order.
    pub assignments: Vec<Assignment>,
    /// Whether the inspection ceiling stopped the search early.
    pub truncated: bool,
    /// Counters for this run.
    pub stats: SearchStats,
}

impl SearchOutcome {
    /// Whether no valid assignment was found.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// First assignment found, if any.
    pub fn first(&self) -> Option<&Assignment> {
        self.assignments.first()
    }
}

/// Searches conflict-free assignments over prefiltered candidates.
///
/// # Example
/// ```
/// use u_timetable::filter::CandidateSets;
/// use u_timetable::models::{Catalog, ConstraintSet, Section, TimeInterval};
/// use u_timetable::search::SearchEngine;
///
/// let slot = |d, s, e| TimeInterval::parse(d, s, e).unwrap();
/// let catalog = Catalog::new(vec![
///     Section::new("A", "A1").with_slot(slot("Mon", "09:00", "10:00")),
///     Section::new("B", "B1").with_slot(slot("Mon", "09:00", "10:00")),
///     Section::new("B", "B2").with_slot(slot("Mon", "11:00", "12:00")),
/// ]).unwrap();
/// let candidates = CandidateSets::build(&catalog, &["A", "B"], &ConstraintSet::new()).unwrap();
///
/// let engine = SearchEngine::new(&catalog, &candidates);
/// let outcome = engine.find_one();
/// let map = outcome.first().unwrap().to_map(&catalog);
/// assert_eq!(map["B"], "B2");
/// ```
#[derive(Debug, Clone)]
pub struct SearchEngine<'a> {
    catalog: &'a Catalog,
    candidates: &'a CandidateSets,
    graph: ConflictGraph,
    config: SearchConfig,
}

struct SearchState {
    partial: Vec<SectionIndex>,
    found: Vec<Assignment>,
    limit: usize,
    max_inspections: u64,
    truncated: bool,
    stats: SearchStats,
}

impl<'a> SearchEngine<'a> {
    /// Creates an engine with default bounds.
    ///
    /// Builds the conflict graph over every candidate section.
    pub fn new(catalog: &'a Catalog, candidates: &'a CandidateSets) -> Self {
        Self {
            catalog,
            candidates,
            graph: ConflictGraph::build(catalog, candidates.all_sections()),
            config: SearchConfig::default(),
        }
    }

    /// Sets search bounds.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Conflict graph over the candidate sections.
    pub fn graph(&self) -> &ConflictGraph {
        &self.graph
    }

    /// Catalog this engine searches over.
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Finds the first valid assignment in depth-first order.
    pub fn find_one(&self) -> SearchOutcome {
        self.run(1)
    }

    /// Finds up to `limit` valid assignments (at least 1), in depth-first
    /// order.
    pub fn find_all(&self, limit: usize) -> SearchOutcome {
        self.run(limit.max(1))
    }

    /// Finds up to the configured limit of valid assignments.
    pub fn find_all_default(&self) -> SearchOutcome {
        self.find_all(self.config.limit)
    }

    fn run(&self, limit: usize) -> SearchOutcome {
        log::debug!(
            "Searching {} requirements (space {}), limit {}, ceiling {}",
            self.candidates.len(),
            self.candidates.search_space(),
            limit,
            self.config.max_inspections
        );

        let started = Instant::now();
        let mut state = SearchState {
            partial: Vec::with_capacity(self.candidates.len()),
            found: Vec::new(),
            limit,
            max_inspections: self.config.max_inspections,
            truncated: false,
            stats: SearchStats::default(),
        };

        let _ = self.descend(0, &mut state);
        state.stats.elapsed = started.elapsed();

        if state.truncated {
            log::warn!(
                "Search truncated after {} inspections with {} assignment(s) found",
                state.stats.inspected,
                state.found.len()
            );
        }
        log::debug!("Search finished: {}", state.stats);

        SearchOutcome {
            assignments: state.found,
            truncated: state.truncated,
            stats: state.stats,
        }
    }

    fn descend(&self, depth: usize, state: &mut SearchState) -> ControlFlow<()> {
        if depth == self.candidates.len() {
            state.stats.on_solution();
            log::trace!("Assignment #{} found", state.found.len() + 1);
            state.found.push(Assignment::new(state.partial.clone()));
            return if state.found.len() >= state.limit {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            };
        }

        for &candidate in self.candidates.candidates(depth) {
            if state.stats.inspected >= state.max_inspections {
                state.truncated = true;
                return ControlFlow::Break(());
            }
            state.stats.on_inspect();

            if self.graph.conflicts_with_any(candidate, &state.partial) {
                state.stats.on_prune();
                continue;
            }

            state.partial.push(candidate);
            state.stats.on_depth(state.partial.len());
            let flow = self.descend(depth + 1, state);
            state.partial.pop();
            state.stats.on_backtrack();

            if flow.is_break() {
                return flow;
            }
        }

        ControlFlow::Continue(())
    }
}
