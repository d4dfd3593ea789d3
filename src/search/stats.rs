//! Search statistics.

use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Counters collected during one search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    /// Candidates examined (counted against the inspection ceiling).
    pub inspected: u64,
    /// Candidates skipped because they conflict with the partial assignment.
    pub pruned: u64,
    /// Returns from a deeper level.
    pub backtracks: u64,
    /// Complete assignments recorded.
    pub solutions_found: u64,
    /// Deepest partial assignment reached.
    pub max_depth: usize,
    /// Wall time spent searching.
    pub elapsed: Duration,
}

impl SearchStats {
    #[inline]
    pub fn on_inspect(&mut self) {
        self.inspected = self.inspected.saturating_add(1);
    }

    #[inline]
    pub fn on_prune(&mut self) {
        self.pruned = self.pruned.saturating_add(1);
    }

    #[inline]
    pub fn on_backtrack(&mut self) {
        self.backtracks = self.backtracks.saturating_add(1);
    }

    #[inline]
    pub fn on_solution(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }

    #[inline]
    pub fn on_depth(&mut self, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "inspected={} pruned={} backtracks={} solutions={} max_depth={} elapsed={:.3}ms",
            self.inspected,
            self.pruned,
            self.backtracks,
            self.solutions_found,
            self.max_depth,
            self.elapsed.as_secs_f64() * 1e3
        )
    }
}
