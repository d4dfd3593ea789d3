//! Search configuration.

use serde::{Deserialize, Serialize};

/// Default cap on assignments returned by `find_all`.
pub const DEFAULT_LIMIT: usize = 50;

/// Default cap on candidate inspections per search.
pub const DEFAULT_MAX_INSPECTIONS: u64 = 10_000;

/// Bounds for one search invocation.
///
/// `max_inspections` acts as the search's deadline: every candidate the
/// engine examines counts once, and hitting the ceiling stops the search
/// with whatever it has found (`truncated = true`).
///
/// # Example
/// ```
/// use u_timetable::search::SearchConfig;
///
/// let config = SearchConfig::new().with_limit(10).with_max_inspections(1_000);
/// assert_eq!(config.limit, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    /// Maximum number of assignments collected by `find_all` (at least 1).
    pub limit: usize,
    /// Maximum number of candidate inspections.
    pub max_inspections: u64,
}

impl SearchConfig {
    /// Creates a configuration with default bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the result cap. Values below 1 are raised to 1.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    /// Sets the inspection ceiling.
    pub fn with_max_inspections(mut self, max_inspections: u64) -> Self {
        self.max_inspections = max_inspections;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            max_inspections: DEFAULT_MAX_INSPECTIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = SearchConfig::default();
        assert_eq!(c.limit, 50);
        assert_eq!(c.max_inspections, 10_000);
    }

    #[test]
    fn test_limit_floor() {
        assert_eq!(SearchConfig::new().with_limit(0).limit, 1);
    }

    #[test]
    fn test_partial_deserialize() {
        let c: SearchConfig = serde_json::from_str(r#"{"limit": 5}"#).unwrap();
        assert_eq!(c.limit, 5);
        assert_eq!(c.max_inspections, DEFAULT_MAX_INSPECTIONS);
    }
}
