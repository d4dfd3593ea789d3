//! Request/response facade.
//!
//! Ties filtering, search and explanation together for one user
//! interaction:
//!
//! 1. Resolve and filter the requested requirements
//!    ([`CandidateSets::build`]); structural problems are errors.
//! 2. Search in the requested mode.
//! 3. If nothing was found, run the explainer.
//!
//! The presentation layer owns selection state; it passes an explicit
//! [`ScheduleRequest`] in and receives a [`ScheduleResponse`] back.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::conflict::{check_selection, SlotConflict};
use crate::error::{Result, ScheduleError};
use crate::explain::{explain, BlockedPair, Explanation};
use crate::filter::CandidateSets;
use crate::models::{Catalog, ConstraintSet, SectionIndex};
use crate::search::{SearchConfig, SearchEngine, SearchOutcome};

/// Which assignments to look for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SearchMode {
    /// First valid assignment only.
    #[default]
    FindOne,
    /// Up to `limit` assignments; `None` uses [`SearchConfig::limit`].
    FindAll {
        #[serde(default)]
        limit: Option<usize>,
    },
}

/// One search request.
///
/// # Example
/// ```
/// use u_timetable::planner::ScheduleRequest;
///
/// let request: ScheduleRequest = serde_json::from_str(r#"{
///     "requirementIds": ["22CS101", "22MA201"],
///     "excludedDays": ["Saturday"],
///     "allowedInstructors": {"22CS101": ["Dr. Rao"]},
///     "mode": {"type": "findAll", "limit": 10}
/// }"#).unwrap();
/// assert_eq!(request.requirement_ids.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    /// Requirements to satisfy, in search order.
    pub requirement_ids: Vec<String>,
    /// Excluded days and instructor whitelists.
    #[serde(flatten)]
    pub constraints: ConstraintSet,
    /// Search mode.
    #[serde(default)]
    pub mode: SearchMode,
}

impl ScheduleRequest {
    /// Creates a find-one request without constraints.
    pub fn new<I, S>(requirement_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            requirement_ids: requirement_ids.into_iter().map(Into::into).collect(),
            constraints: ConstraintSet::default(),
            mode: SearchMode::FindOne,
        }
    }

    /// Sets the constraints.
    pub fn with_constraints(mut self, constraints: ConstraintSet) -> Self {
        self.constraints = constraints;
        self
    }

    /// Sets the search mode.
    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Wire-level answer to a [`ScheduleRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ScheduleResponse {
    /// `FindOne` succeeded.
    Assignment {
        assignment: BTreeMap<String, String>,
    },
    /// `FindAll` found at least one assignment.
    Assignments {
        assignments: Vec<BTreeMap<String, String>>,
        truncated: bool,
    },
    /// No assignment was found.
    Unsatisfiable {
        blocked_pairs: Vec<BlockedPair>,
        truncated: bool,
    },
}

/// Full result of planning one request.
#[derive(Debug, Clone)]
pub struct Plan {
    /// Filtered candidates the search ran over.
    pub candidates: CandidateSets,
    /// Search result.
    pub outcome: SearchOutcome,
    /// Present iff no assignment was found.
    pub explanation: Option<Explanation>,
}

/// Runs requests against one catalog.
#[derive(Debug, Clone)]
pub struct Planner<'a> {
    catalog: &'a Catalog,
    config: SearchConfig,
}

impl<'a> Planner<'a> {
    /// Creates a planner with default search bounds.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            config: SearchConfig::default(),
        }
    }

    /// Sets search bounds.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Filters, searches and, on failure, explains.
    ///
    /// # Errors
    /// Unknown or duplicate requirement IDs, or a requirement with no
    /// admissible section after filtering. Finding no assignment is not an
    /// error.
    pub fn plan(&self, request: &ScheduleRequest) -> Result<Plan> {
        let candidates =
            CandidateSets::build(self.catalog, &request.requirement_ids, &request.constraints)?;

        let (outcome, explanation) = {
            let engine = SearchEngine::new(self.catalog, &candidates).with_config(self.config);
            let outcome = match request.mode {
                SearchMode::FindOne => engine.find_one(),
                SearchMode::FindAll { limit } => {
                    engine.find_all(limit.unwrap_or(self.config.limit))
                }
            };
            let explanation = if outcome.is_empty() {
                Some(explain(self.catalog, &candidates, engine.graph())?)
            } else {
                None
            };
            (outcome, explanation)
        };

        Ok(Plan {
            candidates,
            outcome,
            explanation,
        })
    }

    /// Plans `request` and converts the result to its wire form.
    pub fn respond(&self, request: &ScheduleRequest) -> Result<ScheduleResponse> {
        let plan = self.plan(request)?;
        let truncated = plan.outcome.truncated;

        if let Some(explanation) = plan.explanation {
            return Ok(ScheduleResponse::Unsatisfiable {
                blocked_pairs: explanation.blocked_pairs,
                truncated,
            });
        }

        let mut maps = plan
            .outcome
            .assignments
            .iter()
            .map(|a| a.to_map(self.catalog));

        Ok(match request.mode {
            SearchMode::FindOne => ScheduleResponse::Assignment {
                assignment: maps.next().unwrap_or_default(),
            },
            SearchMode::FindAll { .. } => ScheduleResponse::Assignments {
                assignments: maps.collect(),
                truncated,
            },
        })
    }

    /// Checks a hand-picked selection of `(requirementId, sectionId)` pairs.
    ///
    /// # Errors
    /// [`ScheduleError::UnknownSection`] if a pair is not in the catalog.
    pub fn check_selection<S: AsRef<str>>(
        &self,
        selection: &[(S, S)],
    ) -> Result<Vec<SlotConflict>> {
        let indices = selection
            .iter()
            .map(|(req, sec)| {
                let (req, sec) = (req.as_ref(), sec.as_ref());
                self.catalog
                    .find_section(req, sec)
                    .ok_or_else(|| ScheduleError::UnknownSection {
                        requirement_id: req.to_string(),
                        section_id: sec.to_string(),
                    })
            })
            .collect::<Result<Vec<SectionIndex>>>()?;
        Ok(check_selection(self.catalog, &indices))
    }
}
