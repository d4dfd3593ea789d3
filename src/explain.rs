//! Conflict explainer.
//!
//! When a search finds no assignment, reports every pair of requirements
//! that cannot be satisfied together under the current filters: each of
//! their candidate-section combinations conflicts ("fully blocked pair").
//!
//! # Limitation
//! A fully blocked pair is sufficient to prove the request unsatisfiable,
//! but unsatisfiability does not imply one exists. Three or more
//! requirements can block each other jointly while every pair among them
//! still has a compatible combination. Such failures yield an empty
//! report; [`Explanation::is_conclusive`] tells the two cases apart.

use serde::Serialize;

use crate::conflict::ConflictGraph;
use crate::error::{Result, ScheduleError};
use crate::filter::CandidateSets;
use crate::models::Catalog;

/// Two requirements (request order) with no compatible section combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BlockedPair(pub String, pub String);

/// Diagnostic for a failed search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    /// Fully blocked pairs, ordered by the request position of the first
    /// then the second requirement.
    pub blocked_pairs: Vec<BlockedPair>,
}

impl Explanation {
    /// Whether the report proves why no assignment exists.
    pub fn is_conclusive(&self) -> bool {
        !self.blocked_pairs.is_empty()
    }

    /// Whether `a` and `b` are reported as blocked, in either order.
    pub fn is_blocked(&self, a: &str, b: &str) -> bool {
        self.blocked_pairs
            .iter()
            .any(|p| (p.0 == a && p.1 == b) || (p.0 == b && p.1 == a))
    }
}

/// Finds every fully blocked requirement pair.
///
/// `graph` is normally the one built by the
/// [`SearchEngine`](crate::search::SearchEngine) that ran the search.
///
/// # Errors
/// [`ScheduleError::SectionNotInGraph`] if `graph` does not cover every
/// candidate.
///
/// # Complexity
/// O(Σᵢ<ⱼ cᵢ · cⱼ) graph lookups, stopping a pair at its first compatible
/// combination.
pub fn explain(
    catalog: &Catalog,
    candidates: &CandidateSets,
    graph: &ConflictGraph,
) -> Result<Explanation> {
    if let Some(missing) = candidates.all_sections().find(|&s| !graph.contains(s)) {
        let section = catalog.section(missing);
        return Err(ScheduleError::SectionNotInGraph {
            requirement_id: section.requirement_id.clone(),
            section_id: section.section_id.clone(),
        });
    }

    let n = candidates.len();
    let mut blocked_pairs = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            let fully_blocked = candidates.candidates(i).iter().all(|&a| {
                candidates
                    .candidates(j)
                    .iter()
                    .all(|&b| graph.conflicts(a, b))
            });
            if fully_blocked {
                let first = catalog.requirement(candidates.requirements()[i]);
                let second = catalog.requirement(candidates.requirements()[j]);
                blocked_pairs.push(BlockedPair(first.id.clone(), second.id.clone()));
            }
        }
    }

    log::debug!(
        "Explainer: {} fully blocked pair(s) among {} requirements",
        blocked_pairs.len(),
        n
    );
    Ok(Explanation { blocked_pairs })
}
