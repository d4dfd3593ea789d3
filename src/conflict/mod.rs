//! Section conflict relation.
//!
//! Two sections conflict iff any of their time slots overlap (see
//! [`TimeInterval::overlaps`](crate::models::TimeInterval::overlaps)).
//! The relation is symmetric and irreflexive.
//!
//! [`ConflictGraph`] precomputes the relation for a set of catalog
//! sections into a flat bit matrix so that the search and the explainer
//! answer each query with one lookup.

mod selection;

pub use selection::{check_selection, ConflictKind, SlotConflict};

use crate::models::{Catalog, Section, SectionIndex};

/// Whether two sections have any overlapping time slot.
///
/// A section never conflicts with itself (identity by requirement and
/// section ID). Short-circuits on the first overlapping pair.
pub fn sections_conflict(a: &Section, b: &Section) -> bool {
    if a.requirement_id == b.requirement_id && a.section_id == b.section_id {
        return false;
    }
    a.time_slots
        .iter()
        .any(|x| b.time_slots.iter().any(|y| x.overlaps(y)))
}

/// Precomputed pairwise conflict relation over a subset of a catalog.
#[derive(Debug, Clone)]
pub struct ConflictGraph {
    /// Catalog section index → row in the matrix.
    rows: Vec<Option<usize>>,
    /// Graph members in insertion order.
    members: Vec<SectionIndex>,
    words_per_row: usize,
    bits: Vec<u64>,
}

impl ConflictGraph {
    /// Builds the relation for `sections` (duplicates are ignored).
    ///
    /// # Complexity
    /// O(n² · s²) where n = sections, s = slots per section.
    pub fn build<I>(catalog: &Catalog, sections: I) -> Self
    where
        I: IntoIterator<Item = SectionIndex>,
    {
        let mut rows = vec![None; catalog.section_count()];
        let mut members = Vec::new();
        for s in sections {
            if rows[s.get()].is_none() {
                rows[s.get()] = Some(members.len());
                members.push(s);
            }
        }

        let n = members.len();
        let words_per_row = n.div_ceil(64);
        let mut graph = Self {
            rows,
            members,
            words_per_row,
            bits: vec![0; n * words_per_row],
        };

        for i in 0..n {
            let a = catalog.section(graph.members[i]);
            for j in (i + 1)..n {
                let b = catalog.section(graph.members[j]);
                if sections_conflict(a, b) {
                    graph.set(i, j);
                    graph.set(j, i);
                }
            }
        }

        log::trace!(
            "Conflict graph: {} sections, {} conflicting pairs",
            n,
            graph.edge_count()
        );
        graph
    }

    /// Builds the relation for every section in the catalog.
    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self::build(catalog, (0..catalog.section_count()).map(SectionIndex::new))
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize) {
        self.bits[row * self.words_per_row + col / 64] |= 1u64 << (col % 64);
    }

    #[inline]
    fn row_of(&self, s: SectionIndex) -> usize {
        match self.rows.get(s.get()).copied().flatten() {
            Some(row) => row,
            None => panic!("{s} is not part of this conflict graph"),
        }
    }

    /// Whether `a` and `b` conflict.
    ///
    /// # Panics
    /// If either section was not included when the graph was built.
    #[inline]
    pub fn conflicts(&self, a: SectionIndex, b: SectionIndex) -> bool {
        let (i, j) = (self.row_of(a), self.row_of(b));
        self.bits[i * self.words_per_row + j / 64] & (1u64 << (j % 64)) != 0
    }

    /// Whether `s` conflicts with any of `chosen`.
    #[inline]
    pub fn conflicts_with_any(&self, s: SectionIndex, chosen: &[SectionIndex]) -> bool {
        chosen.iter().any(|&c| self.conflicts(s, c))
    }

    /// Whether `s` is part of this graph.
    pub fn contains(&self, s: SectionIndex) -> bool {
        matches!(self.rows.get(s.get()), Some(Some(_)))
    }

    /// Number of sections in the graph.
    pub fn node_count(&self) -> usize {
        self.members.len()
    }

    /// Number of unordered conflicting pairs.
    pub fn edge_count(&self) -> usize {
        let ones: u32 = self.bits.iter().map(|w| w.count_ones()).sum();
        ones as usize / 2
    }
}
