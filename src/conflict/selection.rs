//! Conflict report for a hand-picked selection of sections.
//!
//! Used when a user picks sections themselves instead of asking the search
//! engine: every clashing slot pair is listed so the presentation layer
//! can tell the user exactly which meetings collide.

use serde::Serialize;

use crate::models::{Catalog, SectionIndex, TimeInterval};

/// How two meetings collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConflictKind {
    /// Same day, same start and same end.
    Exact,
    /// Same day, partially or fully nested overlap.
    Overlap,
}

/// One clashing pair of meetings between two selected sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotConflict {
    pub kind: ConflictKind,
    pub first: SectionIndex,
    pub second: SectionIndex,
    pub first_slot: TimeInterval,
    pub second_slot: TimeInterval,
}

/// Lists every clashing slot pair among `selection`.
///
/// Pairs are reported in selection order (`first` precedes `second`), and
/// within a pair in slot order. Each clash appears exactly once, classified
/// as [`ConflictKind::Exact`] or [`ConflictKind::Overlap`]. A slot listed
/// twice by a section is reported once, and repeated indices in `selection`
/// are compared only once.
pub fn check_selection(catalog: &Catalog, selection: &[SectionIndex]) -> Vec<SlotConflict> {
    let mut conflicts: Vec<SlotConflict> = Vec::new();

    for (i, &first) in selection.iter().enumerate() {
        if selection[..i].contains(&first) {
            continue;
        }
        for &second in &selection[i + 1..] {
            if second == first {
                continue;
            }
            let (a, b) = (catalog.section(first), catalog.section(second));
            let pair_start = conflicts.len();
            for x in &a.time_slots {
                for y in b.time_slots.iter().filter(|y| x.overlaps(y)) {
                    let seen = conflicts[pair_start..]
                        .iter()
                        .any(|c| c.first_slot == *x && c.second_slot == *y);
                    if seen {
                        continue;
                    }
                    let kind = if x.start() == y.start() && x.end() == y.end() {
                        ConflictKind::Exact
                    } else {
                        ConflictKind::Overlap
                    };
                    conflicts.push(SlotConflict {
                        kind,
                        first,
                        second,
                        first_slot: *x,
                        second_slot: *y,
                    });
                }
            }
        }
    }

    conflicts
}
