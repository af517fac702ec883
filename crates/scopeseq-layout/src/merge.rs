//! Week slot → grid cell merging.

use serde::Serialize;
use scopeseq_common::CurriculumUnit;

use crate::normalise::WeekSlot;

/// A rendered table cell covering `span` consecutive weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridCell<'a> {
    pub content: WeekSlot<'a>,
    pub span: usize,
}

impl<'a> GridCell<'a> {
    pub fn unit(&self) -> Option<&'a CurriculumUnit> {
        self.content.unit()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Merge runs of slots holding the same unit (by name) into single cells.
///
/// Empty slots are never merged: each empty week is its own one-column cell.
/// The spans of the returned cells always add up to `slots.len()`.
pub fn merge_slots<'a>(slots: &[WeekSlot<'a>]) -> Vec<GridCell<'a>> {
    let mut cells = Vec::new();
    let mut week = 0;

    while week < slots.len() {
        let slot = slots[week];
        let span = if slot.is_empty() {
            1
        } else {
            1 + slots[week + 1..]
                .iter()
                .take_while(|next| slot.same_unit(next))
                .count()
        };
        cells.push(GridCell { content: slot, span });
        week += span;
    }

    cells
}

/// Expand cells back into one slot per week.
pub fn cells_to_slots<'a>(cells: &[GridCell<'a>]) -> Vec<WeekSlot<'a>> {
    cells
        .iter()
        .flat_map(|cell| std::iter::repeat(cell.content).take(cell.span))
        .collect()
}
