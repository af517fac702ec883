//! Term → week slot normalisation.

use scopeseq_common::CurriculumUnit;
use serde::Serialize;

/// One week column: either the unit running that week or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "unit", rename_all = "snake_case")]
pub enum WeekSlot<'a> {
    Unit(&'a CurriculumUnit),
    Empty,
}

impl<'a> WeekSlot<'a> {
    pub fn unit(&self) -> Option<&'a CurriculumUnit> {
        match *self {
            WeekSlot::Unit(unit) => Some(unit),
            WeekSlot::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, WeekSlot::Empty)
    }

    /// Units are compared by full name, never by identity or weeks.
    pub fn same_unit(&self, other: &WeekSlot<'_>) -> bool {
        match (self, other) {
            (WeekSlot::Unit(a), WeekSlot::Unit(b)) => a.name == b.name,
            _ => false,
        }
    }
}

/// Lay `term` out on exactly `total_weeks` slots.
///
/// Units are placed back to back from week 0. A unit that would run past the
/// last week is cut short, and units starting after the grid is full are
/// dropped. Units with `weeks <= 0` take no slots. Weeks no unit reaches
/// stay [`WeekSlot::Empty`].
pub fn normalise_term(term: &[CurriculumUnit], total_weeks: usize) -> Vec<WeekSlot<'_>> {
    let mut slots = vec![WeekSlot::Empty; total_weeks];
    let mut cursor = 0usize;

    for unit in term {
        if cursor >= total_weeks {
            break;
        }
        if unit.weeks <= 0 {
            continue;
        }
        let weeks = usize::try_from(unit.weeks).unwrap_or(usize::MAX);
        let end = cursor.saturating_add(weeks).min(total_weeks);
        for slot in &mut slots[cursor..end] {
            *slot = WeekSlot::Unit(unit);
        }
        cursor = end;
    }

    slots
}

/// Total weeks the term asks for, ignoring non-positive durations.
pub fn scheduled_weeks(term: &[CurriculumUnit]) -> i64 {
    term.iter().fold(0i64, |acc, u| acc.saturating_add(u.weeks.max(0)))
}
