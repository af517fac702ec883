//! Exhaustive property checks over small terms.
//!
//! Every term of up to three units, with names drawn from a small pool (so
//! adjacent repeats occur) and durations from -1 to 6 weeks, is laid out on
//! grids of several widths.

use scopeseq_common::CurriculumUnit;
use scopeseq_layout::{
    cells_to_slots, layout_stage, merge_slots, normalise_term, scheduled_weeks, WeekSlot, TOTAL_WEEKS,
};

const NAMES: [&str; 3] = ["A", "B", "C"];
const WEEKS: std::ops::RangeInclusive<i64> = -1..=6;

fn all_terms(max_units: usize) -> Vec<Vec<CurriculumUnit>> {
    let mut terms: Vec<Vec<CurriculumUnit>> = vec![vec![]];
    let mut frontier = terms.clone();
    for _ in 0..max_units {
        let mut next = Vec::new();
        for term in &frontier {
            for name in NAMES {
                for weeks in WEEKS {
                    let mut t = term.clone();
                    t.push(CurriculumUnit::new(name, weeks));
                    next.push(t);
                }
            }
        }
        terms.extend(next.iter().cloned());
        frontier = next;
    }
    terms
}

fn for_each_case(mut check: impl FnMut(&[CurriculumUnit], usize)) {
    let terms = all_terms(3);
    for total in [0, 1, 5, TOTAL_WEEKS] {
        for term in &terms {
            check(term, total);
        }
    }
}

#[test]
fn slots_always_fill_the_grid_width() {
    for_each_case(|term, total| {
        assert_eq!(normalise_term(term, total).len(), total, "{term:?}");
    });
}

#[test]
fn exact_fit_has_no_empty_slots() {
    for_each_case(|term, total| {
        if scheduled_weeks(term) == total as i64 {
            assert!(normalise_term(term, total).iter().all(|s| !s.is_empty()), "{term:?}");
        }
    });
}

#[test]
fn underflow_empties_exactly_the_tail() {
    for_each_case(|term, total| {
        let sum = scheduled_weeks(term);
        if sum < total as i64 {
            let slots = normalise_term(term, total);
            let filled = sum as usize;
            assert!(slots[..filled].iter().all(|s| !s.is_empty()), "{term:?}");
            assert!(slots[filled..].iter().all(WeekSlot::is_empty), "{term:?}");
        }
    });
}

#[test]
fn overflow_drops_units_that_start_past_the_grid() {
    for_each_case(|term, total| {
        let slots = normalise_term(term, total);
        let mut cursor = 0i64;
        for unit in term {
            let present = slots
                .iter()
                .any(|s| s.unit().is_some_and(|u| std::ptr::eq(u, unit)));
            let fits = unit.weeks > 0 && cursor < total as i64;
            assert_eq!(present, fits, "{unit:?} in {term:?} (total {total})");
            cursor += unit.weeks.max(0);
        }
    });
}

#[test]
fn spans_sum_to_grid_width() {
    for_each_case(|term, total| {
        let cells = merge_slots(&normalise_term(term, total));
        assert_eq!(cells.iter().map(|c| c.span).sum::<usize>(), total, "{term:?}");
        assert!(cells.iter().all(|c| c.span >= 1));
    });
}

#[test]
fn empty_cells_are_single_weeks() {
    for_each_case(|term, total| {
        let cells = merge_slots(&normalise_term(term, total));
        assert!(cells.iter().filter(|c| c.is_empty()).all(|c| c.span == 1), "{term:?}");
    });
}

#[test]
fn neighbouring_unit_cells_never_share_a_name() {
    for_each_case(|term, total| {
        let cells = merge_slots(&normalise_term(term, total));
        for pair in cells.windows(2) {
            assert!(!pair[0].content.same_unit(&pair[1].content), "{term:?}");
        }
    });
}

#[test]
fn merge_is_idempotent() {
    for_each_case(|term, total| {
        let cells = merge_slots(&normalise_term(term, total));
        assert_eq!(merge_slots(&cells_to_slots(&cells)), cells, "{term:?}");
    });
}

#[test]
fn stage_rows_match_independent_term_layouts() {
    let terms = vec![
        vec![CurriculumUnit::new("A", 3), CurriculumUnit::new("B", 2)],
        vec![CurriculumUnit::new("A", 12)],
        vec![CurriculumUnit::new("A", 0), CurriculumUnit::new("B", 5)],
    ];
    let rows = layout_stage(&terms, TOTAL_WEEKS);
    for (row, term) in rows.iter().zip(&terms) {
        assert_eq!(row.cells, merge_slots(&normalise_term(term, TOTAL_WEEKS)));
    }
}
