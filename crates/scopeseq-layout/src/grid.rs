//! Row and header assembly for the scope grid.

use serde::Serialize;
use scopeseq_common::CurriculumUnit;

use crate::merge::{merge_slots, GridCell};
use crate::normalise::normalise_term;

/// One table row: a term's merged cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermRow<'a> {
    /// 1-based, as displayed ("Term 1").
    pub term_number: usize,
    pub cells: Vec<GridCell<'a>>,
}

/// A header cell above the week columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    pub label: String,
    pub span: usize,
}

/// Normalise and merge one term into a grid row numbered `term_number`.
pub fn layout_term(term: &[CurriculumUnit], term_number: usize, total_weeks: usize) -> TermRow<'_> {
    TermRow {
        term_number,
        cells: merge_slots(&normalise_term(term, total_weeks)),
    }
}

/// Lay out every term of a stage, one row per term in order.
pub fn layout_stage(terms: &[Vec<CurriculumUnit>], total_weeks: usize) -> Vec<TermRow<'_>> {
    terms
        .iter()
        .enumerate()
        .map(|(i, term)| layout_term(term, i + 1, total_weeks))
        .collect()
}

/// Week header labels. The first `labelled_weeks` weeks are labelled one by
/// one; whatever is left is grouped under a single header. This is display
/// grouping only and has no bearing on how unit cells merge.
pub fn week_headers(total_weeks: usize, labelled_weeks: usize) -> Vec<HeaderCell> {
    let labelled = labelled_weeks.min(total_weeks);
    let mut headers: Vec<HeaderCell> = (1..=labelled)
        .map(|week| HeaderCell { label: format!("Week {week}"), span: 1 })
        .collect();

    let first = labelled + 1;
    let label = match total_weeks - labelled {
        0 => return headers,
        1 => format!("Week {first}"),
        2 => format!("Weeks {first} & {}", first + 1),
        _ => format!("Weeks {first}-{total_weeks}"),
    };
    headers.push(HeaderCell { label, span: total_weeks - labelled });
    headers
}

/// Lower-case, dash-separated form of a unit name for element ids.
pub fn unit_slug(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn labels(headers: &[HeaderCell]) -> Vec<(&str, usize)> {
        headers.iter().map(|h| (h.label.as_str(), h.span)).collect()
    }

    #[test]
    fn test_layout_term_keeps_given_number() {
        let term = vec![CurriculumUnit::new("A", 3), CurriculumUnit::new("A", 2)];
        let row = layout_term(&term, 3, 10);
        assert_eq!(row.term_number, 3);
        assert_eq!(row.cells.len(), 6);
        assert_eq!(row.cells[0].span, 5);
    }

    #[test]
    fn test_default_headers() {
        let headers = week_headers(10, 8);
        assert_eq!(headers.len(), 9);
        assert_eq!(labels(&headers)[0], ("Week 1", 1));
        assert_eq!(labels(&headers)[7], ("Week 8", 1));
        assert_eq!(labels(&headers)[8], ("Weeks 9 & 10", 2));
    }

    #[test]
    fn test_header_tail_variants() {
        assert_eq!(labels(&week_headers(9, 8)).last().copied(), Some(("Week 9", 1)));
        assert_eq!(labels(&week_headers(11, 8)).last().copied(), Some(("Weeks 9-11", 3)));
        assert_eq!(week_headers(4, 8).len(), 4);
        assert!(week_headers(0, 8).is_empty());
    }

    #[test]
    fn test_header_spans_cover_grid() {
        for total in 0..15 {
            for labelled in 0..15 {
                let sum: usize = week_headers(total, labelled).iter().map(|h| h.span).sum();
                assert_eq!(sum, total, "total={total} labelled={labelled}");
            }
        }
    }

    #[test]
    fn test_layout_stage_numbers_terms() {
        let terms = vec![
            vec![CurriculumUnit::new("A", 10)],
            vec![],
            vec![CurriculumUnit::new("B", 4), CurriculumUnit::new("C", 6)],
        ];
        let rows = layout_stage(&terms, 10);
        assert_eq!(rows.iter().map(|r| r.term_number).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(rows[0].cells.len(), 1);
        assert_eq!(rows[1].cells.len(), 10);
        assert_eq!(rows[2].cells.len(), 2);
    }

    #[test]
    fn test_unit_slug() {
        assert_eq!(unit_slug("Living  World\tToday"), "living-world-today");
        assert_eq!(unit_slug("Money"), "money");
    }
}
