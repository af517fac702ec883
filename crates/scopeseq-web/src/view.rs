//! View state and the serialisable view models handed to page templates.
//!
//! Nothing here is stored between requests: the query string is resolved into
//! a `ViewState`, which together with the catalog fully determines the page.

use serde::{Deserialize, Serialize};
use tracing::debug;

use scopeseq_common::catalog::{StageData, UnitDetails, UnitSummary, DEFAULT_UNIT_KEY};
use scopeseq_common::selection::{selection_key, Pick, SelectedUnit, Selection, MAX_TERM, MIN_TERM};
use scopeseq_common::stage::stage_label;
use scopeseq_common::SubjectData;
use scopeseq_config::GridConfig;
use scopeseq_layout::{layout_stage, scheduled_weeks, unit_slug, week_headers, HeaderCell};

/// Characters of a unit description shown on a wizard card.
const SNIPPET_CHARS: usize = 100;

#[derive(Debug, Default, Deserialize)]
pub struct SubjectQuery {
    pub stage: Option<String>,
    pub unit: Option<String>,
    /// Comma-separated panel sections to show expanded.
    pub open: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanelSections {
    pub outcomes: bool,
    pub unit_of_work: bool,
}

impl Default for PanelSections {
    fn default() -> Self {
        Self { outcomes: true, unit_of_work: false }
    }
}

impl PanelSections {
    /// `None` keeps the defaults; a list opens exactly the sections it names.
    pub fn from_param(open: Option<&str>) -> Self {
        let Some(list) = open else { return Self::default() };
        let names: Vec<&str> = list.split(',').map(str::trim).collect();
        Self {
            outcomes: names.contains(&"outcomes"),
            unit_of_work: names.contains(&"unit-of-work"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    pub active_stage: Option<String>,
    pub selected_unit: Option<String>,
    pub sections: PanelSections,
}

impl ViewState {
    /// Unknown stages fall back to the subject's first stage; the `"default"`
    /// unit or a blank one means nothing is selected.
    pub fn resolve(subject: &SubjectData, query: &SubjectQuery) -> Self {
        let active_stage = query
            .stage
            .as_deref()
            .filter(|id| subject.stage(id).is_some())
            .or_else(|| subject.default_stage())
            .map(str::to_string);

        let selected_unit = query
            .unit
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty() && *name != DEFAULT_UNIT_KEY)
            .map(str::to_string);

        Self {
            active_stage,
            selected_unit,
            sections: PanelSections::from_param(query.open.as_deref()),
        }
    }
}

// ---------------------------------------------------------------------------
// Subject viewer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct StageLink {
    pub id: String,
    pub label: String,
    pub active: bool,
}

pub fn stage_links(subject: &SubjectData, active: Option<&str>) -> Vec<StageLink> {
    subject
        .stage_ids()
        .into_iter()
        .filter_map(|id| {
            let stage = subject.stage(id)?;
            Some(StageLink {
                id: id.to_string(),
                label: stage_label(id, &stage.title),
                active: Some(id) == active,
            })
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct CellView {
    pub unit: Option<String>,
    pub weeks: Option<i64>,
    pub span: usize,
    pub slug: Option<String>,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RowView {
    pub term_number: usize,
    pub cells: Vec<CellView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridView {
    pub total_weeks: usize,
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<RowView>,
}

pub fn build_grid(stage: &StageData, grid: &GridConfig, selected: Option<&str>) -> GridView {
    for (i, term) in stage.terms.iter().enumerate() {
        let requested = scheduled_weeks(term);
        if requested > grid.total_weeks as i64 {
            debug!(
                stage = %stage.title,
                term = i + 1,
                requested,
                total_weeks = grid.total_weeks,
                "Term overflows the grid; trailing weeks clamped"
            );
        }
    }

    let rows = layout_stage(&stage.terms, grid.total_weeks)
        .into_iter()
        .map(|row| RowView {
            term_number: row.term_number,
            cells: row
                .cells
                .iter()
                .map(|cell| {
                    let unit = cell.unit();
                    CellView {
                        unit: unit.map(|u| u.name.clone()),
                        weeks: unit.map(|u| u.weeks),
                        span: cell.span,
                        slug: unit.map(|u| unit_slug(&u.name)),
                        selected: unit.is_some_and(|u| Some(u.name.as_str()) == selected),
                    }
                })
                .collect(),
        })
        .collect();

    GridView {
        total_weeks: grid.total_weeks,
        headers: week_headers(grid.total_weeks, grid.labelled_weeks),
        rows,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PanelView {
    pub name: String,
    pub details: Option<UnitDetails>,
    pub sections: PanelSections,
}

pub fn build_panel(subject: &SubjectData, state: &ViewState) -> Option<PanelView> {
    let name = state.selected_unit.as_deref()?;
    Some(PanelView {
        name: name.to_string(),
        details: subject.unit_details_or_default(name).cloned(),
        sections: state.sections,
    })
}

// ---------------------------------------------------------------------------
// Wizard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct PickOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct WizardUnitView {
    pub name: String,
    pub snippet: String,
    pub selected: bool,
    pub options: Vec<PickOption>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WizardSubjectView {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub units: Vec<WizardUnitView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleTermView {
    pub term: u8,
    pub units: Vec<SelectedUnit>,
}

pub fn snippet(description: &str) -> String {
    let mut s: String = description.chars().take(SNIPPET_CHARS).collect();
    s.push_str("...");
    s
}

pub fn wizard_unit(subject: &SubjectData, unit: &UnitSummary, selection: &Selection) -> WizardUnitView {
    let current = selection
        .get(&selection_key(&subject.id, &unit.name))
        .map(|s| s.term);

    let mut options = vec![PickOption {
        value: String::new(),
        label: "Not selected".to_string(),
        selected: current.is_none(),
    }];
    options.extend((MIN_TERM..=MAX_TERM).map(|term| PickOption {
        value: Pick { subject: subject.id.clone(), unit_name: unit.name.clone(), term }.encode(),
        label: format!("Term {term}"),
        selected: current == Some(term),
    }));

    WizardUnitView {
        name: unit.name.clone(),
        snippet: snippet(&unit.description),
        selected: current.is_some(),
        options,
    }
}

pub fn schedule(selection: &Selection) -> Vec<ScheduleTermView> {
    selection
        .grouped_by_term()
        .into_iter()
        .map(|(term, units)| ScheduleTermView { term, units })
        .collect()
}
