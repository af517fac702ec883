//! Custom schedule wizard. Picks travel in the query string as repeated
//! `pick=subject|unit|term` values, so the page is a plain GET form.

use std::collections::BTreeMap;

use axum::{extract::State, response::Html};
use axum_extra::extract::Query;
use minijinja::context;
use serde::Deserialize;
use tracing::{debug, error};

use scopeseq_common::selection::{parse_pick, selection_key, Selection};
use scopeseq_common::{ApiError, SubjectData, SUBJECTS};

use crate::state::SharedState;
use crate::view::{schedule, wizard_unit, WizardSubjectView};

#[derive(Debug, Default, Deserialize)]
pub struct WizardQuery {
    #[serde(default)]
    pub pick: Vec<String>,
}

/// Fold the submitted picks into a selection. Each pick selects its unit
/// (once) and assigns the term.
pub fn selection_from_picks(
    subjects: &BTreeMap<String, SubjectData>,
    picks: &[String],
) -> Result<Selection, ApiError> {
    let mut selection = Selection::new();
    for raw in picks {
        let Some(pick) = parse_pick(raw)? else { continue };

        let subject = subjects
            .get(&pick.subject)
            .ok_or_else(|| ApiError::BadRequest(format!("Unknown subject in pick: {}", pick.subject)))?;
        let unit = subject
            .distinct_units()
            .into_iter()
            .find(|u| u.name == pick.unit_name)
            .ok_or_else(|| ApiError::BadRequest(format!("Unknown unit in pick: {}", pick.unit_name)))?;

        let id = selection_key(&subject.id, &unit.name);
        if !selection.contains(&id) {
            selection = selection.toggle(&unit.name, &subject.id, &subject.name, &unit.description, &unit.outcomes);
        }
        selection = selection.with_term(&id, i64::from(pick.term))?;
    }
    Ok(selection)
}

/// GET /wizard?pick=...
pub async fn wizard_page(
    State(state): State<SharedState>,
    Query(query): Query<WizardQuery>,
) -> Result<Html<String>, ApiError> {
    let subjects = state.store.all_subjects().await.map_err(|e| {
        error!(error = %e, "Error fetching subjects for wizard");
        ApiError::Internal("Failed to fetch subjects data".to_string())
    })?;

    let selection = selection_from_picks(&subjects, &query.pick)?;
    debug!(picks = query.pick.len(), selected = selection.len(), "Wizard selection built");

    let cards: Vec<WizardSubjectView> = SUBJECTS
        .iter()
        .filter_map(|meta| subjects.get(meta.id))
        .map(|subject| WizardSubjectView {
            id: subject.id.clone(),
            name: subject.name.clone(),
            emoji: subject.emoji.clone(),
            units: subject
                .distinct_units()
                .iter()
                .map(|unit| wizard_unit(subject, unit, &selection))
                .collect(),
        })
        .filter(|card| !card.units.is_empty())
        .collect();

    state
        .templates
        .render(
            "wizard.html",
            context! {
                title => "Custom Schedule",
                subjects => cards,
                schedule => schedule(&selection),
                selected => selection.len(),
            },
        )
        .map(Html)
}
