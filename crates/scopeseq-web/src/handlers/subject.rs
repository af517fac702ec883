//! Scope and sequence viewer for a single subject.

use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Response},
};
use minijinja::context;
use tracing::error;

use scopeseq_common::stage::stage_label;
use scopeseq_common::ApiError;

use crate::handlers::not_found_page;
use crate::state::SharedState;
use crate::view::{build_grid, build_panel, stage_links, SubjectQuery, ViewState};

/// GET /subjects/{subject_id}?stage=&unit=&open=
pub async fn subject_page(
    State(state): State<SharedState>,
    Path(subject_id): Path<String>,
    Query(query): Query<SubjectQuery>,
) -> Result<Response, ApiError> {
    let subject = match state.store.get_subject(&subject_id).await {
        Ok(Some(subject)) => subject,
        Ok(None) => return Ok(not_found_page(&state.templates, "Subject not found")),
        Err(e) => {
            error!(subject = %subject_id, error = %e, "Error fetching subject");
            return Err(ApiError::Internal("Failed to fetch subject data".to_string()));
        }
    };

    let view = ViewState::resolve(&subject, &query);
    let stage = view
        .active_stage
        .as_deref()
        .and_then(|id| subject.stage(id).map(|stage| (id, stage)));

    let (label, grid) = match stage {
        Some((id, stage)) => (
            Some(stage_label(id, &stage.title)),
            Some(build_grid(stage, &state.grid, view.selected_unit.as_deref())),
        ),
        None => (None, None),
    };

    let html = state.templates.render(
        "subject.html",
        context! {
            title => subject.name.as_str(),
            subject => context! {
                id => subject.id.as_str(),
                name => subject.name.as_str(),
                emoji => subject.emoji.as_str(),
            },
            stages => stage_links(&subject, view.active_stage.as_deref()),
            stage_label => label,
            grid => grid,
            panel => build_panel(&subject, &view),
            view => &view,
        },
    )?;
    Ok(Html(html).into_response())
}
