//! Read-only JSON API over the catalog.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use tracing::error;

use scopeseq_common::stage::stage_label;
use scopeseq_common::{ApiError, ScopeError, SubjectData};
use scopeseq_layout::{layout_stage, week_headers, HeaderCell, TermRow};

use crate::state::SharedState;

/// GET /api/subjects/all - Every registered subject that has catalog data
pub async fn api_all_subjects(
    State(state): State<SharedState>,
) -> Result<Json<BTreeMap<String, SubjectData>>, ApiError> {
    let subjects = state.store.all_subjects().await.map_err(|e| {
        error!(error = %e, "Error fetching all subjects");
        ApiError::Internal("Failed to fetch subjects data".to_string())
    })?;
    Ok(Json(subjects))
}

/// GET /api/subjects/{subject_id} - One subject with registry metadata
pub async fn api_subject(
    State(state): State<SharedState>,
    Path(subject_id): Path<String>,
) -> Result<Json<SubjectData>, ApiError> {
    fetch_subject(&state, &subject_id).await.map(Json)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridResponse<'a> {
    pub subject: &'a str,
    pub stage: &'a str,
    pub label: String,
    pub total_weeks: usize,
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<TermRow<'a>>,
}

/// GET /api/subjects/{subject_id}/stages/{stage_id}/grid - Laid-out grid rows
pub async fn api_stage_grid(
    State(state): State<SharedState>,
    Path((subject_id, stage_id)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let subject = fetch_subject(&state, &subject_id).await?;
    let stage = subject
        .stage(&stage_id)
        .ok_or_else(|| ScopeError::StageNotFound { subject: subject_id.clone(), stage: stage_id.clone() })?;

    let total = state.grid.total_weeks;
    let resp = GridResponse {
        subject: &subject.id,
        stage: &stage_id,
        label: stage_label(&stage_id, &stage.title),
        total_weeks: total,
        headers: week_headers(total, state.grid.labelled_weeks),
        rows: layout_stage(&stage.terms, total),
    };
    // Rows borrow from `subject`, so serialise before it drops.
    Ok(Json(resp).into_response())
}

/// GET /api/health
pub async fn api_health(State(state): State<SharedState>) -> Result<impl IntoResponse, ApiError> {
    let subjects = state
        .store
        .all_subjects()
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Json(json!({ "status": "ok", "subjects": subjects.len() })))
}

async fn fetch_subject(state: &SharedState, subject_id: &str) -> Result<SubjectData, ApiError> {
    match state.store.get_subject(subject_id).await {
        Ok(Some(subject)) => Ok(subject),
        Ok(None) => Err(ScopeError::SubjectNotFound(subject_id.to_string()).into()),
        Err(e) => {
            error!(subject = subject_id, error = %e, "Error fetching subject");
            Err(ApiError::Internal("Failed to fetch subject data".to_string()))
        }
    }
}
