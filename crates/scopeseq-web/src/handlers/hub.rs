//! Subject hub: one card per registered subject.

use axum::{
    extract::State,
    response::Html,
};
use minijinja::context;
use serde::Serialize;
use tracing::error;

use scopeseq_common::{ApiError, SUBJECTS};

use crate::state::SharedState;

#[derive(Debug, Serialize)]
struct SubjectCard {
    id: &'static str,
    name: &'static str,
    emoji: &'static str,
    /// Registered subjects without catalog data are listed but not linked.
    available: bool,
}

/// GET / - Subject hub
pub async fn hub_page(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    let available = state.store.all_subjects().await.map_err(|e| {
        error!(error = %e, "Error fetching subjects for hub");
        ApiError::Internal("Failed to fetch subjects data".to_string())
    })?;

    let cards: Vec<SubjectCard> = SUBJECTS
        .iter()
        .map(|meta| SubjectCard {
            id: meta.id,
            name: meta.name,
            emoji: meta.emoji,
            available: available.contains_key(meta.id),
        })
        .collect();

    state
        .templates
        .render("hub.html", context! { title => "Scope and Sequence", subjects => cards })
        .map(Html)
}
