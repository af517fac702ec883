//! HTTP handlers for all web routes.

pub mod api;
pub mod hub;
pub mod subject;
pub mod wizard;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::state::SharedState;
use crate::templates::Templates;

/// Render the not-found page with `message`, falling back to plain text if
/// the template itself fails.
pub(crate) fn not_found_page(templates: &Templates, message: &str) -> Response {
    match templates.render("not_found.html", minijinja::context! { message => message }) {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(_) => (StatusCode::NOT_FOUND, message.to_string()).into_response(),
    }
}

/// Fallback for any unmatched path.
pub async fn fallback(State(state): State<SharedState>) -> Response {
    not_found_page(&state.templates, "Page not found")
}
