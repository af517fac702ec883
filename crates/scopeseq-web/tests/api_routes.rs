mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use common::{broken_app, get_json, sample_app};

fn cell_summary(row: &Value) -> Vec<(Option<String>, u64)> {
    row["cells"]
        .as_array()
        .unwrap()
        .iter()
        .map(|cell| {
            let name = cell["content"]["unit"]["name"].as_str().map(str::to_string);
            (name, cell["span"].as_u64().unwrap())
        })
        .collect()
}

fn named(name: &str, span: u64) -> (Option<String>, u64) {
    (Some(name.to_string()), span)
}

#[tokio::test]
async fn all_subjects_lists_registered_subjects_with_data() {
    let (status, body) = get_json(sample_app(), "/api/subjects/all").await;
    assert_eq!(status, StatusCode::OK);

    let keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["english", "maths", "science"]);
    assert_eq!(body["maths"]["emoji"], "➗");
}

#[tokio::test]
async fn subject_lookup() {
    let (status, body) = get_json(sample_app(), "/api/subjects/science").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "science");
    assert_eq!(body["name"], "Science");
    assert_eq!(body["scopeAndSequence"]["5"]["terms"][0][0]["weeks"], 12);

    let (status, body) = get_json(sample_app(), "/api/subjects/alchemy").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Subject not found" }));
}

#[tokio::test]
async fn store_failures_are_500s() {
    let (status, body) = get_json(broken_app(), "/api/subjects/all").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to fetch subjects data" }));

    let (status, body) = get_json(broken_app(), "/api/subjects/maths").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to fetch subject data" }));
}

#[tokio::test]
async fn stage_grid_merges_and_pads_terms() {
    let (status, body) = get_json(sample_app(), "/api/subjects/science/stages/4/grid").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["subject"], "science");
    assert_eq!(body["stage"], "4");
    assert_eq!(body["label"], "Years 7-8");
    assert_eq!(body["totalWeeks"], 10);
    assert_eq!(body["headers"].as_array().unwrap().len(), 9);
    assert_eq!(body["headers"][8], json!({ "label": "Weeks 9 & 10", "span": 2 }));

    let rows = body["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["termNumber"], 1);
    assert_eq!(cell_summary(&rows[0]), vec![named("Living World", 8), (None, 1), (None, 1)]);
    assert_eq!(cell_summary(&rows[1]), vec![named("Forces", 10)]);
    assert_eq!(cell_summary(&rows[2]), vec![named("Earth and Space", 6), named("Recycling", 4)]);
    assert_eq!(cell_summary(&rows[3]), vec![named("Chemical World", 9), (None, 1)]);
    assert_eq!(rows[0]["cells"][1]["content"], json!({ "kind": "empty" }));
}

#[tokio::test]
async fn stage_grid_clamps_overflow() {
    let (_, body) = get_json(sample_app(), "/api/subjects/science/stages/5/grid").await;
    assert_eq!(body["label"], "Years 9-10");
    assert_eq!(cell_summary(&body["rows"][0]), vec![named("Body Systems", 10)]);
    assert_eq!(body["rows"][0]["cells"][0]["content"]["unit"]["weeks"], 12);
}

#[tokio::test]
async fn stage_grid_empty_term_is_all_empty_cells() {
    let (_, body) = get_json(sample_app(), "/api/subjects/maths/stages/6/grid").await;
    assert_eq!(body["label"], "Years 11-12");
    assert_eq!(cell_summary(&body["rows"][3]), vec![(None, 1); 10]);
}

#[tokio::test]
async fn stage_grid_not_found() {
    let (status, body) = get_json(sample_app(), "/api/subjects/science/stages/9/grid").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Stage not found" }));

    let (status, _) = get_json(sample_app(), "/api/subjects/alchemy/stages/4/grid").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_reports_subject_count() {
    let (status, body) = get_json(sample_app(), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "subjects": 3 }));
}
