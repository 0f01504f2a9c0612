use crate::domain::model::CaseSubmission;
use crate::web::templates;
use crate::web::AppState;
use axum::extract::State;
use axum::response::Html;
use axum::{Form, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct Health {
    pub ok: bool,
    pub service: &'static str,
    pub backend: &'static str,
}

pub async fn home() -> Html<&'static str> {
    Html(templates::HOME_PAGE)
}

/// Always a full page with status 200, success or not.
pub async fn analyze(
    State(state): State<AppState>,
    Form(submission): Form<CaseSubmission>,
) -> Html<String> {
    let result = state.assistant.analyze(&submission.case_text).await;
    Html(templates::render_result(result.text()))
}

pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        ok: true,
        service: "medic-assist",
        backend: state.assistant.backend_name(),
    })
}
