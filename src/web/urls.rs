use crate::web::views::{analyze, health, home};
use crate::web::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/analyze/", post(analyze))
        .route("/healthz", get(health))
        .with_state(state)
}
