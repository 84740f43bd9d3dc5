//! Axum router for the subject CRUD surface.

mod error;
mod state;
pub mod subjects;

pub use error::ApiError;
pub use state::AppState;

use axum::Json;
use axum::Router;
use axum::routing::get;
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

/// Where successful create, edit, and delete submissions redirect.
pub const SUBJECTS_PATH: &str = "/subjects";

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route(SUBJECTS_PATH, get(subjects::list).post(subjects::create))
        .route("/subjects/new", get(subjects::new_form))
        .route("/subjects/{id}", get(subjects::detail))
        .route(
            "/subjects/{id}/edit",
            get(subjects::edit_form).post(subjects::update),
        )
        .route(
            "/subjects/{id}/delete",
            get(subjects::delete_form).post(subjects::destroy),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
