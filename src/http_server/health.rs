//! Health HTTP Route
//!
//! Reports the running version together with the page policy and template
//! set the server booted with.

use std::sync::Arc;

use axum::extract::State;
use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use super::state::WikiState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub front_page: String,
    pub templates: Vec<String>,
}

impl HealthResponse {
    pub fn from_state(state: &WikiState) -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
            front_page: state.policy().front_page().to_string(),
            templates: state.renderer().template_names().to_vec(),
        }
    }
}

/// Create the `/health` route
pub fn health_routes(state: Arc<WikiState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

async fn health_handler(State(state): State<Arc<WikiState>>) -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::from_state(&state)))
}
