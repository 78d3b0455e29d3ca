pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::plan::handlers as plan;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Plan API
        .route("/api/roles", get(plan::handle_catalog))
        .route("/api/rubric", post(plan::handle_rubric))
        .route("/api/summary", post(plan::handle_summary))
        // Generation API
        .route(
            "/api/generate",
            post(generation::handle_generate).fallback(generation::method_not_allowed),
        )
        .with_state(state)
}
