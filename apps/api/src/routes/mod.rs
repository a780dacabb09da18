pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::state::AppState;
use crate::tracker::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/jobs",
            get(handlers::handle_list_jobs).post(handlers::handle_create_job),
        )
        .route(
            "/api/v1/jobs/:id",
            patch(handlers::handle_update_job).delete(handlers::handle_delete_job),
        )
        .route(
            "/api/v1/jobs/:id/analyze",
            post(handlers::handle_analyze_job),
        )
        .with_state(state)
}
