pub mod health;
pub mod reference;

use axum::{
    routing::{get, post},
    Router,
};

use crate::session::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/reference", get(reference::reference_handler))
        // Session lifecycle
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(handlers::handle_get_session).delete(handlers::handle_delete_session),
        )
        // Assessment
        .route("/api/v1/sessions/:id/ratings", post(handlers::handle_rate))
        .route(
            "/api/v1/sessions/:id/assessment/next",
            post(handlers::handle_next_section),
        )
        .route(
            "/api/v1/sessions/:id/assessment/previous",
            post(handlers::handle_previous_section),
        )
        .route(
            "/api/v1/sessions/:id/assessment/results",
            post(handlers::handle_view_results),
        )
        .route(
            "/api/v1/sessions/:id/scores",
            get(handlers::handle_get_scores),
        )
        // Navigation
        .route(
            "/api/v1/sessions/:id/page",
            post(handlers::handle_goto_page),
        )
        // Background profile
        .route(
            "/api/v1/sessions/:id/background",
            get(handlers::handle_get_background).put(handlers::handle_update_background),
        )
        // Recommendations + narrative analysis
        .route(
            "/api/v1/sessions/:id/recommendations",
            get(handlers::handle_get_recommendations),
        )
        .route(
            "/api/v1/sessions/:id/analysis",
            post(handlers::handle_generate_analysis),
        )
        .with_state(state)
}
