//! Assignment routes

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::app_state::AppState;
use crate::api::handlers::assignment_handler::*;

/// Create the assignment router
pub fn create_assignment_router() -> Router<AppState> {
    Router::new()
        .route("/assignments", post(handle_assignment))
        .route(
            "/assignments/by-specialty/:term_id",
            get(get_assignments_by_specialty),
        )
}
