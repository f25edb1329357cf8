//! Specialty routes

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::api::app_state::AppState;
use crate::api::handlers::specialty_handler::*;

/// Create the specialty router
pub fn create_specialty_router() -> Router<AppState> {
    Router::new()
        .route("/specialties", get(get_specialties))
        .route("/specialties", post(create_specialty))
        .route("/specialties/:id", get(get_specialty))
        .route("/specialties/:id", put(update_specialty))
        .route("/specialties/:id", delete(delete_specialty))
}
