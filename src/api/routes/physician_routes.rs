//! Physician routes

use axum::{Router, routing::get};

use crate::api::app_state::AppState;
use crate::api::handlers::physician_handler::*;

/// Create the physician router
pub fn create_physician_router() -> Router<AppState> {
    Router::new().route("/physicians/directory", get(get_directory))
}
