//! Physician directory handler

use axum::{
    Json,
    extract::{Extension, Query, State},
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::physician_dto::*},
    error::AppError,
    security::auth::Claims,
};

/// Build the directory payload, optionally filtered by specialty slug
///
/// GET /specialty-rebrand/v1/physicians/directory
pub async fn get_directory(
    State(state): State<AppState>,
    Extension(_claims): Extension<Claims>,
    Query(params): Query<DirectoryParams>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Building physician directory, specialty: {:?}", params.specialty);

    let listing = state
        .directory_service
        .directory(params.specialty.as_deref())
        .await?;

    Ok(Json(DirectoryResponse::from(listing)))
}
