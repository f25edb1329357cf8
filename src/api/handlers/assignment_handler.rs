//! Assignment API handlers
//!
//! HTTP handlers for bulk assignment mutations and per-specialty
//! partition listings.

use axum::{
    Json,
    extract::{Extension, Path, State},
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::assignment_dto::*},
    error::AppError,
    models::assignment::AssignmentAction,
    security::auth::Claims,
};

/// Apply an add/remove mutation to a batch of physicians
///
/// POST /specialty-rebrand/v1/assignments
///
/// Validation rejects the whole call before any mutation; past that point
/// each physician is processed independently with no rollback.
pub async fn handle_assignment(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<AssignmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let action = AssignmentAction::from_param(&request.action)
        .ok_or_else(|| AppError::Validation("Action must be add or remove".to_string()))?;

    if request.physician_ids.is_empty() {
        return Err(AppError::Validation(
            "Physician IDs must be a non-empty array".to_string(),
        ));
    }

    debug!(
        term_id = request.term_id,
        count = request.physician_ids.len(),
        action = %action,
        "Applying bulk assignment for user: {}",
        claims.user_id
    );

    let outcomes = state
        .assignment_service
        .apply(
            &request.physician_ids,
            request.term_id,
            action,
            claims.user_id,
        )
        .await?;

    let response: Vec<AssignmentOutcomeDto> = outcomes.into_iter().map(Into::into).collect();

    Ok(Json(response))
}

/// Partition every published physician around one specialty
///
/// GET /specialty-rebrand/v1/assignments/by-specialty/:term_id
pub async fn get_assignments_by_specialty(
    State(state): State<AppState>,
    Extension(_claims): Extension<Claims>,
    Path(term_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Partitioning physicians for specialty: {}", term_id);

    let partition = state
        .assignment_service
        .partition_by_specialty(term_id)
        .await?;

    Ok(Json(PartitionResponse::from(partition)))
}
