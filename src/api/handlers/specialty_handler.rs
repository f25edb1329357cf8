//! Specialty API handlers
//!
//! HTTP handlers for taxonomy CRUD and the assembled specialty forest.

use axum::{
    Json,
    extract::{Extension, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::specialty_dto::*},
    error::AppError,
    models::specialty::Specialty,
    security::auth::Claims,
    security::validation::sanitize_string,
    services::tree::build_tree,
};

/// Fetch the full specialty forest
///
/// GET /specialty-rebrand/v1/specialties
pub async fn get_specialties(
    State(state): State<AppState>,
    Extension(_claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Fetching specialty tree");

    let terms = state.specialty_repository.list_terms().await?;
    let tree: Vec<SpecialtyTreeNode> = build_tree(&terms).into_iter().map(Into::into).collect();

    Ok(Json(tree))
}

/// Fetch one specialty
///
/// GET /specialty-rebrand/v1/specialties/:id
pub async fn get_specialty(
    State(state): State<AppState>,
    Extension(_claims): Extension<Claims>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Fetching specialty: {}", id);

    let term = state
        .specialty_repository
        .get_term_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Specialty not found: {}", id)))?;

    Ok(Json(SpecialtyResponse {
        id: term.term_id,
        name: term.name,
        slug: term.slug,
        parent: term.parent,
    }))
}

/// Create a new specialty, optionally under a parent resolved by name
///
/// POST /specialty-rebrand/v1/specialties
pub async fn create_specialty(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<CreateSpecialtyRequest>,
) -> Result<impl IntoResponse, AppError> {
    let name = sanitize_string(&request.name);
    if name.is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }

    debug!("Creating specialty: {} for user: {}", name, claims.user_id);

    let mut parent_id = 0;
    let parent_name = request
        .parent_name
        .as_deref()
        .map(sanitize_string)
        .filter(|p| !p.is_empty());

    if let Some(parent_name) = parent_name.as_deref() {
        let parent = state
            .specialty_repository
            .get_term_by_name(parent_name)
            .await?
            .ok_or_else(|| {
                AppError::Validation(format!("Parent specialty not found: {}", parent_name))
            })?;
        parent_id = parent.term_id;
    }

    let term_id = state.specialty_repository.next_term_id().await?;
    let term = Specialty::new(term_id, &name, parent_id);

    let created = state.specialty_repository.create_term(&term).await?;

    let response = CreateSpecialtyResponse {
        id: created.term_id,
        name: created.name,
        parent: parent_id,
        parent_name,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Rename a specialty; the parent link never changes here
///
/// PUT /specialty-rebrand/v1/specialties/:id
pub async fn update_specialty(
    State(state): State<AppState>,
    Extension(_claims): Extension<Claims>,
    Path(id): Path<u64>,
    Json(request): Json<UpdateSpecialtyRequest>,
) -> Result<impl IntoResponse, AppError> {
    let name = sanitize_string(&request.name);
    if name.is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }

    debug!("Renaming specialty: {}", id);

    let mut term = state
        .specialty_repository
        .get_term_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Specialty not found: {}", id)))?;

    term.rename(&name);

    state.specialty_repository.update_term(id, &term).await?;

    Ok(Json(UpdateSpecialtyResponse {
        id: term.term_id,
        name: term.name,
        parent: term.parent,
    }))
}

/// Delete a specialty by id
///
/// DELETE /specialty-rebrand/v1/specialties/:id
///
/// Children keep their parent link; the tree assembler surfaces them as
/// roots from then on.
pub async fn delete_specialty(
    State(state): State<AppState>,
    Extension(_claims): Extension<Claims>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Deleting specialty: {}", id);

    state
        .specialty_repository
        .get_term_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Specialty not found: {}", id)))?;

    state.specialty_repository.delete_term(id).await?;

    Ok(Json(DeleteSpecialtyResponse {
        message: "Specialty deleted successfully".to_string(),
        id,
    }))
}
