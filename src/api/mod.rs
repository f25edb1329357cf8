//! API module
//!
//! REST surface assembly. Taxonomy, assignment, and directory routes nest
//! under `/specialty-rebrand/v1` behind the nonce check; health and the
//! OpenAPI document stay open.

#[cfg(test)]
mod api_tests;
pub mod app_state;
pub mod dto;
pub mod handlers;
pub mod routes;

use axum::{Json, Router, middleware, routing::get};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::api::app_state::AppState;
use crate::security::middleware::{auth_middleware, security_headers_middleware};

/// OpenAPI document for the REST surface
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Specialty Rebrand API",
        description = "Specialty taxonomy and physician assignment service"
    ),
    components(schemas(
        dto::specialty_dto::CreateSpecialtyRequest,
        dto::specialty_dto::CreateSpecialtyResponse,
        dto::specialty_dto::UpdateSpecialtyRequest,
        dto::specialty_dto::UpdateSpecialtyResponse,
        dto::specialty_dto::SpecialtyResponse,
        dto::specialty_dto::DeleteSpecialtyResponse,
        dto::specialty_dto::SpecialtyTreeNode,
        dto::assignment_dto::AssignmentRequest,
        dto::assignment_dto::AssignmentOutcomeDto,
        dto::assignment_dto::PhysicianSummaryDto,
        dto::assignment_dto::PartitionResponse,
        dto::physician_dto::DirectoryCardDto,
        dto::physician_dto::DirectoryGroupDto,
        dto::physician_dto::DirectoryResponse,
    ))
)]
pub struct ApiDoc;

#[derive(Serialize)]
struct HealthResponse {
    service: &'static str,
    version: &'static str,
    status: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: "specialty-rebrand",
        version: env!("CARGO_PKG_VERSION"),
        status: "ok",
    })
}

async fn openapi_doc() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Assemble the application router
pub fn create_router(app_state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::specialty_routes::create_specialty_router())
        .merge(routes::assignment_routes::create_assignment_router())
        .merge(routes::physician_routes::create_physician_router())
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    Router::new()
        .nest("/specialty-rebrand/v1", api)
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_doc))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
