//! Security middleware
//!
//! Axum middleware for nonce authentication and response security headers.

use axum::{
    body::Body,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::result::Result as StdResult;

use crate::api::app_state::AppState;
use crate::security::auth::{Claims, NONCE_HEADER};

/// Extension trait for reading and writing claims on a request
pub trait RequestClaimsExt {
    fn claims(&self) -> Option<&Claims>;
    fn set_claims(&mut self, claims: Claims);
}

impl RequestClaimsExt for Request<Body> {
    fn claims(&self) -> Option<&Claims> {
        self.extensions().get::<Claims>()
    }

    fn set_claims(&mut self, claims: Claims) {
        self.extensions_mut().insert(claims);
    }
}

/// Nonce authentication middleware
///
/// Rejects the request before any handler runs; on success the resolved
/// claims ride along as a request extension.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let nonce = req
        .headers()
        .get(NONCE_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string());

    match state.authenticator.authenticate(nonce.as_deref()).await {
        Ok(claims) => {
            req.set_claims(claims);
            next.run(req).await
        }
        Err(e) => e.into_response(),
    }
}

/// Response security headers middleware
pub async fn security_headers_middleware(
    req: Request<Body>,
    next: Next,
) -> StdResult<Response, StatusCode> {
    let mut response = next.run(req).await;

    response
        .headers_mut()
        .insert("X-Content-Type-Options", "nosniff".parse().unwrap());

    response
        .headers_mut()
        .insert("X-Frame-Options", "DENY".parse().unwrap());

    response.headers_mut().insert(
        "Referrer-Policy",
        "strict-origin-when-cross-origin".parse().unwrap(),
    );

    Ok(response)
}
