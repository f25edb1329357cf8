//! Security module
//!
//! Request authentication for the API surface:
//! - nonce verification against the values the host environment issues
//! - axum middleware wiring the authenticated actor into the request
//! - input sanitization helpers

pub mod auth;
pub mod middleware;
pub mod validation;

pub use auth::{Authenticator, Claims, NONCE_HEADER, NonceAuthenticator};
pub use validation::sanitize_string;
