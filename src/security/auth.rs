//! Authentication module
//!
//! Every mutating and reading API route requires a request nonce issued by
//! the hosting environment. The service treats the nonce as opaque: it
//! verifies membership in the registered set and resolves the acting user
//! id, nothing more.

use async_trait::async_trait;
use std::collections::HashMap;
use uuid::Uuid;

use crate::config::config::SecurityConfig;
use crate::error::{AppError, Result};

/// Header carrying the request nonce
pub const NONCE_HEADER: &str = "X-Request-Nonce";

/// Authenticated request context
#[derive(Debug, Clone)]
pub struct Claims {
    /// Acting user id, recorded in the audit trail
    pub user_id: u64,
}

/// Authenticator trait
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Verify the presented nonce and resolve the acting user
    async fn authenticate(&self, nonce: Option<&str>) -> Result<Claims>;
}

/// Nonce-registry authenticator
pub struct NonceAuthenticator {
    nonces: HashMap<String, u64>,
    allow_anonymous: bool,
}

impl NonceAuthenticator {
    /// Build from the security configuration section
    pub fn from_config(config: &SecurityConfig) -> Self {
        let nonces = config
            .nonces
            .iter()
            .map(|entry| (entry.nonce.clone(), entry.user_id))
            .collect();

        Self {
            nonces,
            allow_anonymous: config.allow_anonymous,
        }
    }

    /// Development authenticator: one generated nonce plus anonymous access
    pub fn development() -> Self {
        let mut nonces = HashMap::new();
        nonces.insert(Uuid::new_v4().to_string(), 0);

        Self {
            nonces,
            allow_anonymous: true,
        }
    }
}

#[async_trait]
impl Authenticator for NonceAuthenticator {
    async fn authenticate(&self, nonce: Option<&str>) -> Result<Claims> {
        if let Some(nonce) = nonce {
            if let Some(user_id) = self.nonces.get(nonce) {
                return Ok(Claims { user_id: *user_id });
            }
        }

        if self.allow_anonymous {
            return Ok(Claims { user_id: 0 });
        }

        Err(AppError::Authentication(
            "missing or invalid request nonce".to_string(),
        ))
    }
}
