use crate::config::config::DatabaseConfig;
use std::sync::Arc;
use surrealdb::{
    Surreal,
    engine::any::{Any, connect},
    opt::auth::Root,
};
use tokio::sync::Mutex;

/// SurrealDB connection pool
#[derive(Clone)]
pub struct SurrealPool {
    /// Database connection
    db: Arc<Mutex<Option<Surreal<Any>>>>,
    /// Connection configuration
    config: DatabaseConfig,
}

impl SurrealPool {
    /// Create a new connection pool
    pub async fn new(config: DatabaseConfig) -> Result<Self, surrealdb::Error> {
        let db: Surreal<Any> = connect(&config.url).await?;

        db.signin(Root {
            username: &config.username,
            password: &config.password,
        })
        .await?;

        db.use_ns(&config.namespace)
            .use_db(&config.database)
            .await?;

        Ok(Self {
            db: Arc::new(Mutex::new(Some(db))),
            config,
        })
    }

    /// Connection configuration
    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Get the inner database handle
    pub async fn inner(&self) -> Surreal<Any> {
        let guard = self.db.lock().await;
        guard.as_ref().expect("Database connection closed").clone()
    }

    /// Close the connection
    pub async fn close(&self) {
        let mut guard = self.db.lock().await;
        *guard = None;
    }
}
