//! Physician repository
//!
//! Read access to externally owned physician records plus the one write
//! this service performs: rewriting a physician's `specialty_ids` set.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;
use crate::models::physician::Physician;
use crate::storage::surrealdb::SurrealPool;

const TABLE: &str = "physician";

/// Physician repository trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PhysicianRepository: Send + Sync {
    /// Get a physician by id
    async fn get_by_id(&self, physician_id: u64) -> Result<Option<Physician>>;

    /// List every published physician in id order
    async fn list_published(&self) -> Result<Vec<Physician>>;

    /// List published physicians assigned to a term, in id order
    async fn list_by_specialty(&self, term_id: u64) -> Result<Vec<Physician>>;

    /// Read a physician's assigned term ids; empty for unknown ids
    async fn get_specialty_ids(&self, physician_id: u64) -> Result<Vec<u64>>;

    /// Rewrite a physician's assigned term ids; no-ops for unknown ids
    async fn set_specialty_ids(&self, physician_id: u64, specialty_ids: &[u64]) -> Result<()>;
}

#[derive(Serialize)]
struct SpecialtyIdsPatch {
    specialty_ids: Vec<u64>,
}

/// SurrealDB-backed physician repository
#[derive(Clone)]
pub struct PhysicianRepositoryImpl {
    pool: SurrealPool,
}

impl PhysicianRepositoryImpl {
    pub fn new(pool: SurrealPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PhysicianRepository for PhysicianRepositoryImpl {
    async fn get_by_id(&self, physician_id: u64) -> Result<Option<Physician>> {
        let db = self.pool.inner().await;
        let result: Option<Physician> = db.select((TABLE, physician_id.to_string())).await?;
        Ok(result)
    }

    async fn list_published(&self) -> Result<Vec<Physician>> {
        let db = self.pool.inner().await;
        let result: Vec<Physician> = db
            .query("SELECT * FROM physician WHERE status = 'published' ORDER BY physician_id ASC")
            .await?
            .take(0)?;
        Ok(result)
    }

    async fn list_by_specialty(&self, term_id: u64) -> Result<Vec<Physician>> {
        let db = self.pool.inner().await;
        let result: Vec<Physician> = db
            .query(
                "SELECT * FROM physician \
                 WHERE status = 'published' AND $term_id IN specialty_ids \
                 ORDER BY physician_id ASC",
            )
            .bind(("term_id", term_id))
            .await?
            .take(0)?;
        Ok(result)
    }

    async fn get_specialty_ids(&self, physician_id: u64) -> Result<Vec<u64>> {
        let physician = self.get_by_id(physician_id).await?;
        Ok(physician.map(|p| p.specialty_ids).unwrap_or_default())
    }

    async fn set_specialty_ids(&self, physician_id: u64, specialty_ids: &[u64]) -> Result<()> {
        let db = self.pool.inner().await;

        // UPDATE on a missing record touches nothing; the caller still
        // reports the id as processed.
        let _updated: Option<Physician> = db
            .update((TABLE, physician_id.to_string()))
            .merge(SpecialtyIdsPatch {
                specialty_ids: specialty_ids.to_vec(),
            })
            .await?;

        Ok(())
    }
}
