//! Specialty repository
//!
//! Persistence for taxonomy terms. The store allocates integer term ids;
//! the record key mirrors the id so lookups stay O(1).

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::models::specialty::Specialty;
use crate::storage::surrealdb::SurrealPool;

const TABLE: &str = "term";

/// Specialty repository trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpecialtyRepository: Send + Sync {
    /// Allocate the next free term id
    async fn next_term_id(&self) -> Result<u64>;

    /// Create a term
    async fn create_term(&self, term: &Specialty) -> Result<Specialty>;

    /// Get a term by id
    async fn get_term_by_id(&self, term_id: u64) -> Result<Option<Specialty>>;

    /// Get a term by exact name; the oldest term wins on duplicates
    async fn get_term_by_name(&self, name: &str) -> Result<Option<Specialty>>;

    /// Get a term by slug
    async fn get_term_by_slug(&self, slug: &str) -> Result<Option<Specialty>>;

    /// Update a term in place
    async fn update_term(&self, term_id: u64, term: &Specialty) -> Result<Option<Specialty>>;

    /// Delete a term; children keep their dangling parent link
    async fn delete_term(&self, term_id: u64) -> Result<bool>;

    /// List every term in id order
    async fn list_terms(&self) -> Result<Vec<Specialty>>;

    /// List the direct children of a term in id order
    async fn list_children(&self, term_id: u64) -> Result<Vec<Specialty>>;
}

/// SurrealDB-backed specialty repository
#[derive(Clone)]
pub struct SpecialtyRepositoryImpl {
    pool: SurrealPool,
}

impl SpecialtyRepositoryImpl {
    pub fn new(pool: SurrealPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SpecialtyRepository for SpecialtyRepositoryImpl {
    async fn next_term_id(&self) -> Result<u64> {
        let db = self.pool.inner().await;
        let rows: Vec<serde_json::Value> = db
            .query("SELECT math::max(term_id) AS max FROM term GROUP ALL")
            .await?
            .take(0)?;

        let max = rows
            .first()
            .and_then(|row| row.get("max"))
            .and_then(|v| v.as_u64())
            .unwrap_or(0);

        Ok(max + 1)
    }

    async fn create_term(&self, term: &Specialty) -> Result<Specialty> {
        let db = self.pool.inner().await;
        let created: Option<Specialty> = db
            .create((TABLE, term.term_id.to_string()))
            .content(term.clone())
            .await?;

        created.ok_or_else(|| {
            AppError::Database(format!("failed to create term: {}", term.term_id))
        })
    }

    async fn get_term_by_id(&self, term_id: u64) -> Result<Option<Specialty>> {
        let db = self.pool.inner().await;
        let result: Option<Specialty> = db.select((TABLE, term_id.to_string())).await?;
        Ok(result)
    }

    async fn get_term_by_name(&self, name: &str) -> Result<Option<Specialty>> {
        let db = self.pool.inner().await;
        let result: Vec<Specialty> = db
            .query("SELECT * FROM term WHERE name = $name ORDER BY term_id ASC LIMIT 1")
            .bind(("name", name.to_string()))
            .await?
            .take(0)?;
        Ok(result.into_iter().next())
    }

    async fn get_term_by_slug(&self, slug: &str) -> Result<Option<Specialty>> {
        let db = self.pool.inner().await;
        let result: Vec<Specialty> = db
            .query("SELECT * FROM term WHERE slug = $slug ORDER BY term_id ASC LIMIT 1")
            .bind(("slug", slug.to_string()))
            .await?
            .take(0)?;
        Ok(result.into_iter().next())
    }

    async fn update_term(&self, term_id: u64, term: &Specialty) -> Result<Option<Specialty>> {
        let db = self.pool.inner().await;
        let updated: Option<Specialty> = db
            .update((TABLE, term_id.to_string()))
            .content(term.clone())
            .await?;
        Ok(updated)
    }

    async fn delete_term(&self, term_id: u64) -> Result<bool> {
        let db = self.pool.inner().await;
        let deleted: Option<Specialty> = db.delete((TABLE, term_id.to_string())).await?;
        Ok(deleted.is_some())
    }

    async fn list_terms(&self) -> Result<Vec<Specialty>> {
        let db = self.pool.inner().await;
        let result: Vec<Specialty> = db
            .query("SELECT * FROM term ORDER BY term_id ASC")
            .await?
            .take(0)?;
        Ok(result)
    }

    async fn list_children(&self, term_id: u64) -> Result<Vec<Specialty>> {
        let db = self.pool.inner().await;
        let result: Vec<Specialty> = db
            .query("SELECT * FROM term WHERE parent = $parent ORDER BY term_id ASC")
            .bind(("parent", term_id))
            .await?
            .take(0)?;
        Ok(result)
    }
}
