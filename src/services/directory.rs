//! Physician directory service
//!
//! Builds the card data behind the public directory pages: a flat grid for
//! the requested specialty plus, for sub-specialty pages, one grid per
//! child term.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::error::{AppError, Result};
use crate::models::physician::Physician;
use crate::models::physician_repository::PhysicianRepository;
use crate::models::specialty_repository::SpecialtyRepository;

/// One directory card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryCard {
    /// Physician id
    pub id: u64,
    /// Display name
    pub name: String,
    /// Job title line under the name
    pub job_title: String,
    /// Practice locations, used by the location filter
    pub locations: Vec<String>,
    /// Slugs of the physician's specialties, used by the specialty filter
    pub specialties: Vec<String>,
}

/// A child-term section of a sub-specialty page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryGroup {
    /// Child term id
    pub id: u64,
    /// Child term name
    pub name: String,
    /// Cards under this heading
    pub physicians: Vec<DirectoryCard>,
}

/// A full directory page payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryListing {
    /// Cards for the requested specialty (or everyone when none given)
    pub physicians: Vec<DirectoryCard>,
    /// Child-term sections; empty except on sub-specialty pages
    pub groups: Vec<DirectoryGroup>,
}

/// Directory service trait
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// Build the directory payload for an optional specialty slug
    async fn directory(&self, slug: Option<&str>) -> Result<DirectoryListing>;
}

/// Directory service implementation
pub struct DirectoryServiceImpl {
    physician_repository: Arc<dyn PhysicianRepository>,
    specialty_repository: Arc<dyn SpecialtyRepository>,
}

impl DirectoryServiceImpl {
    pub fn new(
        physician_repository: Arc<dyn PhysicianRepository>,
        specialty_repository: Arc<dyn SpecialtyRepository>,
    ) -> Self {
        Self {
            physician_repository,
            specialty_repository,
        }
    }

    async fn slug_index(&self) -> Result<HashMap<u64, String>> {
        let terms = self.specialty_repository.list_terms().await?;
        Ok(terms.into_iter().map(|t| (t.term_id, t.slug)).collect())
    }

    fn card(physician: &Physician, slugs: &HashMap<u64, String>) -> DirectoryCard {
        DirectoryCard {
            id: physician.physician_id,
            name: physician.name.clone(),
            job_title: physician.job_title.clone(),
            locations: physician.locations.clone(),
            specialties: physician
                .specialty_ids
                .iter()
                .filter_map(|id| slugs.get(id).cloned())
                .collect(),
        }
    }
}

#[async_trait]
impl DirectoryService for DirectoryServiceImpl {
    async fn directory(&self, slug: Option<&str>) -> Result<DirectoryListing> {
        let slugs = self.slug_index().await?;

        let Some(slug) = slug else {
            let physicians = self.physician_repository.list_published().await?;
            return Ok(DirectoryListing {
                physicians: physicians.iter().map(|p| Self::card(p, &slugs)).collect(),
                groups: Vec::new(),
            });
        };

        let term = self
            .specialty_repository
            .get_term_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("specialty not found: {}", slug)))?;

        debug!(term_id = term.term_id, slug, "building directory listing");

        let physicians = self
            .physician_repository
            .list_by_specialty(term.term_id)
            .await?;

        // Child sections appear on sub-specialty pages only; top-level
        // pages render the flat grid alone.
        let mut groups = Vec::new();
        if !term.is_root() {
            for child in self
                .specialty_repository
                .list_children(term.term_id)
                .await?
            {
                let members = self
                    .physician_repository
                    .list_by_specialty(child.term_id)
                    .await?;
                if members.is_empty() {
                    continue;
                }
                groups.push(DirectoryGroup {
                    id: child.term_id,
                    name: child.name.clone(),
                    physicians: members.iter().map(|p| Self::card(p, &slugs)).collect(),
                });
            }
        }

        Ok(DirectoryListing {
            physicians: physicians.iter().map(|p| Self::card(p, &slugs)).collect(),
            groups,
        })
    }
}

/// Create a directory service
pub fn create_directory_service(
    physician_repository: Arc<dyn PhysicianRepository>,
    specialty_repository: Arc<dyn SpecialtyRepository>,
) -> Box<dyn DirectoryService> {
    Box::new(DirectoryServiceImpl::new(
        physician_repository,
        specialty_repository,
    ))
}
