//! Physician directory DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::services::directory::{DirectoryCard, DirectoryGroup, DirectoryListing};

/// Query parameters for the directory listing
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DirectoryParams {
    /// Specialty slug to filter by
    pub specialty: Option<String>,
}

/// One directory card
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DirectoryCardDto {
    /// Physician id
    pub id: u64,
    /// Display name
    pub name: String,
    /// Job title line
    pub job_title: String,
    /// Practice locations
    pub locations: Vec<String>,
    /// Specialty slugs for the front-end filter
    pub specialties: Vec<String>,
}

impl From<DirectoryCard> for DirectoryCardDto {
    fn from(card: DirectoryCard) -> Self {
        DirectoryCardDto {
            id: card.id,
            name: card.name,
            job_title: card.job_title,
            locations: card.locations,
            specialties: card.specialties,
        }
    }
}

/// A child-term section of a sub-specialty page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DirectoryGroupDto {
    /// Child term id
    pub id: u64,
    /// Child term name
    pub name: String,
    /// Cards under this heading
    pub physicians: Vec<DirectoryCardDto>,
}

impl From<DirectoryGroup> for DirectoryGroupDto {
    fn from(group: DirectoryGroup) -> Self {
        DirectoryGroupDto {
            id: group.id,
            name: group.name,
            physicians: group.physicians.into_iter().map(Into::into).collect(),
        }
    }
}

/// Directory page payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DirectoryResponse {
    /// Cards for the requested specialty
    pub physicians: Vec<DirectoryCardDto>,
    /// Child-term sections
    pub groups: Vec<DirectoryGroupDto>,
}

impl From<DirectoryListing> for DirectoryResponse {
    fn from(listing: DirectoryListing) -> Self {
        DirectoryResponse {
            physicians: listing.physicians.into_iter().map(Into::into).collect(),
            groups: listing.groups.into_iter().map(Into::into).collect(),
        }
    }
}
