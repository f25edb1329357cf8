//! Specialty DTOs
//!
//! Request and response serialization for the taxonomy API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::services::tree::SpecialtyNode;

/// Create-specialty request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateSpecialtyRequest {
    /// Term name
    #[serde(default)]
    pub name: String,

    /// Name of an existing term to file this one under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,
}

/// Rename-specialty request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateSpecialtyRequest {
    /// New term name
    #[serde(default)]
    pub name: String,
}

/// Response for a created specialty
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateSpecialtyResponse {
    /// Term id
    pub id: u64,
    /// Term name
    pub name: String,
    /// Parent term id, 0 for roots
    pub parent: u64,
    /// Parent name as requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,
}

/// Response for a renamed specialty
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateSpecialtyResponse {
    /// Term id
    pub id: u64,
    /// Term name
    pub name: String,
    /// Parent term id, unchanged by renames
    pub parent: u64,
}

/// Response for a single specialty
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SpecialtyResponse {
    /// Term id
    pub id: u64,
    /// Term name
    pub name: String,
    /// URL-safe identifier
    pub slug: String,
    /// Parent term id, 0 for roots
    pub parent: u64,
}

/// Response for a deleted specialty
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteSpecialtyResponse {
    /// Confirmation message
    pub message: String,
    /// Deleted term id
    pub id: u64,
}

/// One node of the specialty forest
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SpecialtyTreeNode {
    /// Term id
    pub id: u64,
    /// Term name, HTML entities decoded
    pub name: String,
    /// URL-safe identifier
    pub slug: String,
    /// Child terms
    pub children: Vec<SpecialtyTreeNode>,
}

impl From<SpecialtyNode> for SpecialtyTreeNode {
    fn from(node: SpecialtyNode) -> Self {
        SpecialtyTreeNode {
            id: node.id,
            name: node.name,
            slug: node.slug,
            children: node.children.into_iter().map(Into::into).collect(),
        }
    }
}
