//! Assignment DTOs
//!
//! Request and response serialization for the assignment API. The action
//! travels as a plain string so malformed values surface as our own 400,
//! not a body-deserialization failure.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::physician::PhysicianSummary;
use crate::services::assignment::{AssignmentOutcome, AssignmentPartition};

/// Bulk assignment request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignmentRequest {
    /// Physicians to mutate
    #[serde(default)]
    pub physician_ids: Vec<u64>,

    /// Specialty term applied or removed
    #[serde(default)]
    pub term_id: u64,

    /// `add` or `remove`, case-sensitive
    #[serde(default)]
    pub action: String,
}

/// Per-physician outcome of a bulk mutation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignmentOutcomeDto {
    /// Processed physician id
    pub physician_id: u64,
    /// Always `ok`
    pub status: String,
}

impl From<AssignmentOutcome> for AssignmentOutcomeDto {
    fn from(outcome: AssignmentOutcome) -> Self {
        AssignmentOutcomeDto {
            physician_id: outcome.physician_id,
            status: outcome.status,
        }
    }
}

/// Minimal physician representation in partition listings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PhysicianSummaryDto {
    /// Physician id
    pub id: u64,
    /// Display name
    pub name: String,
}

impl From<PhysicianSummary> for PhysicianSummaryDto {
    fn from(summary: PhysicianSummary) -> Self {
        PhysicianSummaryDto {
            id: summary.id,
            name: summary.name,
        }
    }
}

/// Assigned/unassigned split around one specialty
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PartitionResponse {
    /// Physicians carrying the specialty
    pub assigned: Vec<PhysicianSummaryDto>,
    /// Everyone else
    pub unassigned: Vec<PhysicianSummaryDto>,
}

impl From<AssignmentPartition> for PartitionResponse {
    fn from(partition: AssignmentPartition) -> Self {
        PartitionResponse {
            assigned: partition.assigned.into_iter().map(Into::into).collect(),
            unassigned: partition.unassigned.into_iter().map(Into::into).collect(),
        }
    }
}
