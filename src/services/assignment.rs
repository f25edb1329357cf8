//! Assignment service
//!
//! Partitions physicians around a specialty and applies bulk add/remove
//! mutations, one audit line per touched physician.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::audit::AuditLog;
use crate::error::{AppError, Result};
use crate::models::assignment::{AssignmentAction, AssignmentRecord};
use crate::models::physician::{Physician, PhysicianSummary};
use crate::models::physician_repository::PhysicianRepository;
use crate::models::specialty_repository::SpecialtyRepository;

/// Result of partitioning physicians around one specialty
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentPartition {
    /// Physicians carrying the specialty
    pub assigned: Vec<PhysicianSummary>,
    /// Everyone else
    pub unassigned: Vec<PhysicianSummary>,
}

/// Per-physician outcome of a bulk mutation
///
/// Every input id reports `ok`; a write against an unknown physician
/// silently no-ops and is still reported as processed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentOutcome {
    /// Processed physician id
    pub physician_id: u64,
    /// Always `ok`
    pub status: String,
}

/// Split physicians into assigned/unassigned around a specialty.
///
/// A true partition: the two halves are disjoint and together cover the
/// input, in input order. Callers must reject a nonexistent term id before
/// calling; an unknown id here just yields an all-unassigned split.
pub fn partition(term_id: u64, physicians: &[Physician]) -> AssignmentPartition {
    let mut assigned = Vec::new();
    let mut unassigned = Vec::new();

    for physician in physicians {
        if physician.is_assigned_to(term_id) {
            assigned.push(physician.summary());
        } else {
            unassigned.push(physician.summary());
        }
    }

    AssignmentPartition {
        assigned,
        unassigned,
    }
}

/// Assignment service trait
#[async_trait]
pub trait AssignmentService: Send + Sync {
    /// Apply an add/remove mutation to each physician independently
    async fn apply(
        &self,
        physician_ids: &[u64],
        term_id: u64,
        action: AssignmentAction,
        user_id: u64,
    ) -> Result<Vec<AssignmentOutcome>>;

    /// Partition every published physician around an existing specialty
    async fn partition_by_specialty(&self, term_id: u64) -> Result<AssignmentPartition>;
}

/// Assignment service implementation
pub struct AssignmentServiceImpl {
    physician_repository: Arc<dyn PhysicianRepository>,
    specialty_repository: Arc<dyn SpecialtyRepository>,
    audit_log: Arc<AuditLog>,
}

impl AssignmentServiceImpl {
    pub fn new(
        physician_repository: Arc<dyn PhysicianRepository>,
        specialty_repository: Arc<dyn SpecialtyRepository>,
        audit_log: Arc<AuditLog>,
    ) -> Self {
        Self {
            physician_repository,
            specialty_repository,
            audit_log,
        }
    }
}

#[async_trait]
impl AssignmentService for AssignmentServiceImpl {
    async fn apply(
        &self,
        physician_ids: &[u64],
        term_id: u64,
        action: AssignmentAction,
        user_id: u64,
    ) -> Result<Vec<AssignmentOutcome>> {
        let mut outcomes = Vec::with_capacity(physician_ids.len());

        for &physician_id in physician_ids {
            let current = self
                .physician_repository
                .get_specialty_ids(physician_id)
                .await?;

            let updated = match action {
                AssignmentAction::Add => {
                    let mut ids = current;
                    if !ids.contains(&term_id) {
                        ids.push(term_id);
                    }
                    ids
                }
                AssignmentAction::Remove => {
                    current.into_iter().filter(|id| *id != term_id).collect()
                }
            };

            self.physician_repository
                .set_specialty_ids(physician_id, &updated)
                .await?;

            let record = AssignmentRecord::new(physician_id, term_id, action, user_id);
            if let Err(e) = self.audit_log.append(&record) {
                warn!("failed to append audit entry for physician {}: {}", physician_id, e);
            }

            debug!(
                physician_id,
                term_id,
                action = %action,
                "assignment applied"
            );

            outcomes.push(AssignmentOutcome {
                physician_id,
                status: "ok".to_string(),
            });
        }

        Ok(outcomes)
    }

    async fn partition_by_specialty(&self, term_id: u64) -> Result<AssignmentPartition> {
        let term = self
            .specialty_repository
            .get_term_by_id(term_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("specialty not found: {}", term_id)))?;

        debug!(term_id = term.term_id, "partitioning physicians");

        let physicians = self.physician_repository.list_published().await?;
        Ok(partition(term_id, &physicians))
    }
}

/// Create an assignment service
pub fn create_assignment_service(
    physician_repository: Arc<dyn PhysicianRepository>,
    specialty_repository: Arc<dyn SpecialtyRepository>,
    audit_log: Arc<AuditLog>,
) -> Box<dyn AssignmentService> {
    Box::new(AssignmentServiceImpl::new(
        physician_repository,
        specialty_repository,
        audit_log,
    ))
}
