//! Physician model
//!
//! Physician records are owned by the surrounding platform; this service
//! reads them and rewrites only the `specialty_ids` association.

use serde::{Deserialize, Serialize};

/// Publication status of a physician record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PhysicianStatus {
    /// Visible in directories
    #[serde(rename = "published")]
    Published,

    /// Hidden from directories
    #[serde(rename = "draft")]
    Draft,
}

impl std::fmt::Display for PhysicianStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhysicianStatus::Published => write!(f, "published"),
            PhysicianStatus::Draft => write!(f, "draft"),
        }
    }
}

/// A physician record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Physician {
    /// Record id
    pub physician_id: u64,

    /// Display name
    pub name: String,

    /// Job title shown on directory cards
    #[serde(default)]
    pub job_title: String,

    /// Practice locations
    #[serde(default)]
    pub locations: Vec<String>,

    /// Assigned specialty term ids
    #[serde(default)]
    pub specialty_ids: Vec<u64>,

    /// Publication status
    pub status: PhysicianStatus,
}

impl Physician {
    /// Whether the physician carries the given specialty assignment
    pub fn is_assigned_to(&self, term_id: u64) -> bool {
        self.specialty_ids.contains(&term_id)
    }

    /// Reduce to the id/name pair assignment listings carry
    pub fn summary(&self) -> PhysicianSummary {
        PhysicianSummary {
            id: self.physician_id,
            name: self.name.clone(),
        }
    }
}

/// Minimal physician representation for assignment listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicianSummary {
    /// Record id
    pub id: u64,
    /// Display name
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn physician(ids: &[u64]) -> Physician {
        Physician {
            physician_id: 101,
            name: "Dr. Jane Smith".to_string(),
            job_title: "Orthopaedic Surgeon".to_string(),
            locations: vec!["Maryville".to_string()],
            specialty_ids: ids.to_vec(),
            status: PhysicianStatus::Published,
        }
    }

    #[test]
    fn test_assignment_membership() {
        let p = physician(&[5, 7]);
        assert!(p.is_assigned_to(5));
        assert!(p.is_assigned_to(7));
        assert!(!p.is_assigned_to(9));
    }

    #[test]
    fn test_summary() {
        let p = physician(&[]);
        let summary = p.summary();
        assert_eq!(summary.id, 101);
        assert_eq!(summary.name, "Dr. Jane Smith");
    }
}
