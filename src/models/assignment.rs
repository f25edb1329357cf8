//! Assignment model
//!
//! The action applied to a physician/specialty pair and the audit record
//! appended for every mutation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Direction of a bulk assignment mutation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AssignmentAction {
    /// Add the specialty to the physician's set
    #[serde(rename = "add")]
    Add,

    /// Remove the specialty from the physician's set
    #[serde(rename = "remove")]
    Remove,
}

impl AssignmentAction {
    /// Parse the wire value. Exactly `add` or `remove`, case-sensitive.
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "add" => Some(AssignmentAction::Add),
            "remove" => Some(AssignmentAction::Remove),
            _ => None,
        }
    }
}

impl std::fmt::Display for AssignmentAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignmentAction::Add => write!(f, "add"),
            AssignmentAction::Remove => write!(f, "remove"),
        }
    }
}

/// One audit trail entry
///
/// Append-only; nothing in the service reads these back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentRecord {
    /// Mutation time
    pub timestamp: DateTime<Utc>,

    /// Affected physician
    pub physician_id: u64,

    /// Specialty term applied or removed
    pub term_id: u64,

    /// Direction of the mutation
    pub action: AssignmentAction,

    /// Acting user
    pub user_id: u64,
}

impl AssignmentRecord {
    /// Create a record stamped with the current time
    pub fn new(physician_id: u64, term_id: u64, action: AssignmentAction, user_id: u64) -> Self {
        Self {
            timestamp: Utc::now(),
            physician_id,
            term_id,
            action,
            user_id,
        }
    }

    /// Render the audit file line
    pub fn to_log_line(&self) -> String {
        format!(
            "[{}] physician_id: {}, term_id: {}, action: {}, user_id: {}\n",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.physician_id,
            self.term_id,
            self.action,
            self.user_id
        )
    }
}
