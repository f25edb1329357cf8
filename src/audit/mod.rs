//! Assignment audit trail
//!
//! Append-only file of one line per assignment mutation. Write-only: the
//! service never reads it back, operators do.

use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use crate::error::Result;
use crate::models::assignment::AssignmentRecord;

/// Append-only audit log
pub struct AuditLog {
    file: Mutex<File>,
}

impl AuditLog {
    /// Open the audit file for appending, creating it and its parent
    /// directory when missing.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            file: Mutex::new(file),
        })
    }

    /// Append one record. Entries from concurrent writers may interleave;
    /// each line is written in a single call.
    pub fn append(&self, record: &AssignmentRecord) -> Result<()> {
        let line = record.to_log_line();

        let mut file = self.file.lock();
        file.write_all(line.as_bytes())?;
        file.flush()?;

        debug!(
            physician_id = record.physician_id,
            term_id = record.term_id,
            action = %record.action,
            "audit entry appended"
        );

        Ok(())
    }
}

/// Create a shared audit log handle
pub fn create_audit_log(path: &Path) -> Result<Arc<AuditLog>> {
    Ok(Arc::new(AuditLog::open(path)?))
}
