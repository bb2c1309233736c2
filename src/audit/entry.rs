//! Audit entry data structures
//!
//! Defines the operations that are audited and the shape of one log line.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Bill;

use super::diff::generate_diff;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Bill was appended
    Create,
    /// Bill was rewritten with new field values
    Update,
    /// Bill was removed
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
///
/// Bills have no identity beyond their description, so the entry keeps full
/// snapshots of the record before and after the operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Description of the affected bill (after the operation, for updates)
    pub descricao: String,

    /// The bill before the operation (updates/deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Bill>,

    /// The bill after the operation (creates/updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Bill>,

    /// Human-readable diff summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    /// Create a new audit entry for a create operation
    pub fn create(bill: &Bill) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            descricao: bill.descricao.clone(),
            before: None,
            after: Some(bill.clone()),
            diff_summary: None,
        }
    }

    /// Create a new audit entry for an update operation
    pub fn update(before: &Bill, after: &Bill) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            descricao: after.descricao.clone(),
            before: Some(before.clone()),
            after: Some(after.clone()),
            diff_summary: generate_diff(before, after),
        }
    }

    /// Create a new audit entry for a delete operation
    pub fn delete(bill: &Bill) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            descricao: bill.descricao.clone(),
            before: Some(bill.clone()),
            after: None,
            diff_summary: None,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.descricao
        );

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Alterações: {}", diff));
        }

        output
    }
}
