//! Audit logging for contas
//!
//! Records every create, update and delete with before/after snapshots in an
//! append-only log.
//!
//! - `AuditEntry`: one log line with timestamp, operation, the bill's
//!   description and its snapshots.
//! - `AuditLogger`: appends entries to the log file as JSON lines.
//! - `generate_diff`: field-by-field summary of what an update changed.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
