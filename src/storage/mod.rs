//! Storage layer for contas
//!
//! Provides the CSV ledger with atomic rewrites and the optional audit log.

pub mod bills;
pub mod file_io;

pub use bills::BillRepository;
pub use file_io::{append_csv, read_csv, write_csv_atomic};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{ContasPaths, Settings};
use crate::error::ContasError;
use crate::models::Bill;

/// Storage coordinator: the ledger plus its audit trail
pub struct Storage {
    paths: ContasPaths,
    pub bills: BillRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ContasPaths, settings: &Settings) -> Result<Self, ContasError> {
        paths.ensure_directories()?;

        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log(settings)));

        Ok(Self {
            bills: BillRepository::new(paths.storage_file(settings)),
            audit,
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ContasPaths {
        &self.paths
    }

    /// The audit logger, if auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Record a created bill
    pub fn log_create(&self, bill: &Bill) -> Result<(), ContasError> {
        self.log_entries(&[AuditEntry::create(bill)])
    }

    /// Record updated bills as (before, after) pairs
    pub fn log_update(&self, changes: &[(Bill, Bill)]) -> Result<(), ContasError> {
        let entries: Vec<AuditEntry> = changes
            .iter()
            .map(|(before, after)| AuditEntry::update(before, after))
            .collect();
        self.log_entries(&entries)
    }

    /// Record removed bills
    pub fn log_delete(&self, removed: &[Bill]) -> Result<(), ContasError> {
        let entries: Vec<AuditEntry> = removed.iter().map(AuditEntry::delete).collect();
        self.log_entries(&entries)
    }

    fn log_entries(&self, entries: &[AuditEntry]) -> Result<(), ContasError> {
        match &self.audit {
            Some(logger) => logger.log_batch(entries),
            None => Ok(()),
        }
    }
}
