//! Bill repository for CSV storage
//!
//! The whole ledger is one CSV file. Creation appends a row; update and
//! delete reload every row and rewrite the file from scratch.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ContasError;
use crate::models::{Bill, BillField, BillPatch};

use super::file_io::{append_csv, read_csv, write_csv_atomic};

/// Repository for bill persistence
pub struct BillRepository {
    path: PathBuf,
}

impl BillRepository {
    /// Create a new bill repository backed by the given CSV file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get the path of the ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a bill, writing the header first if the ledger is empty
    pub fn append(&self, bill: &Bill) -> Result<(), ContasError> {
        append_csv(&self.path, &BillField::header(), bill)?;
        debug!(descricao = %bill.descricao, "appended bill");
        Ok(())
    }

    /// Load every bill in file order; a missing ledger is an empty one
    pub fn load_all(&self) -> Result<Vec<Bill>, ContasError> {
        read_csv(&self.path)
    }

    /// Merge `patch` into every bill whose description equals `descricao`
    ///
    /// The file is always rewritten with a header, even when nothing matched.
    /// Returns whether at least one bill matched.
    pub fn update(&self, descricao: &str, patch: &BillPatch) -> Result<bool, ContasError> {
        let mut bills = self.load_all()?;
        let mut matched = 0usize;

        for bill in bills.iter_mut().filter(|b| b.descricao == descricao) {
            patch.apply(bill);
            matched += 1;
        }

        write_csv_atomic(&self.path, Some(&BillField::header()[..]), &bills)?;
        debug!(descricao, matched, "updated bills");

        Ok(matched > 0)
    }

    /// Remove every bill whose description equals `descricao`
    ///
    /// When no bills remain the file is left empty, without a header.
    /// Returns whether anything was removed.
    pub fn delete(&self, descricao: &str) -> Result<bool, ContasError> {
        let bills = self.load_all()?;
        let before = bills.len();

        let kept: Vec<Bill> = bills
            .into_iter()
            .filter(|b| b.descricao != descricao)
            .collect();

        let header = BillField::header();
        let header = if kept.is_empty() {
            None
        } else {
            Some(&header[..])
        };
        write_csv_atomic(&self.path, header, &kept)?;
        debug!(descricao, removed = before - kept.len(), "deleted bills");

        Ok(kept.len() != before)
    }
}
