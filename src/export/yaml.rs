//! YAML Export functionality
//!
//! Same content as the JSON export, in a human-readable format.

use crate::error::{ContasError, ContasResult};
use crate::export::json::LedgerExport;
use crate::storage::Storage;
use std::io::Write;

/// Export the ledger to YAML
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> ContasResult<()> {
    let export = LedgerExport::from_storage(storage)?;

    writeln!(writer, "# contas ledger export")
        .map_err(|e| ContasError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| ContasError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ContasError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ContasError::Export(e.to_string()))?;

    Ok(())
}
