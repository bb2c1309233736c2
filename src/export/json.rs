//! JSON Export functionality
//!
//! Exports the ledger together with both aggregations.

use crate::error::{ContasError, ContasResult};
use crate::models::Bill;
use crate::reports::{CategorySummary, MonthlyReport};
use crate::storage::Storage;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Number of bills exported
    pub bill_count: usize,

    /// Every bill in ledger order
    pub bills: Vec<Bill>,

    /// Totals per month and entry type
    pub monthly: MonthlyReport,

    /// Debit/credit totals per category
    pub categories: CategorySummary,
}

impl LedgerExport {
    /// Build an export from the ledger; fails if any amount is malformed
    pub fn from_storage(storage: &Storage) -> ContasResult<Self> {
        let bills = storage.bills.load_all()?;
        let monthly = MonthlyReport::from_bills(&bills)?;
        let categories = CategorySummary::from_bills(&bills)?;

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            bill_count: bills.len(),
            bills,
            monthly,
            categories,
        })
    }
}

/// Export the ledger to JSON
pub fn export_full_json<W: Write>(storage: &Storage, writer: &mut W, pretty: bool) -> ContasResult<()> {
    let export = LedgerExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| ContasError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| ContasError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ContasPaths, Settings};
    use crate::services::{BillService, CreateBillInput};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContasPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_export_contains_bills_and_reports() {
        let (_temp, storage) = create_test_storage();
        BillService::new(&storage)
            .create(CreateBillInput {
                tipo: "débito".into(),
                descricao: "Cinema".into(),
                valor: "20".into(),
                data_vencimento: "10/05/2024".into(),
                categoria: "lazer".into(),
                ..Default::default()
            })
            .unwrap();

        let mut buffer = Vec::new();
        export_full_json(&storage, &mut buffer, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["bill_count"], 1);
        assert_eq!(value["bills"][0]["descricao"], "Cinema");
        assert_eq!(value["monthly"]["months"][0]["month"], "05/2024");
        assert_eq!(value["categories"]["categories"][0]["total_debito"], 20.0);
    }

    #[test]
    fn test_export_empty_ledger() {
        let (_temp, storage) = create_test_storage();

        let mut buffer = Vec::new();
        export_full_json(&storage, &mut buffer, false).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["bill_count"], 0);
    }
}
