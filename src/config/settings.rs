//! User settings for contas
//!
//! Settings live in an optional `contas.json` next to the ledger. A missing
//! file, or a missing field, falls back to the defaults below, which reproduce
//! the classic layout: `contas.csv` and `relatorio_contas.pdf` in the working
//! directory.

use serde::{Deserialize, Serialize};

use super::paths::ContasPaths;
use crate::error::ContasError;

/// User settings for contas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// File name of the CSV ledger
    #[serde(default = "default_storage_file")]
    pub storage_file: String,

    /// File name of the PDF report when no output path is given
    #[serde(default = "default_report_file")]
    pub report_file: String,

    /// File name of the audit log
    #[serde(default = "default_audit_log_file")]
    pub audit_log_file: String,

    /// Whether mutations are written to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// Currency symbol used in reports
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_storage_file() -> String {
    "contas.csv".to_string()
}

fn default_report_file() -> String {
    "relatorio_contas.pdf".to_string()
}

fn default_audit_log_file() -> String {
    "contas_audit.log".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

fn default_currency() -> String {
    "R$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_file: default_storage_file(),
            report_file: default_report_file(),
            audit_log_file: default_audit_log_file(),
            audit_enabled: default_audit_enabled(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_default(paths: &ContasPaths) -> Result<Self, ContasError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ContasError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| ContasError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ContasPaths) -> Result<(), ContasError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ContasError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ContasError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
