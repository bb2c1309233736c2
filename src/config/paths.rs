//! Path management for contas
//!
//! Every file the ledger touches lives in one base directory.
//!
//! ## Path Resolution Order
//!
//! 1. `--dir` command line flag
//! 2. `CONTAS_DIR` environment variable (handled by clap)
//! 3. The current working directory

use std::path::{Path, PathBuf};

use crate::error::ContasError;

use super::settings::Settings;

/// Name of the optional settings file inside the base directory
pub const SETTINGS_FILE: &str = "contas.json";

/// Manages all paths used by contas
#[derive(Debug, Clone)]
pub struct ContasPaths {
    /// Directory holding the ledger, settings and audit log
    base_dir: PathBuf,
}

impl ContasPaths {
    /// Paths rooted at the current working directory
    pub fn new() -> Self {
        Self::with_base_dir(PathBuf::from("."))
    }

    /// Create ContasPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join(SETTINGS_FILE)
    }

    /// Get the path to the CSV ledger
    pub fn storage_file(&self, settings: &Settings) -> PathBuf {
        self.base_dir.join(&settings.storage_file)
    }

    /// Get the default destination of the PDF report
    pub fn report_file(&self, settings: &Settings) -> PathBuf {
        self.base_dir.join(&settings.report_file)
    }

    /// Get the path to the audit log
    pub fn audit_log(&self, settings: &Settings) -> PathBuf {
        self.base_dir.join(&settings.audit_log_file)
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ContasError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ContasError::Io(format!("Failed to create base directory: {}", e)))
    }
}

impl Default for ContasPaths {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_is_current_dir() {
        let paths = ContasPaths::new();
        assert_eq!(paths.base_dir(), Path::new("."));
        assert_eq!(
            paths.storage_file(&Settings::default()),
            PathBuf::from(".").join("contas.csv")
        );
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContasPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();

        assert_eq!(paths.settings_file(), temp_dir.path().join("contas.json"));
        assert_eq!(
            paths.report_file(&settings),
            temp_dir.path().join("relatorio_contas.pdf")
        );
        assert_eq!(
            paths.audit_log(&settings),
            temp_dir.path().join("contas_audit.log")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("ledger");
        let paths = ContasPaths::with_base_dir(base.clone());

        paths.ensure_directories().unwrap();
        assert!(base.exists());
    }
}
