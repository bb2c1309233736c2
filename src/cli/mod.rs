//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod bill;
pub mod export;
pub mod report;

pub use bill::{handle_bill_command, BillCommands, BillFieldArgs};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use report::{handle_report_command, ReportCommands};
