//! contas - personal bills ledger
//!
//! Records debits and credits ("contas") in a CSV file and offers
//! create/list/update/delete, case-insensitive search, per-category totals
//! and a monthly report rendered as a PDF.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and optional settings file
//! - `error`: Custom error types
//! - `models`: The bill record and its field/patch helpers
//! - `storage`: CSV ledger with atomic rewrites
//! - `audit`: JSON-lines audit trail of mutations
//! - `services`: Business logic layer (validation, search)
//! - `reports`: Monthly and per-category aggregations, PDF rendering
//! - `display`: Terminal tables
//! - `export`: JSON/YAML dumps
//! - `cli`: Subcommand handlers
//! - `shell`: The interactive numbered menu
//!
//! # Example
//!
//! ```rust,ignore
//! use contas::config::{ContasPaths, Settings};
//! use contas::storage::Storage;
//!
//! let paths = ContasPaths::new();
//! let settings = Settings::load_or_default(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod shell;
pub mod storage;

pub use error::{ContasError, ContasResult};
