//! Export module for contas
//!
//! Dumps the ledger plus its monthly and category aggregations:
//! - JSON: machine-readable
//! - YAML: human-readable

pub mod json;
pub mod yaml;

pub use json::{export_full_json, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
