//! Core data models for contas
//!
//! The ledger has a single entity, the bill, plus the small types used to
//! address and patch its fields.

pub mod bill;

pub use bill::{parse_amount, Bill, BillField, BillPatch, EntryKind};
