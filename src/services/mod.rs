//! Service layer for contas
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, audit logging and search.

pub mod bill;

pub use bill::{BillService, CreateBillInput, SearchCriteria};
