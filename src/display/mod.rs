//! Display formatting for terminal output

pub mod bill;

pub use bill::format_bill_table;
