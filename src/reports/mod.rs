//! Reports module for contas
//!
//! Provides the monthly totals report (terminal and PDF) and the
//! per-category debit/credit summary.

pub mod category;
pub mod monthly;
pub mod pdf;

pub use category::{CategorySummary, CategoryTotals};
pub use monthly::{BucketTotal, MonthTotals, MonthlyReport};
pub use pdf::{render_monthly_pdf, PageGeometry, RenderOutcome, ReportLayout};
