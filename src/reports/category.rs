//! Category Summary
//!
//! Debit and credit totals per free-text category.

use serde::Serialize;

use crate::error::ContasResult;
use crate::models::{Bill, EntryKind};
use crate::storage::Storage;

/// Totals for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotals {
    /// Category name as stored
    pub categoria: String,
    /// Sum of bills whose tipo is exactly "débito"
    pub total_debito: f64,
    /// Sum of bills whose tipo is exactly "crédito"
    pub total_credito: f64,
}

/// Category Summary
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategorySummary {
    /// Categories in first-seen order
    pub categories: Vec<CategoryTotals>,
}

impl CategorySummary {
    /// Generate the summary from the ledger
    pub fn generate(storage: &Storage) -> ContasResult<Self> {
        Self::from_bills(&storage.bills.load_all()?)
    }

    /// Aggregate a list of bills
    ///
    /// Bills of any other type still register their category, with nothing
    /// added to either total. Every `valor` must parse.
    pub fn from_bills(bills: &[Bill]) -> ContasResult<Self> {
        let mut summary = Self::default();

        for bill in bills {
            let amount = bill.amount()?;

            let index = match summary
                .categories
                .iter()
                .position(|c| c.categoria == bill.categoria)
            {
                Some(index) => index,
                None => {
                    summary.categories.push(CategoryTotals {
                        categoria: bill.categoria.clone(),
                        total_debito: 0.0,
                        total_credito: 0.0,
                    });
                    summary.categories.len() - 1
                }
            };

            let totals = &mut summary.categories[index];
            match bill.kind() {
                Some(EntryKind::Debit) => totals.total_debito += amount,
                Some(EntryKind::Credit) => totals.total_credito += amount,
                None => {}
            }
        }

        Ok(summary)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Totals for one category
    pub fn get(&self, categoria: &str) -> Option<&CategoryTotals> {
        self.categories.iter().find(|c| c.categoria == categoria)
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        if self.is_empty() {
            return "Nenhuma conta registrada.\n".to_string();
        }

        let mut output = String::new();
        for totals in &self.categories {
            output.push_str(&format!("Categoria: {}\n", totals.categoria));
            output.push_str(&format!(
                "  Total Débito: {} {:.2}\n",
                currency, totals.total_debito
            ));
            output.push_str(&format!(
                "  Total Crédito: {} {:.2}\n",
                currency, totals.total_credito
            ));
        }
        output
    }
}
