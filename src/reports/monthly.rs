//! Monthly Report
//!
//! Totals per entry type, grouped by the month/year of each bill's due date.
//! Months and type buckets keep the order in which the ledger first mentions
//! them; nothing is sorted.

use serde::Serialize;

use crate::error::ContasResult;
use crate::models::Bill;
use crate::storage::Storage;

/// Sum for one `total_<tipo>` bucket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketTotal {
    /// Bucket name, `"total_" + tipo`
    pub bucket: String,
    /// Sum of `valor` for the bucket
    pub amount: f64,
}

/// All buckets for one month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthTotals {
    /// Month key, normally "MM/YYYY"
    pub month: String,
    /// Buckets in first-seen order
    pub totals: Vec<BucketTotal>,
}

impl MonthTotals {
    fn add(&mut self, bucket: String, amount: f64) {
        match self.totals.iter_mut().find(|t| t.bucket == bucket) {
            Some(total) => total.amount += amount,
            None => self.totals.push(BucketTotal { bucket, amount }),
        }
    }
}

/// Monthly Report
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MonthlyReport {
    /// Months in first-seen order
    pub months: Vec<MonthTotals>,
}

impl MonthlyReport {
    /// Generate the report from the ledger
    pub fn generate(storage: &Storage) -> ContasResult<Self> {
        Self::from_bills(&storage.bills.load_all()?)
    }

    /// Aggregate a list of bills
    ///
    /// Fails on the first `valor` that does not parse; no partial report is
    /// returned.
    pub fn from_bills(bills: &[Bill]) -> ContasResult<Self> {
        let mut report = Self::default();

        for bill in bills {
            let amount = bill.amount()?;
            let month = bill.month_key();
            let bucket = format!("total_{}", bill.tipo);

            let index = match report.months.iter().position(|m| m.month == month) {
                Some(index) => index,
                None => {
                    report.months.push(MonthTotals {
                        month,
                        totals: Vec::new(),
                    });
                    report.months.len() - 1
                }
            };
            report.months[index].add(bucket, amount);
        }

        Ok(report)
    }

    /// True when the ledger had no bills
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Total for one month and bucket
    pub fn get(&self, month: &str, bucket: &str) -> Option<f64> {
        self.months
            .iter()
            .find(|m| m.month == month)?
            .totals
            .iter()
            .find(|t| t.bucket == bucket)
            .map(|t| t.amount)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        if self.is_empty() {
            return "Nenhuma conta registrada.\n".to_string();
        }

        let mut output = String::new();
        output.push_str("=== Relatório Mensal ===\n");

        for month in &self.months {
            output.push_str(&format!("\nMês: {}\n", month.month));
            for total in &month.totals {
                output.push_str(&format!(
                    "  {}: {} {:.2}\n",
                    capitalize(&total.bucket),
                    currency,
                    total.amount
                ));
            }
        }

        output
    }
}

/// Upper-case the first character and lower-case the rest
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContasError;

    fn bill(tipo: &str, valor: &str, vencimento: &str) -> Bill {
        Bill {
            tipo: tipo.into(),
            descricao: format!("{} {}", tipo, valor),
            valor: valor.into(),
            data_vencimento: vencimento.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_totals_by_month_and_type() {
        let bills = vec![
            bill("débito", "100", "10/05/2024"),
            bill("crédito", "40", "20/05/2024"),
        ];

        let report = MonthlyReport::from_bills(&bills).unwrap();

        assert_eq!(report.months.len(), 1);
        assert_eq!(report.months[0].month, "05/2024");
        assert_eq!(report.get("05/2024", "total_débito"), Some(100.0));
        assert_eq!(report.get("05/2024", "total_crédito"), Some(40.0));
    }

    #[test]
    fn test_first_seen_order() {
        let bills = vec![
            bill("crédito", "1", "01/07/2024"),
            bill("débito", "2", "01/05/2024"),
            bill("débito", "3", "02/07/2024"),
            bill("crédito", "4", "03/05/2024"),
        ];

        let report = MonthlyReport::from_bills(&bills).unwrap();

        let months: Vec<&str> = report.months.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(months, vec!["07/2024", "05/2024"]);

        let july: Vec<&str> = report.months[0]
            .totals
            .iter()
            .map(|t| t.bucket.as_str())
            .collect();
        assert_eq!(july, vec!["total_crédito", "total_débito"]);
        assert_eq!(report.get("05/2024", "total_débito"), Some(2.0));
    }

    #[test]
    fn test_sums_accumulate() {
        let bills = vec![
            bill("débito", "10.25", "01/05/2024"),
            bill("débito", "0.75", "15/05/2024"),
            bill("débito", "5", "31/05/2024"),
        ];

        let report = MonthlyReport::from_bills(&bills).unwrap();
        assert_eq!(report.get("05/2024", "total_débito"), Some(16.0));
    }

    #[test]
    fn test_unknown_type_gets_its_own_bucket() {
        let bills = vec![bill("transferência", "7", "01/05/2024")];

        let report = MonthlyReport::from_bills(&bills).unwrap();
        assert_eq!(report.get("05/2024", "total_transferência"), Some(7.0));
    }

    #[test]
    fn test_malformed_dates_give_degenerate_keys() {
        let bills = vec![bill("débito", "1", "2024"), bill("débito", "2", "")];

        let report = MonthlyReport::from_bills(&bills).unwrap();
        assert_eq!(report.get("2024", "total_débito"), Some(1.0));
        assert_eq!(report.get("", "total_débito"), Some(2.0));
    }

    #[test]
    fn test_invalid_amount_fails_whole_report() {
        let bills = vec![
            bill("débito", "10", "01/05/2024"),
            bill("débito", "dez", "01/05/2024"),
        ];

        let err = MonthlyReport::from_bills(&bills).unwrap_err();
        assert!(matches!(err, ContasError::InvalidAmount { .. }));
    }

    #[test]
    fn test_empty_ledger() {
        let report = MonthlyReport::from_bills(&[]).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.format_terminal("R$"), "Nenhuma conta registrada.\n");
    }

    #[test]
    fn test_format_terminal() {
        let report = MonthlyReport::from_bills(&[bill("débito", "100", "10/05/2024")]).unwrap();

        let output = report.format_terminal("R$");
        assert!(output.contains("Mês: 05/2024"));
        assert!(output.contains("Total_débito: R$ 100.00"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("total_crédito"), "Total_crédito");
        assert_eq!(capitalize("TOTAL_DÉBITO"), "Total_débito");
        assert_eq!(capitalize(""), "");
    }
}
