//! Bill display formatting
//!
//! Renders bills as a terminal table.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Bill;

/// Longest comment shown before truncation
const MAX_CELL_CHARS: usize = 30;

#[derive(Tabled)]
struct BillRow {
    #[tabled(rename = "Tipo")]
    tipo: String,
    #[tabled(rename = "Descrição")]
    descricao: String,
    #[tabled(rename = "Valor")]
    valor: String,
    #[tabled(rename = "Vencimento")]
    data_vencimento: String,
    #[tabled(rename = "Recebimento")]
    data_recebimento: String,
    #[tabled(rename = "Categoria")]
    categoria: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Prioridade")]
    prioridade: String,
    #[tabled(rename = "Comentários")]
    comentarios: String,
}

impl From<&Bill> for BillRow {
    fn from(bill: &Bill) -> Self {
        Self {
            tipo: bill.tipo.clone(),
            descricao: bill.descricao.clone(),
            valor: bill.valor.clone(),
            data_vencimento: bill.data_vencimento.clone(),
            data_recebimento: bill.data_recebimento.clone(),
            categoria: bill.categoria.clone(),
            status: bill.status.clone(),
            prioridade: bill.prioridade.clone(),
            comentarios: truncate(&bill.comentarios),
        }
    }
}

/// Format bills as a table, one row per bill in the given order
pub fn format_bill_table(bills: &[Bill]) -> String {
    let rows: Vec<BillRow> = bills.iter().map(BillRow::from).collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    let mut output = table.to_string();
    output.push('\n');
    output.push_str(&format!("{} conta(s)\n", bills.len()));
    output
}

fn truncate(text: &str) -> String {
    if text.chars().count() > MAX_CELL_CHARS {
        let cut: String = text.chars().take(MAX_CELL_CHARS - 1).collect();
        format!("{}…", cut)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_contains_every_bill() {
        let bills = vec![
            Bill {
                tipo: "débito".into(),
                descricao: "Aluguel".into(),
                valor: "1200".into(),
                ..Default::default()
            },
            Bill {
                tipo: "crédito".into(),
                descricao: "Salário".into(),
                valor: "5000".into(),
                ..Default::default()
            },
        ];

        let output = format_bill_table(&bills);
        assert!(output.contains("Descrição"));
        assert!(output.contains("Aluguel"));
        assert!(output.contains("Salário"));
        assert!(output.contains("2 conta(s)"));
    }

    #[test]
    fn test_description_shown_in_full() {
        let descricao = "Parcela do financiamento do carro";
        let bills = vec![Bill {
            tipo: "débito".into(),
            descricao: descricao.into(),
            valor: "900".into(),
            comentarios: "c".repeat(45),
            ..Default::default()
        }];

        let output = format_bill_table(&bills);
        assert!(output.contains(descricao));
        assert!(!output.contains(&"c".repeat(45)));
    }

    #[test]
    fn test_truncate_long_text() {
        let long = "a".repeat(40);
        let cut = truncate(&long);
        assert_eq!(cut.chars().count(), MAX_CELL_CHARS);
        assert!(cut.ends_with('…'));

        assert_eq!(truncate("curto"), "curto");
    }
}
