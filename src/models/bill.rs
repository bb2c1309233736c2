//! Bill model
//!
//! A bill is one ledger entry, either a debit (expense) or a credit (income).
//! Every field is kept as text exactly as it is stored in the CSV ledger;
//! numeric interpretation of `valor` happens only when aggregating.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseFloatError;

use crate::error::{ContasError, ContasResult};

/// A single ledger entry
///
/// Field names double as the CSV header. Columns missing from a file are
/// read back as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bill {
    /// Entry type, "débito" or "crédito" by convention
    pub tipo: String,

    /// Free-text description, used as the lookup key for update/delete
    pub descricao: String,

    /// Monetary amount as text
    pub valor: String,

    /// Due date, "DD/MM/AAAA"
    pub data_vencimento: String,

    /// Receipt date (optional, free text)
    pub data_recebimento: String,

    /// Free-text category
    pub categoria: String,

    /// Free-text status ("pago"/"pendente" by convention)
    pub status: String,

    /// Free-text priority
    pub prioridade: String,

    /// Comments (optional)
    pub comentarios: String,
}

impl Bill {
    /// Read a field by name
    pub fn get(&self, field: BillField) -> &str {
        match field {
            BillField::Tipo => &self.tipo,
            BillField::Descricao => &self.descricao,
            BillField::Valor => &self.valor,
            BillField::DataVencimento => &self.data_vencimento,
            BillField::DataRecebimento => &self.data_recebimento,
            BillField::Categoria => &self.categoria,
            BillField::Status => &self.status,
            BillField::Prioridade => &self.prioridade,
            BillField::Comentarios => &self.comentarios,
        }
    }

    /// Overwrite a field by name
    pub fn set(&mut self, field: BillField, value: impl Into<String>) {
        let value = value.into();
        match field {
            BillField::Tipo => self.tipo = value,
            BillField::Descricao => self.descricao = value,
            BillField::Valor => self.valor = value,
            BillField::DataVencimento => self.data_vencimento = value,
            BillField::DataRecebimento => self.data_recebimento = value,
            BillField::Categoria => self.categoria = value,
            BillField::Status => self.status = value,
            BillField::Prioridade => self.prioridade = value,
            BillField::Comentarios => self.comentarios = value,
        }
    }

    /// Parse `valor` as a number
    pub fn amount(&self) -> ContasResult<f64> {
        parse_amount(&self.valor)
            .map_err(|_| ContasError::invalid_amount(&self.descricao, &self.valor))
    }

    /// The entry kind, only if `tipo` is exactly one of the stored forms
    pub fn kind(&self) -> Option<EntryKind> {
        EntryKind::from_stored(&self.tipo)
    }

    /// Month/year key taken from the due date
    ///
    /// This is the last two "/"-separated components of `data_vencimento`.
    /// Dates with fewer components yield whatever is there ("2024", "").
    pub fn month_key(&self) -> String {
        let parts: Vec<&str> = self.data_vencimento.split('/').collect();
        parts[parts.len().saturating_sub(2)..].join("/")
    }
}

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) {} venc. {}",
            self.descricao, self.tipo, self.valor, self.data_vencimento
        )
    }
}

/// Parse an amount the way it was typed: surrounding whitespace is ignored
pub fn parse_amount(value: &str) -> Result<f64, ParseFloatError> {
    value.trim().parse::<f64>()
}

/// Names of the bill fields, in storage order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BillField {
    Tipo,
    Descricao,
    Valor,
    DataVencimento,
    DataRecebimento,
    Categoria,
    Status,
    Prioridade,
    Comentarios,
}

impl BillField {
    /// Every field in the order used by the CSV header
    pub const ALL: [BillField; 9] = [
        BillField::Tipo,
        BillField::Descricao,
        BillField::Valor,
        BillField::DataVencimento,
        BillField::DataRecebimento,
        BillField::Categoria,
        BillField::Status,
        BillField::Prioridade,
        BillField::Comentarios,
    ];

    /// Column name in the ledger
    pub fn as_str(&self) -> &'static str {
        match self {
            BillField::Tipo => "tipo",
            BillField::Descricao => "descricao",
            BillField::Valor => "valor",
            BillField::DataVencimento => "data_vencimento",
            BillField::DataRecebimento => "data_recebimento",
            BillField::Categoria => "categoria",
            BillField::Status => "status",
            BillField::Prioridade => "prioridade",
            BillField::Comentarios => "comentarios",
        }
    }

    /// Look up a field by its column name
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name.trim())
    }

    /// The CSV header row
    pub fn header() -> [&'static str; 9] {
        Self::ALL.map(|f| f.as_str())
    }
}

impl fmt::Display for BillField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two kinds of entry the aggregations know about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Expense
    Debit,
    /// Income
    Credit,
}

impl EntryKind {
    /// Stored (accented) form
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Debit => "débito",
            EntryKind::Credit => "crédito",
        }
    }

    /// Exact match against the stored forms
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "débito" => Some(EntryKind::Debit),
            "crédito" => Some(EntryKind::Credit),
            _ => None,
        }
    }

    /// Lenient parse of user input: case-insensitive, accent optional
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "débito" | "debito" => Some(EntryKind::Debit),
            "crédito" | "credito" => Some(EntryKind::Credit),
            _ => None,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A partial set of new field values for an update
///
/// Blank values are dropped on insertion, so applying a patch never clears a
/// field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillPatch {
    fields: Vec<(BillField, String)>,
}

impl BillPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`BillPatch::set`]
    pub fn with(mut self, field: BillField, value: impl AsRef<str>) -> Self {
        self.set(field, value);
        self
    }

    /// Set a field, ignoring blank values; a later value for the same field wins
    pub fn set(&mut self, field: BillField, value: impl AsRef<str>) {
        let value = value.as_ref().trim();
        if value.is_empty() {
            return;
        }

        if let Some(slot) = self.fields.iter_mut().find(|(f, _)| *f == field) {
            slot.1 = value.to_string();
        } else {
            self.fields.push((field, value.to_string()));
        }
    }

    /// Value supplied for a field, if any
    pub fn get(&self, field: BillField) -> Option<&str> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BillField, &str)> {
        self.fields.iter().map(|(f, v)| (*f, v.as_str()))
    }

    /// Merge the supplied values into a bill
    pub fn apply(&self, bill: &mut Bill) {
        for (field, value) in &self.fields {
            bill.set(*field, value.clone());
        }
    }
}
