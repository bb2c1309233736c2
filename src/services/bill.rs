//! Bill service
//!
//! Business logic on top of the bill repository: input normalization,
//! entry-type validation, audit logging, and exact-match search.

use tracing::{info, warn};

use crate::error::{ContasError, ContasResult};
use crate::models::{parse_amount, Bill, BillField, BillPatch, EntryKind};
use crate::storage::Storage;

/// Input for creating a new bill
#[derive(Debug, Clone, Default)]
pub struct CreateBillInput {
    pub tipo: String,
    pub descricao: String,
    pub valor: String,
    pub data_vencimento: String,
    pub data_recebimento: String,
    pub categoria: String,
    pub status: String,
    pub prioridade: String,
    pub comentarios: String,
}

/// Field → expected value filter for [`BillService::search`]
///
/// Empty values act as wildcards and are dropped on insertion.
#[derive(Debug, Clone, Default)]
pub struct SearchCriteria {
    criteria: Vec<(BillField, String)>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`SearchCriteria::set`]
    pub fn with(mut self, field: BillField, value: impl AsRef<str>) -> Self {
        self.set(field, value);
        self
    }

    /// Require `field` to equal `value` (case-insensitively); empty is ignored
    pub fn set(&mut self, field: BillField, value: impl AsRef<str>) {
        let value = value.as_ref();
        if !value.is_empty() {
            self.criteria.push((field, value.to_lowercase()));
        }
    }

    /// True when no criterion constrains the search
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Whether a bill satisfies every criterion
    pub fn matches(&self, bill: &Bill) -> bool {
        self.criteria
            .iter()
            .all(|(field, expected)| bill.get(*field).to_lowercase() == *expected)
    }
}

/// Service for bill management
pub struct BillService<'a> {
    storage: &'a Storage,
}

impl<'a> BillService<'a> {
    /// Create a new bill service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a bill and append it to the ledger
    pub fn create(&self, input: CreateBillInput) -> ContasResult<Bill> {
        let kind = parse_kind(&input.tipo)?;
        let valor = input.valor.trim().to_string();
        if parse_amount(&valor).is_err() {
            warn!(valor = %valor, "rejected bill with invalid amount");
            return Err(ContasError::invalid_amount(input.descricao.trim(), valor));
        }

        let bill = Bill {
            tipo: kind.as_str().to_string(),
            descricao: input.descricao.trim().to_string(),
            valor,
            data_vencimento: input.data_vencimento.trim().to_string(),
            data_recebimento: input.data_recebimento.trim().to_string(),
            categoria: input.categoria.trim().to_string(),
            status: input.status.trim().to_string(),
            prioridade: input.prioridade.trim().to_string(),
            comentarios: input.comentarios.trim().to_string(),
        };

        self.storage.bills.append(&bill)?;
        self.record_audit(self.storage.log_create(&bill));
        info!(descricao = %bill.descricao, "created bill");

        Ok(bill)
    }

    /// List every bill in ledger order
    pub fn list(&self) -> ContasResult<Vec<Bill>> {
        self.storage.bills.load_all()
    }

    /// Apply new values to every bill with the given description
    ///
    /// Returns whether any bill matched.
    pub fn update(&self, descricao: &str, patch: &BillPatch) -> ContasResult<bool> {
        let patch = normalize_patch(descricao, patch)?;

        let matching: Vec<Bill> = self
            .list()?
            .into_iter()
            .filter(|b| b.descricao == descricao)
            .collect();

        let updated = self.storage.bills.update(descricao, &patch)?;

        if updated {
            let changes: Vec<(Bill, Bill)> = matching
                .into_iter()
                .map(|before| {
                    let mut after = before.clone();
                    patch.apply(&mut after);
                    (before, after)
                })
                .collect();
            self.record_audit(self.storage.log_update(&changes));
            info!(descricao, count = changes.len(), "updated bills");
        }

        Ok(updated)
    }

    /// Delete every bill with the given description
    ///
    /// Returns whether any bill was removed.
    pub fn delete(&self, descricao: &str) -> ContasResult<bool> {
        let removed: Vec<Bill> = self
            .list()?
            .into_iter()
            .filter(|b| b.descricao == descricao)
            .collect();

        let deleted = self.storage.bills.delete(descricao)?;

        if deleted {
            self.record_audit(self.storage.log_delete(&removed));
            info!(descricao, count = removed.len(), "deleted bills");
        }

        Ok(deleted)
    }

    /// Bills matching every non-empty criterion, in ledger order
    pub fn search(&self, criteria: &SearchCriteria) -> ContasResult<Vec<Bill>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|b| criteria.matches(b))
            .collect())
    }

    /// Log an audit failure without failing the already-applied change
    fn record_audit(&self, result: ContasResult<()>) {
        if let Err(e) = result {
            warn!(error = %e, "failed to write audit entry");
        }
    }
}

fn parse_kind(tipo: &str) -> ContasResult<EntryKind> {
    EntryKind::parse(tipo).ok_or_else(|| {
        warn!(tipo, "rejected unknown entry type");
        ContasError::Validation(format!(
            "Tipo inválido '{}': use débito ou crédito",
            tipo.trim()
        ))
    })
}

/// Canonicalize `tipo` and check `valor` before anything is rewritten
fn normalize_patch(descricao: &str, patch: &BillPatch) -> ContasResult<BillPatch> {
    let mut normalized = BillPatch::new();

    for (field, value) in patch.iter() {
        match field {
            BillField::Tipo => normalized.set(field, parse_kind(value)?.as_str()),
            BillField::Valor => {
                if parse_amount(value).is_err() {
                    return Err(ContasError::invalid_amount(descricao, value));
                }
                normalized.set(field, value);
            }
            _ => normalized.set(field, value),
        }
    }

    Ok(normalized)
}
