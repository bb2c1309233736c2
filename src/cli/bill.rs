//! Bill CLI commands
//!
//! Non-interactive counterparts of the menu options for managing bills.

use clap::{Args, Subcommand};

use crate::display::format_bill_table;
use crate::error::{ContasError, ContasResult};
use crate::models::{BillField, BillPatch};
use crate::services::{BillService, CreateBillInput, SearchCriteria};
use crate::storage::Storage;

/// Optional bill fields shared by `add` and `update`
#[derive(Args, Debug, Default)]
pub struct BillFieldArgs {
    /// Payment date
    #[arg(long)]
    pub recebimento: Option<String>,

    /// Category (moradia, alimentação, lazer, outros, ...)
    #[arg(short, long)]
    pub categoria: Option<String>,

    /// Status (pago/pendente)
    #[arg(short, long)]
    pub status: Option<String>,

    /// Priority
    #[arg(short, long)]
    pub prioridade: Option<String>,

    /// Free-text comments
    #[arg(long)]
    pub comentarios: Option<String>,
}

/// Bill subcommands
#[derive(Subcommand, Debug)]
pub enum BillCommands {
    /// Add a new bill
    Add {
        /// Entry type (débito/crédito)
        tipo: String,
        /// Description
        descricao: String,
        /// Amount (e.g. 150.75)
        valor: String,
        /// Due date (DD/MM/AAAA)
        vencimento: String,
        #[command(flatten)]
        fields: BillFieldArgs,
    },

    /// List all bills
    #[command(alias = "ls")]
    List,

    /// Update every bill with the given description
    Update {
        /// Description of the bill(s) to update
        descricao: String,
        /// New entry type
        #[arg(short, long)]
        tipo: Option<String>,
        /// New description
        #[arg(long = "nova-descricao")]
        nova_descricao: Option<String>,
        /// New amount
        #[arg(short, long)]
        valor: Option<String>,
        /// New due date
        #[arg(long)]
        vencimento: Option<String>,
        #[command(flatten)]
        fields: BillFieldArgs,
    },

    /// Delete every bill with the given description
    #[command(alias = "rm")]
    Delete {
        /// Description of the bill(s) to delete
        descricao: String,
    },

    /// Search bills by type, category and status
    Search {
        /// Entry type
        #[arg(short, long)]
        tipo: Option<String>,
        /// Category
        #[arg(short, long)]
        categoria: Option<String>,
        /// Status
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,
    },
}

/// Handle a bill command
pub fn handle_bill_command(storage: &Storage, cmd: BillCommands) -> ContasResult<()> {
    let service = BillService::new(storage);

    match cmd {
        BillCommands::Add {
            tipo,
            descricao,
            valor,
            vencimento,
            fields,
        } => {
            let input = CreateBillInput {
                tipo,
                descricao,
                valor,
                data_vencimento: vencimento,
                data_recebimento: fields.recebimento.unwrap_or_default(),
                categoria: fields.categoria.unwrap_or_default(),
                status: fields.status.unwrap_or_default(),
                prioridade: fields.prioridade.unwrap_or_default(),
                comentarios: fields.comentarios.unwrap_or_default(),
            };
            service.create(input)?;
            println!("Conta criada com sucesso!");
        }

        BillCommands::List => {
            let bills = service.list()?;
            if bills.is_empty() {
                println!("Nenhuma conta cadastrada.");
            } else {
                print!("{}", format_bill_table(&bills));
            }
        }

        BillCommands::Update {
            descricao,
            tipo,
            nova_descricao,
            valor,
            vencimento,
            fields,
        } => {
            let mut patch = BillPatch::new();
            let values = [
                (BillField::Tipo, tipo),
                (BillField::Descricao, nova_descricao),
                (BillField::Valor, valor),
                (BillField::DataVencimento, vencimento),
                (BillField::DataRecebimento, fields.recebimento),
                (BillField::Categoria, fields.categoria),
                (BillField::Status, fields.status),
                (BillField::Prioridade, fields.prioridade),
                (BillField::Comentarios, fields.comentarios),
            ];
            for (field, value) in values {
                if let Some(value) = value {
                    patch.set(field, value);
                }
            }

            if patch.is_empty() {
                return Err(ContasError::Validation(
                    "Nothing to update: pass at least one new value".into(),
                ));
            }

            if service.update(&descricao, &patch)? {
                println!("Conta atualizada!");
            } else {
                println!("Conta não encontrada.");
            }
        }

        BillCommands::Delete { descricao } => {
            if service.delete(&descricao)? {
                println!("Conta deletada!");
            } else {
                println!("Conta não encontrada.");
            }
        }

        BillCommands::Search {
            tipo,
            categoria,
            status,
        } => {
            let criteria = SearchCriteria::new()
                .with(BillField::Tipo, tipo.unwrap_or_default())
                .with(BillField::Categoria, categoria.unwrap_or_default())
                .with(BillField::Status, status.unwrap_or_default());

            let bills = service.search(&criteria)?;
            if bills.is_empty() {
                println!("Nenhuma conta encontrada.");
            } else {
                print!("{}", format_bill_table(&bills));
            }
        }

        BillCommands::History { limit } => {
            let Some(audit) = storage.audit() else {
                println!("Auditoria desativada.");
                return Ok(());
            };

            let entries = audit.read_recent(limit)?;
            if entries.is_empty() {
                println!("Nenhuma alteração registrada.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
    }

    Ok(())
}
