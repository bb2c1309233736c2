//! CLI commands for reports
//!
//! Prints the monthly and per-category totals, or renders the monthly
//! report as a PDF.

use crate::config::Settings;
use crate::error::ContasResult;
use crate::reports::{render_monthly_pdf, CategorySummary, MonthlyReport, RenderOutcome};
use crate::storage::Storage;
use clap::Subcommand;
use std::path::PathBuf;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Print totals per month and entry type
    Monthly,

    /// Print debit and credit totals per category
    #[command(alias = "summary")]
    Categories,

    /// Render the monthly report as a PDF
    Pdf {
        /// Output file (defaults to the configured report file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> ContasResult<()> {
    match cmd {
        ReportCommands::Monthly => {
            let report = MonthlyReport::generate(storage)?;
            print!("{}", report.format_terminal(&settings.currency_symbol));
        }
        ReportCommands::Categories => {
            let summary = CategorySummary::generate(storage)?;
            print!("{}", summary.format_terminal(&settings.currency_symbol));
        }
        ReportCommands::Pdf { output } => {
            let path = output.unwrap_or_else(|| storage.paths().report_file(settings));
            let report = MonthlyReport::generate(storage)?;

            match render_monthly_pdf(&report, &path, &settings.currency_symbol)? {
                RenderOutcome::Written(path) => {
                    println!("Relatório salvo em {}", path.display())
                }
                RenderOutcome::Empty => println!("Nenhuma conta para gerar relatório."),
            }
        }
    }

    Ok(())
}
