use std::io::{stderr, stdin, stdout};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use contas::cli::{
    handle_bill_command, handle_export_command, handle_report_command, BillCommands, ExportArgs,
    ReportCommands,
};
use contas::config::{ContasPaths, Settings};
use contas::shell::Shell;
use contas::storage::Storage;

#[derive(Parser)]
#[command(
    name = "contas",
    version,
    about = "Gerenciador de contas pessoais",
    long_about = "Records debits and credits in a CSV ledger, with an interactive \
                  menu, search, per-category totals and a monthly PDF report."
)]
struct Cli {
    /// Directory holding the ledger, settings and audit log
    #[arg(long, global = true, env = "CONTAS_DIR", default_value = ".")]
    dir: PathBuf,

    /// Log level written to stderr (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "error")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (default)
    Menu,

    /// Bill management commands
    #[command(subcommand)]
    Bill(BillCommands),

    /// Reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export the ledger with its totals
    Export(ExportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(parse_log_level(&cli.log_level));

    let paths = ContasPaths::with_base_dir(cli.dir);
    let settings = Settings::load_or_default(&paths)?;
    let storage = Storage::new(paths, &settings)?;

    match cli.command {
        None | Some(Commands::Menu) => {
            let mut shell = Shell::new(&storage, &settings, stdin().lock(), stdout().lock());
            shell.run()?;
        }
        Some(Commands::Bill(cmd)) => handle_bill_command(&storage, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&storage, &settings, cmd)?,
        Some(Commands::Export(args)) => handle_export_command(&storage, args)?,
        Some(Commands::Config) => {
            let paths = storage.paths();
            println!("contas configuration");
            println!("====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Ledger:         {}", storage.bills.path().display());
            println!("PDF report:     {}", paths.report_file(&settings).display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            match storage.audit() {
                Some(audit) => println!("  Audit log:       {}", audit.path().display()),
                None => println!("  Audit log:       disabled"),
            }
        }
    }

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    // stdout carries the menu, so logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry().with(terminal_log).init();
}
