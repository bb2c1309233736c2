//! CLI command for data export

use crate::error::{ContasError, ContasResult};
use crate::export::{export_full_json, export_full_yaml};
use crate::storage::Storage;
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON format
    Json,
    /// YAML format (human-readable)
    Yaml,
}

/// Export the ledger with its aggregations to a file
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> ContasResult<()> {
    let file = File::create(&args.output).map_err(|e| {
        ContasError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match args.format {
        ExportFormat::Json => export_full_json(storage, &mut writer, args.pretty)?,
        ExportFormat::Yaml => export_full_yaml(storage, &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| ContasError::Export(e.to_string()))?;

    println!("Exportado para {}", args.output.display());
    Ok(())
}
