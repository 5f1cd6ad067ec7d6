//! Settlement report export command

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_settlement_csv, export_settlement_json, export_settlement_yaml};
use crate::ledger::LedgerConfig;
use crate::services::LedgerService;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV rows of balances and transfers
    Csv,
    /// JSON document
    Json,
    /// YAML document, human-readable
    Yaml,
}

/// Export a group's settlement report to a file or stdout
pub fn handle_export(
    storage: &Storage,
    config: &LedgerConfig,
    group: &str,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> LedgerResult<()> {
    let report = LedgerService::new(storage, config).settlement_plan(group)?;

    let mut writer: Box<dyn Write> = match &output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    match format {
        ExportFormat::Csv => export_settlement_csv(&report, &config.currency, &mut writer)?,
        ExportFormat::Json => export_settlement_json(&report, &mut writer, true)?,
        ExportFormat::Yaml => export_settlement_yaml(&report, &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    if let Some(path) = output {
        println!("Settlement plan for {} exported to: {}", report.group, path.display());
    }

    Ok(())
}
