//! YAML export of settlement reports

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::SettlementExport;
use crate::services::SettlementReport;

/// Write a settlement report as YAML, preceded by a comment header
pub fn export_settlement_yaml<W: Write>(
    report: &SettlementReport,
    writer: &mut W,
) -> LedgerResult<()> {
    let export = SettlementExport::new(report);
    let io_err = |e: std::io::Error| LedgerError::Export(e.to_string());

    writeln!(writer, "# SplitLedger settlement plan: {}", export.group).map_err(io_err)?;
    writeln!(writer, "# Generated: {}", export.generated_at).map_err(io_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(io_err)?;
    writeln!(writer).map_err(io_err)?;

    serde_yaml::to_writer(&mut *writer, &export)
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}
