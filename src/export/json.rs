//! JSON export of settlement reports

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Balances, Transfer};
use crate::services::SettlementReport;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Settlement report wrapped with export metadata
#[derive(Debug, Clone, Serialize)]
pub struct SettlementExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Application version that created the export
    pub app_version: &'static str,

    pub group: &'a str,

    pub generated_at: DateTime<Utc>,

    /// Net balances in member order
    pub balances: &'a Balances,

    /// Transfers that settle the balances
    pub transfers: &'a [Transfer],
}

impl<'a> SettlementExport<'a> {
    pub fn new(report: &'a SettlementReport) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            app_version: env!("CARGO_PKG_VERSION"),
            group: &report.group,
            generated_at: report.generated_at,
            balances: &report.balances,
            transfers: &report.transfers,
        }
    }
}

/// Write a settlement report as JSON
pub fn export_settlement_json<W: Write>(
    report: &SettlementReport,
    writer: &mut W,
    pretty: bool,
) -> LedgerResult<()> {
    let export = SettlementExport::new(report);

    let written = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    };
    written.map_err(|e| LedgerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NetBalance, Participant};

    #[test]
    fn test_json_export() {
        let alice = Participant::new("Alice");
        let bob = Participant::new("Bob");
        let report = SettlementReport {
            group: "Trip".into(),
            generated_at: Utc::now(),
            balances: Balances::new(vec![
                NetBalance::new(alice.clone(), Money::from_minor(500)),
                NetBalance::new(bob.clone(), Money::from_minor(-500)),
            ]),
            transfers: vec![Transfer {
                from: bob,
                to: alice,
                amount: Money::from_minor(500),
            }],
        };

        let mut output = Vec::new();
        export_settlement_json(&report, &mut output, true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["group"], "Trip");
        assert_eq!(value["balances"][1]["participant"]["name"], "Bob");
        assert_eq!(value["balances"][1]["balance"], -500);
        assert_eq!(value["transfers"][0]["from"]["name"], "Bob");
        assert_eq!(value["transfers"][0]["amount"], 500);
    }
}
