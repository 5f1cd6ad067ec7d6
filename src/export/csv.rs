//! CSV export of settlement reports
//!
//! One row per record. Balance rows leave `counterparty` empty; transfer rows
//! carry payer and payee. Amounts appear both formatted and in minor units.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Currency;
use crate::services::SettlementReport;

const HEADER: [&str; 6] = [
    "group",
    "record",
    "participant",
    "counterparty",
    "amount",
    "amount_minor",
];

/// Write a settlement report as CSV
pub fn export_settlement_csv<W: Write>(
    report: &SettlementReport,
    currency: &Currency,
    writer: W,
) -> LedgerResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(HEADER).map_err(export_error)?;

    for entry in &report.balances {
        let amount = currency.format_plain(entry.balance);
        let minor = entry.balance.minor().to_string();
        csv.write_record([
            report.group.as_str(),
            "balance",
            entry.participant.name.as_str(),
            "",
            amount.as_str(),
            minor.as_str(),
        ])
        .map_err(export_error)?;
    }

    for transfer in &report.transfers {
        let amount = currency.format_plain(transfer.amount);
        let minor = transfer.amount.minor().to_string();
        csv.write_record([
            report.group.as_str(),
            "transfer",
            transfer.from.name.as_str(),
            transfer.to.name.as_str(),
            amount.as_str(),
            minor.as_str(),
        ])
        .map_err(export_error)?;
    }

    csv.flush().map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}

fn export_error(err: csv::Error) -> LedgerError {
    LedgerError::Export(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Balances, Money, NetBalance, Participant, Transfer};
    use chrono::Utc;

    fn report() -> SettlementReport {
        let alice = Participant::new("Alice");
        let bob = Participant::new("Bob, Jr.");
        SettlementReport {
            group: "Trip".into(),
            generated_at: Utc::now(),
            balances: Balances::new(vec![
                NetBalance::new(alice.clone(), Money::from_minor(1250)),
                NetBalance::new(bob.clone(), Money::from_minor(-1250)),
            ]),
            transfers: vec![Transfer {
                from: bob,
                to: alice,
                amount: Money::from_minor(1250),
            }],
        }
    }

    #[test]
    fn test_csv_export() {
        let mut output = Vec::new();
        export_settlement_csv(&report(), &Currency::default(), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "group,record,participant,counterparty,amount,amount_minor",
                "Trip,balance,Alice,,12.50,1250",
                "Trip,balance,\"Bob, Jr.\",,-12.50,-1250",
                "Trip,transfer,\"Bob, Jr.\",Alice,12.50,1250",
            ]
        );
    }
}
