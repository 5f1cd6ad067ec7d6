//! Balance and settlement display formatting
//!
//! Formats net balances, settlement transfers, and pairwise debts for
//! terminal output.

use crate::models::{Balances, Currency, PairwiseDebt, Transfer};

/// Format net balances as a table, with a total row
pub fn format_balances(balances: &Balances, currency: &Currency) -> String {
    if balances.is_empty() {
        return "No participants in this group.".to_string();
    }

    let name_width = balances
        .iter()
        .map(|b| b.participant.name.len())
        .max()
        .unwrap_or(11)
        .max(11);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>12}  {}\n",
        "Participant",
        "Balance",
        "Status",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->12}  {:-<10}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for entry in balances {
        let status = if entry.balance.is_positive() {
            "is owed"
        } else if entry.balance.is_negative() {
            "owes"
        } else {
            "settled"
        };
        output.push_str(&format!(
            "{:<name_width$}  {:>12}  {}\n",
            entry.participant.name,
            currency.format(entry.balance),
            status,
            name_width = name_width,
        ));
    }

    output.push_str(&format!(
        "{:-<name_width$}  {:->12}\n",
        "",
        "",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:<name_width$}  {:>12}\n",
        "TOTAL",
        currency.format(balances.total()),
        name_width = name_width,
    ));

    output
}

/// Format a settlement plan, one transfer per line
pub fn format_transfers(transfers: &[Transfer], currency: &Currency) -> String {
    if transfers.is_empty() {
        return "Everyone is settled up.".to_string();
    }

    let from_width = transfers
        .iter()
        .map(|t| t.from.name.len())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for transfer in transfers {
        output.push_str(&format!(
            "  {:<from_width$} -> {}: {}\n",
            transfer.from.name,
            transfer.to.name,
            currency.format(transfer.amount),
            from_width = from_width,
        ));
    }
    output.push_str(&format!(
        "\n{} transfer{}\n",
        transfers.len(),
        if transfers.len() == 1 { "" } else { "s" }
    ));
    output
}

/// Format gross pairwise debts as `debtor owes creditor amount`
pub fn format_debts(debts: &[PairwiseDebt], currency: &Currency) -> String {
    if debts.is_empty() {
        return "Nobody owes anybody.".to_string();
    }

    let mut output = String::new();
    for debt in debts {
        output.push_str(&format!(
            "  {} owes {} {}\n",
            debt.debtor.name,
            debt.creditor.name,
            currency.format(debt.amount)
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NetBalance, Participant};

    fn balances() -> Balances {
        Balances::new(vec![
            NetBalance::new(Participant::new("Alice"), Money::from_minor(2500)),
            NetBalance::new(Participant::new("Bob"), Money::from_minor(-2500)),
            NetBalance::new(Participant::new("Carol"), Money::zero()),
        ])
    }

    #[test]
    fn test_format_balances() {
        let output = format_balances(&balances(), &Currency::default());
        assert!(output.contains("Alice"));
        assert!(output.contains("$25.00"));
        assert!(output.contains("-$25.00"));
        assert!(output.contains("settled"));
        assert!(output.contains("TOTAL"));
        assert!(output.contains("$0.00"));
    }

    #[test]
    fn test_format_empty() {
        let currency = Currency::default();
        assert!(format_balances(&Balances::default(), &currency).contains("No participants"));
        assert!(format_transfers(&[], &currency).contains("settled up"));
        assert!(format_debts(&[], &currency).contains("Nobody owes"));
    }

    #[test]
    fn test_format_transfers() {
        let transfers = vec![Transfer {
            from: Participant::new("Bob"),
            to: Participant::new("Alice"),
            amount: Money::from_minor(2500),
        }];
        let output = format_transfers(&transfers, &Currency::default());
        assert!(output.contains("Bob -> Alice: $25.00"));
        assert!(output.contains("1 transfer\n"));
    }

    #[test]
    fn test_format_debts() {
        let debts = vec![PairwiseDebt {
            debtor: Participant::new("Bob"),
            creditor: Participant::new("Alice"),
            amount: Money::from_minor(1050),
        }];
        let output = format_debts(&debts, &Currency::default());
        assert_eq!(output, "  Bob owes Alice $10.50\n");
    }
}
