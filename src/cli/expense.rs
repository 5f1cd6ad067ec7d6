//! Expense CLI commands
//!
//! Shares are given as repeated `--share NAME=VALUE` flags. For EXACT splits
//! VALUE is an amount in major units; for PERCENT splits it is a percentage.

use std::str::FromStr;

use clap::Subcommand;
use rust_decimal::Decimal;

use crate::display::format_expense_list;
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::LedgerConfig;
use crate::models::{Currency, ExactShare, PercentShare, SplitParams, SplitPolicy};
use crate::services::{ExpenseService, GroupService, NewExpense};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense in a group
    Add {
        /// Group name or ID
        group: String,
        /// Who paid
        #[arg(short, long)]
        payer: String,
        /// Total amount (e.g., "42.50")
        #[arg(short, long)]
        amount: String,
        /// Split policy: equal, exact, or percent
        #[arg(short, long, default_value = "equal")]
        split: String,
        /// Share as NAME=VALUE (repeatable; exact and percent splits)
        #[arg(long = "share", value_name = "NAME=VALUE")]
        shares: Vec<String>,
        /// What the expense was for
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// List a group's expenses
    List {
        /// Group name or ID
        group: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    config: &LedgerConfig,
    cmd: ExpenseCommands,
) -> LedgerResult<()> {
    match cmd {
        ExpenseCommands::Add {
            group,
            payer,
            amount,
            split,
            shares,
            description,
        } => {
            let total = config.currency.parse(&amount).map_err(|e| {
                LedgerError::Validation(format!("Invalid amount '{}': {}", amount, e))
            })?;
            let policy = SplitPolicy::from_str(&split)?;
            let params = parse_split_params(policy, &shares, &config.currency)?;

            let expense = ExpenseService::new(storage, config).add(NewExpense {
                group,
                payer,
                total,
                policy,
                params,
                description,
            })?;

            println!(
                "Recorded {} expense of {}",
                expense.policy,
                config.currency.format(expense.total)
            );
            println!("  ID: {}", expense.id);
        }

        ExpenseCommands::List { group } => {
            let groups = GroupService::new(storage);
            let found = groups.require(&group)?;
            let members = groups.members(&found)?;
            print!(
                "{}",
                format_expense_list(&found.expenses, &members, &config.currency)
            );
        }
    }

    Ok(())
}

/// Build split parameters from `NAME=VALUE` share arguments
pub fn parse_split_params(
    policy: SplitPolicy,
    shares: &[String],
    currency: &Currency,
) -> LedgerResult<SplitParams> {
    match policy {
        SplitPolicy::Equal => {
            if !shares.is_empty() {
                return Err(LedgerError::InvalidPolicy(
                    "EQUAL split takes no --share values".into(),
                ));
            }
            Ok(SplitParams::Equal)
        }
        SplitPolicy::Exact => shares
            .iter()
            .map(|raw| {
                let (name, value) = split_share(raw)?;
                let amount = currency.parse(value).map_err(|e| {
                    LedgerError::Validation(format!("Invalid share amount for {}: {}", name, e))
                })?;
                Ok(ExactShare {
                    participant: name.to_string(),
                    amount,
                })
            })
            .collect::<LedgerResult<Vec<_>>>()
            .map(SplitParams::Exact),
        SplitPolicy::Percent => shares
            .iter()
            .map(|raw| {
                let (name, value) = split_share(raw)?;
                let percent = Decimal::from_str(value.trim_end_matches('%').trim())
                    .map_err(|_| {
                        LedgerError::Validation(format!(
                            "Invalid percentage for {}: '{}'",
                            name, value
                        ))
                    })?;
                Ok(PercentShare {
                    participant: name.to_string(),
                    percent,
                })
            })
            .collect::<LedgerResult<Vec<_>>>()
            .map(SplitParams::Percent),
    }
}

fn split_share(raw: &str) -> LedgerResult<(&str, &str)> {
    raw.split_once('=')
        .map(|(name, value)| (name.trim(), value.trim()))
        .filter(|(name, value)| !name.is_empty() && !value.is_empty())
        .ok_or_else(|| {
            LedgerError::Validation(format!("Invalid share '{}': expected NAME=VALUE", raw))
        })
}
