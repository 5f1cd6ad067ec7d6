//! Balance, settlement, and debt report commands

use crate::display::{format_balances, format_debts, format_transfers};
use crate::error::LedgerResult;
use crate::ledger::LedgerConfig;
use crate::services::LedgerService;
use crate::storage::Storage;

/// Print every member's net balance in a group
pub fn handle_balances(storage: &Storage, config: &LedgerConfig, group: &str) -> LedgerResult<()> {
    let (group, balances) = LedgerService::new(storage, config).balances(group)?;
    println!("Balances for {}", group.name);
    println!();
    print!("{}", format_balances(&balances, &config.currency));
    Ok(())
}

/// Print the transfers that settle a group
pub fn handle_settle(storage: &Storage, config: &LedgerConfig, group: &str) -> LedgerResult<()> {
    let report = LedgerService::new(storage, config).settlement_plan(group)?;
    println!("Settlement plan for {}", report.group);
    println!();
    print!("{}", format_transfers(&report.transfers, &config.currency));
    Ok(())
}

/// Print gross who-owes-whom totals across all groups
pub fn handle_debts(storage: &Storage, config: &LedgerConfig) -> LedgerResult<()> {
    let debts = LedgerService::new(storage, config).pairwise_debts()?;
    print!("{}", format_debts(&debts, &config.currency));
    Ok(())
}
