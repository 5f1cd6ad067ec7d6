//! Ledger reporting service
//!
//! Joins stored groups with their participants and hands the result to the
//! ledger engine for balances, settlement plans, and pairwise debts.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::LedgerResult;
use crate::ledger::{compute_balances, pairwise_debts, settle, LedgerConfig};
use crate::models::{Balances, Group, PairwiseDebt, Transfer};
use crate::storage::Storage;

use super::group::GroupService;

/// Balances and the transfers that settle them, for one group
#[derive(Debug, Clone, Serialize)]
pub struct SettlementReport {
    pub group: String,
    pub generated_at: DateTime<Utc>,
    pub balances: Balances,
    pub transfers: Vec<Transfer>,
}

/// Service for derived ledger views
pub struct LedgerService<'a> {
    storage: &'a Storage,
    config: &'a LedgerConfig,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(storage: &'a Storage, config: &'a LedgerConfig) -> Self {
        Self { storage, config }
    }

    /// Net balance of every member of a group
    pub fn balances(&self, group: &str) -> LedgerResult<(Group, Balances)> {
        let groups = GroupService::new(self.storage);
        let group = groups.require(group)?;
        let members = groups.members(&group)?;
        let balances = compute_balances(&members, &group.expenses)?;
        Ok((group, balances))
    }

    /// Transfers that settle a group
    pub fn settlement_plan(&self, group: &str) -> LedgerResult<SettlementReport> {
        let (group, balances) = self.balances(group)?;
        let transfers = settle(balances.as_slice(), self.config.settlement_tolerance)?;

        Ok(SettlementReport {
            group: group.name,
            generated_at: Utc::now(),
            balances,
            transfers,
        })
    }

    /// Gross who-owes-whom totals across every group
    pub fn pairwise_debts(&self) -> LedgerResult<Vec<PairwiseDebt>> {
        let participants = self.storage.participants.get_all()?;
        let groups = self.storage.groups.get_all()?;
        pairwise_debts(
            &participants,
            groups.iter().flat_map(|g| g.expenses.iter()),
        )
    }
}
