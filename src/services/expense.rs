//! Expense service
//!
//! Records expenses against a group. The split itself is computed by the
//! ledger engine; this service resolves names, validates membership, and
//! persists the result.

use tracing::info;

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::{compute_splits, LedgerConfig};
use crate::models::{Expense, Money, SplitParams, SplitPolicy};
use crate::storage::Storage;

use super::group::GroupService;

/// Service for recording expenses
pub struct ExpenseService<'a> {
    storage: &'a Storage,
    config: &'a LedgerConfig,
}

/// Everything needed to record one expense
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub group: String,
    pub payer: String,
    pub total: Money,
    pub policy: SplitPolicy,
    pub params: SplitParams,
    pub description: String,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage, config: &'a LedgerConfig) -> Self {
        Self { storage, config }
    }

    /// Split an expense among the group's members and store it
    pub fn add(&self, request: NewExpense) -> LedgerResult<Expense> {
        let groups = GroupService::new(self.storage);
        let group = groups.require(&request.group)?;
        let members = groups.members(&group)?;

        let payer = members
            .iter()
            .find(|m| m.matches(&request.payer))
            .ok_or_else(|| LedgerError::UnknownParticipant(request.payer.trim().to_string()))?;

        let splits = compute_splits(
            payer,
            request.total,
            request.policy,
            &members,
            &request.params,
            self.config,
        )?;

        let mut expense = Expense::new(payer.id, request.total, request.policy, splits);
        expense.description = request.description.trim().to_string();
        expense
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        self.storage.groups.push_expense(group.id, expense.clone())?;
        self.storage.groups.save()?;

        info!(
            group = %group.name,
            expense = %expense.id,
            policy = %expense.policy,
            total = expense.total.minor(),
            "Recorded expense"
        );
        Ok(expense)
    }

    /// List a group's expenses, oldest first
    pub fn list(&self, group: &str) -> LedgerResult<Vec<Expense>> {
        Ok(GroupService::new(self.storage).require(group)?.expenses)
    }
}
