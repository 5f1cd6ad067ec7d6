//! Derived ledger views: net balances, transfers, and raw pairwise debts
//!
//! None of these are persisted. They are recomputed from the expense history
//! whenever they are asked for.

use serde::Serialize;
use std::fmt;

use super::money::Money;
use super::participant::Participant;

/// A participant's signed net position across all expenses
///
/// Positive means the group owes them; negative means they owe the group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetBalance {
    pub participant: Participant,
    pub balance: Money,
}

impl NetBalance {
    pub fn new(participant: Participant, balance: Money) -> Self {
        Self {
            participant,
            balance,
        }
    }
}

/// Net balances for a participant set, in participant order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Balances(Vec<NetBalance>);

impl Balances {
    pub fn new(entries: Vec<NetBalance>) -> Self {
        Self(entries)
    }

    /// Signed sum of every balance; zero for a consistent ledger
    pub fn total(&self) -> Money {
        self.0.iter().map(|b| b.balance).sum()
    }

    /// Balance for a participant, by participant name or id
    pub fn get(&self, identifier: &str) -> Option<Money> {
        self.0
            .iter()
            .find(|b| b.participant.matches(identifier))
            .map(|b| b.balance)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NetBalance> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[NetBalance] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for Balances {
    type Item = NetBalance;
    type IntoIter = std::vec::IntoIter<NetBalance>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Balances {
    type Item = &'a NetBalance;
    type IntoIter = std::slice::Iter<'a, NetBalance>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A single point-to-point payment in a settlement plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transfer {
    pub from: Participant,
    pub to: Participant,
    pub amount: Money,
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: {}", self.from, self.to, self.amount)
    }
}

/// Gross amount one participant owes another before any netting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairwiseDebt {
    pub debtor: Participant,
    pub creditor: Participant,
    pub amount: Money,
}
