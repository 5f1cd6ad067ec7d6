//! Core data models for SplitLedger
//!
//! Participants, groups, expenses with their splits, and the derived views
//! (net balances, transfers) produced by the ledger engine.

pub mod balance;
pub mod expense;
pub mod group;
pub mod ids;
pub mod money;
pub mod participant;

pub use balance::{Balances, NetBalance, PairwiseDebt, Transfer};
pub use expense::{ExactShare, Expense, PercentShare, Split, SplitParams, SplitPolicy};
pub use group::Group;
pub use ids::{ExpenseId, GroupId, ParticipantId};
pub use money::{Currency, Money, MoneyParseError, RoundingMode};
pub use participant::Participant;
