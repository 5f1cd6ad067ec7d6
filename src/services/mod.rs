//! Service layer for SplitLedger
//!
//! The service layer sits between the CLI and storage: it resolves names to
//! stored entities, calls into the ledger engine, and persists results.

pub mod expense;
pub mod group;
pub mod ledger;
pub mod participant;

pub use expense::{ExpenseService, NewExpense};
pub use group::GroupService;
pub use ledger::{LedgerService, SettlementReport};
pub use participant::ParticipantService;
