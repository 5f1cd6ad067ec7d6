//! SplitLedger - shared-expense ledger engine
//!
//! Records expenses paid by one participant on behalf of a group, splits
//! them under an EQUAL, EXACT, or PERCENT policy, folds the history into
//! per-participant net balances, and reduces those balances to a short list
//! of settlement transfers.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `ledger`: Pure computation (splits, balances, settlement, debts)
//! - `models`: Core data models (money, participants, groups, expenses)
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `storage`: JSON file storage layer
//! - `services`: Business logic joining storage with the ledger engine
//! - `cli`, `display`, `export`: Command-line surface
//!
//! # Example
//!
//! ```rust
//! use splitledger::ledger::{compute_balances, compute_splits, settle, LedgerConfig};
//! use splitledger::models::{Expense, Money, Participant, SplitParams, SplitPolicy};
//!
//! let people = vec![Participant::new("A"), Participant::new("B")];
//! let config = LedgerConfig::default();
//! let total = Money::from_minor(1000);
//!
//! let splits = compute_splits(&people[0], total, SplitPolicy::Equal, &people, &SplitParams::Equal, &config)?;
//! let expense = Expense::new(people[0].id, total, SplitPolicy::Equal, splits);
//!
//! let balances = compute_balances(&people, &[expense])?;
//! let transfers = settle(balances.as_slice(), config.settlement_tolerance)?;
//! assert_eq!(transfers.len(), 1);
//! assert_eq!(transfers[0].amount, Money::from_minor(500));
//! # Ok::<(), splitledger::LedgerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
