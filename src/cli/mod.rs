//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod export;
pub mod group;
pub mod participant;
pub mod report;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export, ExportFormat};
pub use group::{handle_group_command, GroupCommands};
pub use participant::{handle_participant_command, ParticipantCommands};
pub use report::{handle_balances, handle_debts, handle_settle};
