//! Display formatting for terminal output
//!
//! Plain-text tables and detail views for participants, groups, expenses,
//! balances, and settlement plans.

pub mod balance;
pub mod group;
pub mod participant;

pub use balance::{format_balances, format_debts, format_transfers};
pub use group::{format_expense_list, format_group_details, format_group_list};
pub use participant::{format_participant_details, format_participant_list};
