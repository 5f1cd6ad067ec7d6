//! Ledger computation engine
//!
//! Pure functions with no I/O:
//!
//! - [`split::compute_splits`] divides an expense total among participants
//! - [`balance::compute_balances`] folds an expense history into net balances
//! - [`settlement::settle`] reduces net balances to a short list of transfers
//! - [`debts::pairwise_debts`] reports gross who-owes-whom totals
//!
//! All amounts are integer minor units. Percentages are exact decimals and are
//! rounded to whole minor units with the configured [`RoundingMode`].

pub mod balance;
pub mod debts;
pub mod settlement;
pub mod split;

use rust_decimal::Decimal;

use crate::models::{Currency, Money, RoundingMode};

pub use balance::compute_balances;
pub use debts::pairwise_debts;
pub use settlement::settle;
pub use split::compute_splits;

/// Precision and tolerance inputs for the ledger engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Minor-unit precision and rounding mode
    pub currency: Currency,

    /// Allowed distance of a percentage total from 100, in percentage points
    pub percent_epsilon: Decimal,

    /// Balances within this many minor units of zero count as settled
    pub settlement_tolerance: Money,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            percent_epsilon: Decimal::ZERO,
            settlement_tolerance: Money::zero(),
        }
    }
}

impl LedgerConfig {
    pub fn rounding(&self) -> RoundingMode {
        self.currency.rounding
    }
}
