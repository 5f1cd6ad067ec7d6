//! Expense model
//!
//! An expense records who paid, how much, and how the total was divided.
//! Expenses are produced by the split calculator and never edited afterwards.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{ExpenseId, ParticipantId};
use super::money::Money;
use crate::error::LedgerError;

/// Rule governing how an expense total is divided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SplitPolicy {
    /// Divide evenly across all participants
    Equal,
    /// Explicit per-participant amounts
    Exact,
    /// Explicit per-participant percentages
    Percent,
}

impl fmt::Display for SplitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equal => write!(f, "EQUAL"),
            Self::Exact => write!(f, "EXACT"),
            Self::Percent => write!(f, "PERCENT"),
        }
    }
}

impl FromStr for SplitPolicy {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "EQUAL" => Ok(Self::Equal),
            "EXACT" => Ok(Self::Exact),
            "PERCENT" | "PERCENTAGE" => Ok(Self::Percent),
            _ => Err(LedgerError::InvalidPolicy(format!(
                "'{}' (expected EQUAL, EXACT or PERCENT)",
                s.trim()
            ))),
        }
    }
}

/// An explicit amount owed by one participant, named by id or name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExactShare {
    pub participant: String,
    pub amount: Money,
}

/// An explicit percentage owed by one participant, named by id or name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercentShare {
    pub participant: String,
    pub percent: Decimal,
}

/// Policy-specific inputs to the split calculator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitParams {
    Equal,
    Exact(Vec<ExactShare>),
    Percent(Vec<PercentShare>),
}

impl SplitParams {
    /// The policy these parameters belong to
    pub fn policy(&self) -> SplitPolicy {
        match self {
            Self::Equal => SplitPolicy::Equal,
            Self::Exact(_) => SplitPolicy::Exact,
            Self::Percent(_) => SplitPolicy::Percent,
        }
    }
}

/// One participant's share of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    /// Who owes this share
    pub participant: ParticipantId,

    /// Amount owed (never negative)
    pub amount: Money,
}

impl Split {
    /// Create a new split
    pub fn new(participant: ParticipantId, amount: Money) -> Self {
        Self {
            participant,
            amount,
        }
    }
}

/// A recorded shared expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Who paid
    pub payer: ParticipantId,

    /// Total amount paid
    pub total: Money,

    /// Policy that produced the splits
    pub policy: SplitPolicy,

    /// Per-participant shares; sums exactly to `total`
    pub splits: Vec<Split>,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// When the expense was recorded
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense from already computed splits
    pub fn new(
        payer: ParticipantId,
        total: Money,
        policy: SplitPolicy,
        splits: Vec<Split>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            payer,
            total,
            policy,
            splits,
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Sum of all split amounts, `None` if it does not fit in a [`Money`]
    pub fn split_total(&self) -> Option<Money> {
        Money::checked_sum(self.splits.iter().map(|s| s.amount))
    }

    /// Amount owed by a participant on this expense (zero if not listed)
    pub fn share_of(&self, participant: ParticipantId) -> Money {
        self.splits
            .iter()
            .filter(|s| s.participant == participant)
            .map(|s| s.amount)
            .sum()
    }

    /// Validate the expense invariants
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.total.is_positive() {
            return Err(ExpenseValidationError::NonPositiveTotal(self.total));
        }
        if let Some(split) = self.splits.iter().find(|s| s.amount.is_negative()) {
            return Err(ExpenseValidationError::NegativeShare(split.amount));
        }
        let split_total = self
            .split_total()
            .ok_or(ExpenseValidationError::SplitsOverflow)?;
        if split_total != self.total {
            return Err(ExpenseValidationError::SplitsDontSum {
                total: self.total,
                split_total,
            });
        }
        Ok(())
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveTotal(Money),
    NegativeShare(Money),
    SplitsDontSum { total: Money, split_total: Money },
    SplitsOverflow,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveTotal(total) => {
                write!(f, "Expense total must be positive, got {}", total)
            }
            Self::NegativeShare(amount) => write!(f, "Split amount cannot be negative: {}", amount),
            Self::SplitsDontSum { total, split_total } => write!(
                f,
                "Splits sum to {} but expense total is {}",
                split_total, total
            ),
            Self::SplitsOverflow => write!(f, "Split amounts overflow"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parse() {
        assert_eq!("equal".parse::<SplitPolicy>().unwrap(), SplitPolicy::Equal);
        assert_eq!(" EXACT ".parse::<SplitPolicy>().unwrap(), SplitPolicy::Exact);
        assert_eq!("Percent".parse::<SplitPolicy>().unwrap(), SplitPolicy::Percent);

        let err = "SHARES".parse::<SplitPolicy>().unwrap_err();
        assert!(matches!(err, LedgerError::InvalidPolicy(_)));
    }

    #[test]
    fn test_policy_serialization() {
        let json = serde_json::to_string(&SplitPolicy::Percent).unwrap();
        assert_eq!(json, "\"PERCENT\"");
    }

    #[test]
    fn test_params_policy() {
        assert_eq!(SplitParams::Equal.policy(), SplitPolicy::Equal);
        assert_eq!(SplitParams::Exact(vec![]).policy(), SplitPolicy::Exact);
        assert_eq!(SplitParams::Percent(vec![]).policy(), SplitPolicy::Percent);
    }

    #[test]
    fn test_expense_validation() {
        let a = ParticipantId::new();
        let b = ParticipantId::new();
        let expense = Expense::new(
            a,
            Money::from_minor(1000),
            SplitPolicy::Exact,
            vec![
                Split::new(a, Money::from_minor(400)),
                Split::new(b, Money::from_minor(600)),
            ],
        );
        assert!(expense.validate().is_ok());
        assert_eq!(expense.share_of(b), Money::from_minor(600));
        assert_eq!(expense.share_of(ParticipantId::new()), Money::zero());

        let mut broken = expense.clone();
        broken.splits.pop();
        assert!(matches!(
            broken.validate(),
            Err(ExpenseValidationError::SplitsDontSum { .. })
        ));

        let mut zero = expense;
        zero.total = Money::zero();
        assert!(matches!(
            zero.validate(),
            Err(ExpenseValidationError::NonPositiveTotal(_))
        ));
    }

    #[test]
    fn test_overflowing_splits_fail_validation() {
        let a = ParticipantId::new();
        let b = ParticipantId::new();
        let expense = Expense::new(
            a,
            Money::from_minor(i64::MAX),
            SplitPolicy::Exact,
            vec![
                Split::new(a, Money::from_minor(i64::MAX)),
                Split::new(b, Money::from_minor(1)),
            ],
        );
        assert_eq!(expense.split_total(), None);
        assert_eq!(expense.validate(), Err(ExpenseValidationError::SplitsOverflow));
    }
}
