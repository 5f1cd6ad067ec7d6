//! Settlement planner
//!
//! Greedy two-pointer matching of debtors against creditors. Both lists keep
//! the input order, so equal inputs always give the same plan.

use tracing::{debug, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, NetBalance, Participant, Transfer};

/// Plan transfers from debtors to creditors
///
/// Balances within `tolerance` of zero count as settled and never appear in a
/// transfer. A debtor or creditor is done once what it has left is within
/// `tolerance`, so with a zero tolerance every balance ends at exactly zero.
/// With a positive tolerance the leftovers are only bounded on one side: when
/// the walk stops, either every debtor or every creditor is within
/// `tolerance`. No participant ever crosses zero, and the plan has at most
/// `debtors + creditors - 1` transfers.
///
/// Fails with [`LedgerError::UnbalancedLedger`] when the balances don't sum
/// to zero (within `tolerance`); a non-zero-sum ledger is always a caller
/// bug. Fails with [`LedgerError::Validation`] when the sum or a debt does
/// not fit in a [`Money`].
pub fn settle(balances: &[NetBalance], tolerance: Money) -> LedgerResult<Vec<Transfer>> {
    let tolerance = tolerance.abs();

    let total = Money::checked_sum(balances.iter().map(|b| b.balance))
        .ok_or_else(|| LedgerError::Validation("Sum of net balances overflows".into()))?;
    if total.abs() > tolerance {
        warn!(
            total = total.minor(),
            tolerance = tolerance.minor(),
            member_count = balances.len(),
            "Settlement rejected due to unbalanced input"
        );
        return Err(LedgerError::UnbalancedLedger { total });
    }

    // Amounts are kept positive on both sides: what each debtor still owes and
    // what each creditor is still owed.
    let mut debtors: Vec<(&Participant, Money)> = balances
        .iter()
        .filter(|b| b.balance < -tolerance)
        .map(|b| {
            let owed = b.balance.checked_neg().ok_or_else(|| {
                LedgerError::Validation(format!("Debt of {} overflows", b.participant.name))
            })?;
            Ok((&b.participant, owed))
        })
        .collect::<LedgerResult<_>>()?;
    let mut creditors: Vec<(&Participant, Money)> = balances
        .iter()
        .filter(|b| b.balance > tolerance)
        .map(|b| (&b.participant, b.balance))
        .collect();

    let mut transfers = Vec::with_capacity((debtors.len() + creditors.len()).saturating_sub(1));
    let (mut i, mut j) = (0, 0);

    while i < debtors.len() && j < creditors.len() {
        let amount = debtors[i].1.min(creditors[j].1);

        transfers.push(Transfer {
            from: debtors[i].0.clone(),
            to: creditors[j].0.clone(),
            amount,
        });

        debtors[i].1 -= amount;
        creditors[j].1 -= amount;

        if debtors[i].1 <= tolerance {
            i += 1;
        }
        if creditors[j].1 <= tolerance {
            j += 1;
        }
    }

    debug!(
        debtor_count = debtors.len(),
        creditor_count = creditors.len(),
        transfer_count = transfers.len(),
        "Planned settlement"
    );

    Ok(transfers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balances(entries: &[(&str, i64)]) -> Vec<NetBalance> {
        entries
            .iter()
            .map(|(name, minor)| NetBalance::new(Participant::new(*name), Money::from_minor(*minor)))
            .collect()
    }

    fn plan(transfers: &[Transfer]) -> Vec<(String, String, i64)> {
        transfers
            .iter()
            .map(|t| (t.from.name.clone(), t.to.name.clone(), t.amount.minor()))
            .collect()
    }

    fn owned(entries: &[(&str, &str, i64)]) -> Vec<(String, String, i64)> {
        entries
            .iter()
            .map(|(f, t, a)| (f.to_string(), t.to_string(), *a))
            .collect()
    }

    #[test]
    fn test_two_debtors_one_creditor() {
        let input = balances(&[("A", -30), ("B", -20), ("C", 50)]);
        let transfers = settle(&input, Money::zero()).unwrap();
        assert_eq!(plan(&transfers), owned(&[("A", "C", 30), ("B", "C", 20)]));
    }

    #[test]
    fn test_one_debtor_two_creditors() {
        let input = balances(&[("A", -50), ("B", 25), ("C", 25)]);
        let transfers = settle(&input, Money::zero()).unwrap();
        assert_eq!(plan(&transfers), owned(&[("A", "B", 25), ("A", "C", 25)]));
    }

    #[test]
    fn test_input_order_breaks_ties() {
        let input = balances(&[("C", 40), ("B", -40), ("A", -40), ("D", 40)]);
        let transfers = settle(&input, Money::zero()).unwrap();
        assert_eq!(plan(&transfers), owned(&[("B", "C", 40), ("A", "D", 40)]));
    }

    #[test]
    fn test_interleaved_amounts() {
        let input = balances(&[("A", -70), ("B", 30), ("C", -10), ("D", 50)]);
        let transfers = settle(&input, Money::zero()).unwrap();
        assert_eq!(
            plan(&transfers),
            owned(&[("A", "B", 30), ("A", "D", 40), ("C", "D", 10)])
        );
    }

    #[test]
    fn test_settled_input_yields_no_transfers() {
        let input = balances(&[("A", 0), ("B", 0)]);
        assert!(settle(&input, Money::zero()).unwrap().is_empty());
        assert!(settle(&[], Money::zero()).unwrap().is_empty());
    }

    #[test]
    fn test_tolerance_treats_dust_as_settled() {
        let input = balances(&[("A", -1), ("B", 1)]);
        assert!(settle(&input, Money::from_minor(1)).unwrap().is_empty());
        assert_eq!(settle(&input, Money::zero()).unwrap().len(), 1);
    }

    #[test]
    fn test_unbalanced_input_rejected() {
        let input = balances(&[("A", -30), ("B", 20)]);
        let err = settle(&input, Money::zero()).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::UnbalancedLedger { total } if total == Money::from_minor(-10)
        ));
    }

    #[test]
    fn test_tolerance_leaves_one_side_within_bound() {
        // Every debtor is done after its first transfer, leaving E unpaid
        let input = balances(&[("D1", -2), ("D2", -2), ("C1", 1), ("C2", 1), ("E", 2)]);
        let transfers = settle(&input, Money::from_minor(1)).unwrap();
        assert_eq!(plan(&transfers), owned(&[("D1", "C1", 1), ("D2", "C2", 1)]));
    }

    #[test]
    fn test_overflowing_input_rejected() {
        let input = balances(&[("A", i64::MAX), ("B", 1)]);
        assert!(settle(&input, Money::zero()).unwrap_err().is_validation());

        let input = balances(&[("A", i64::MIN), ("B", i64::MAX), ("C", 1)]);
        let err = settle(&input, Money::zero()).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Debt of A overflows"));
    }

    #[test]
    fn test_largest_debt_settles() {
        let input = balances(&[("A", -i64::MAX), ("B", i64::MAX)]);
        let transfers = settle(&input, Money::zero()).unwrap();
        assert_eq!(plan(&transfers), owned(&[("A", "B", i64::MAX)]));

        // The most negative tolerance saturates instead of panicking
        assert!(settle(&input, Money::from_minor(i64::MIN)).unwrap().is_empty());
    }
}
