//! Balance aggregator
//!
//! Net balances are a fold over the full expense history. Nothing is stored
//! between calls, so the result never depends on which earlier updates
//! happened to succeed.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Balances, Expense, Money, NetBalance, Participant, ParticipantId};

/// Compute each participant's net balance from a list of expenses
///
/// The payer of each expense is credited its total and every split
/// participant is debited their share. Participants referenced by an expense
/// but absent from `participants` are skipped with a warning. The result keeps
/// the order of `participants` and does not depend on the order of `expenses`.
///
/// Fails with [`LedgerError::Validation`] if a balance, or the sum of all
/// balances, does not fit in a [`Money`].
pub fn compute_balances(
    participants: &[Participant],
    expenses: &[Expense],
) -> LedgerResult<Balances> {
    let mut index: HashMap<ParticipantId, usize> = HashMap::with_capacity(participants.len());
    for (idx, participant) in participants.iter().enumerate() {
        index.entry(participant.id).or_insert(idx);
    }

    let initial = vec![Money::zero(); participants.len()];
    let totals = expenses.iter().try_fold(initial, |totals, expense| {
        apply_expense(totals, participants, &index, expense)
    })?;

    let total = Money::checked_sum(totals.iter().copied())
        .ok_or_else(|| LedgerError::Validation("Sum of net balances overflows".into()))?;

    let balances = Balances::new(
        participants
            .iter()
            .zip(totals)
            .map(|(participant, balance)| NetBalance::new(participant.clone(), balance))
            .collect(),
    );

    debug!(
        participant_count = participants.len(),
        expense_count = expenses.len(),
        total = total.minor(),
        "Aggregated net balances"
    );

    Ok(balances)
}

fn apply_expense(
    mut totals: Vec<Money>,
    participants: &[Participant],
    index: &HashMap<ParticipantId, usize>,
    expense: &Expense,
) -> LedgerResult<Vec<Money>> {
    match index.get(&expense.payer) {
        Some(&idx) => {
            totals[idx] = totals[idx]
                .checked_add(expense.total)
                .ok_or_else(|| overflow(&participants[idx], expense))?;
        }
        None => warn!(
            expense = %expense.id,
            participant = %expense.payer,
            "Ignoring stale payer reference"
        ),
    }

    for split in &expense.splits {
        match index.get(&split.participant) {
            Some(&idx) => {
                totals[idx] = totals[idx]
                    .checked_sub(split.amount)
                    .ok_or_else(|| overflow(&participants[idx], expense))?;
            }
            None => warn!(
                expense = %expense.id,
                participant = %split.participant,
                "Ignoring stale split reference"
            ),
        }
    }

    Ok(totals)
}

fn overflow(participant: &Participant, expense: &Expense) -> LedgerError {
    warn!(
        expense = %expense.id,
        participant = %participant.id,
        "Net balance overflow"
    );
    LedgerError::Validation(format!(
        "Net balance for {} overflows at expense {}",
        participant.name, expense.id
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Split, SplitPolicy};

    fn expense(payer: &Participant, total: i64, shares: &[(&Participant, i64)]) -> Expense {
        Expense::new(
            payer.id,
            Money::from_minor(total),
            SplitPolicy::Exact,
            shares
                .iter()
                .map(|(p, amount)| Split::new(p.id, Money::from_minor(*amount)))
                .collect(),
        )
    }

    #[test]
    fn test_no_expenses_all_zero() {
        let people = vec![Participant::new("a"), Participant::new("b")];
        let balances = compute_balances(&people, &[]).unwrap();
        assert_eq!(balances.len(), 2);
        assert!(balances.iter().all(|b| b.balance.is_zero()));
    }

    #[test]
    fn test_payer_credited_splits_debited() {
        let a = Participant::new("a");
        let b = Participant::new("b");
        let c = Participant::new("c");
        let people = vec![a.clone(), b.clone(), c.clone()];

        let expenses = vec![
            expense(&a, 9000, &[(&a, 3000), (&b, 3000), (&c, 3000)]),
            expense(&b, 1000, &[(&c, 1000)]),
        ];
        let balances = compute_balances(&people, &expenses).unwrap();

        assert_eq!(balances.get("a"), Some(Money::from_minor(6000)));
        assert_eq!(balances.get("b"), Some(Money::from_minor(-2000)));
        assert_eq!(balances.get("c"), Some(Money::from_minor(-4000)));
        assert!(balances.total().is_zero());
    }

    #[test]
    fn test_order_follows_participants() {
        let a = Participant::new("a");
        let b = Participant::new("b");
        let balances = compute_balances(&[b.clone(), a.clone()], &[expense(&a, 10, &[(&b, 10)])]).unwrap();
        let names: Vec<_> = balances.iter().map(|n| n.participant.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_stale_references_ignored() {
        let a = Participant::new("a");
        let b = Participant::new("b");
        let gone = Participant::new("gone");

        let expenses = vec![
            expense(&gone, 500, &[(&a, 500)]),
            expense(&a, 500, &[(&gone, 250), (&b, 250)]),
        ];
        let balances = compute_balances(&[a.clone(), b.clone()], &expenses).unwrap();

        assert_eq!(balances.get("a"), Some(Money::zero()));
        assert_eq!(balances.get("b"), Some(Money::from_minor(-250)));
        assert_eq!(balances.get("gone"), None);
    }

    #[test]
    fn test_overflowing_balance_is_rejected() {
        let a = Participant::new("a");
        let b = Participant::new("b");
        let half = i64::MAX / 2 + 1;
        let big = expense(&a, half, &[(&b, half)]);

        let err = compute_balances(&[a.clone(), b.clone()], &[big.clone(), big]).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Net balance for a overflows"));
    }

    #[test]
    fn test_largest_single_expense_fits() {
        let a = Participant::new("a");
        let b = Participant::new("b");
        let balances =
            compute_balances(&[a.clone(), b.clone()], &[expense(&a, i64::MAX, &[(&b, i64::MAX)])])
                .unwrap();
        assert_eq!(balances.get("a"), Some(Money::from_minor(i64::MAX)));
        assert_eq!(balances.get("b"), Some(Money::from_minor(-i64::MAX)));
    }
}
