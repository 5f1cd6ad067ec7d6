//! Gross pairwise debts
//!
//! For every split owed by someone other than the payer, adds the split amount
//! to what that participant owes the payer. Nothing is netted, so A owing B
//! and B owing A both show up.

use std::collections::HashMap;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, Money, PairwiseDebt, Participant, ParticipantId};

/// Sum unsettled split amounts per (debtor, creditor) pair
///
/// Pairs are returned in the order they are first seen. References to
/// participants missing from `participants` are skipped. Fails with
/// [`LedgerError::Validation`] if a pair's total does not fit in a [`Money`].
pub fn pairwise_debts<'a, I>(
    participants: &[Participant],
    expenses: I,
) -> LedgerResult<Vec<PairwiseDebt>>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let lookup: HashMap<ParticipantId, &Participant> =
        participants.iter().map(|p| (p.id, p)).collect();

    let mut order: Vec<(ParticipantId, ParticipantId)> = Vec::new();
    let mut totals: HashMap<(ParticipantId, ParticipantId), Money> = HashMap::new();

    for expense in expenses {
        if !lookup.contains_key(&expense.payer) {
            continue;
        }
        for split in &expense.splits {
            if split.participant == expense.payer || split.amount.is_zero() {
                continue;
            }
            if !lookup.contains_key(&split.participant) {
                continue;
            }
            let key = (split.participant, expense.payer);
            let entry = totals.entry(key).or_insert_with(|| {
                order.push(key);
                Money::zero()
            });
            *entry = entry.checked_add(split.amount).ok_or_else(|| {
                LedgerError::Validation(format!(
                    "Debt of {} to {} overflows",
                    lookup[&split.participant].name, lookup[&expense.payer].name
                ))
            })?;
        }
    }

    Ok(order
        .into_iter()
        .filter_map(|key| {
            let (debtor, creditor) = key;
            Some(PairwiseDebt {
                debtor: (*lookup.get(&debtor)?).clone(),
                creditor: (*lookup.get(&creditor)?).clone(),
                amount: *totals.get(&key)?,
            })
        })
        .collect())
}
