//! Split calculator
//!
//! Turns an expense total and a split policy into per-participant shares that
//! always sum exactly to the total.

use rust_decimal::Decimal;
use tracing::debug;

use super::LedgerConfig;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    ExactShare, Money, Participant, PercentShare, Split, SplitParams, SplitPolicy,
};

/// Divide `total` among `participants` according to `policy`
///
/// `params` must belong to `policy`; a mismatch is an [`LedgerError::InvalidPolicy`].
/// The payer must be one of `participants`. On success the returned splits
/// sum to `total` exactly. On failure nothing is returned.
pub fn compute_splits(
    payer: &Participant,
    total: Money,
    policy: SplitPolicy,
    participants: &[Participant],
    params: &SplitParams,
    config: &LedgerConfig,
) -> LedgerResult<Vec<Split>> {
    if params.policy() != policy {
        return Err(LedgerError::InvalidPolicy(format!(
            "{} expense given {} parameters",
            policy,
            params.policy()
        )));
    }
    if !total.is_positive() {
        return Err(LedgerError::Validation(format!(
            "Expense total must be positive, got {}",
            config.currency.format(total)
        )));
    }
    if participants.is_empty() {
        return Err(LedgerError::Validation(
            "Expense needs at least one participant".into(),
        ));
    }
    if !participants.iter().any(|p| p.id == payer.id) {
        return Err(LedgerError::UnknownParticipant(payer.name.clone()));
    }

    let splits = match params {
        SplitParams::Equal => split_equal(total, participants),
        SplitParams::Exact(shares) => split_exact(total, participants, shares, config)?,
        SplitParams::Percent(shares) => split_percent(total, participants, shares, config)?,
    };

    debug_assert_eq!(splits.iter().map(|s| s.amount).sum::<Money>(), total);
    debug!(
        policy = %policy,
        total = total.minor(),
        payer = %payer.name,
        split_count = splits.len(),
        "Computed expense splits"
    );

    Ok(splits)
}

/// Floor share for everyone; the whole remainder goes to the first participant
fn split_equal(total: Money, participants: &[Participant]) -> Vec<Split> {
    let n = participants.len() as i64;
    let share = total.minor() / n;
    let remainder = total.minor() % n;

    participants
        .iter()
        .enumerate()
        .map(|(idx, p)| {
            let amount = if idx == 0 { share + remainder } else { share };
            Split::new(p.id, Money::from_minor(amount))
        })
        .collect()
}

fn split_exact(
    total: Money,
    participants: &[Participant],
    shares: &[ExactShare],
    config: &LedgerConfig,
) -> LedgerResult<Vec<Split>> {
    let mut splits: Vec<Split> = Vec::with_capacity(shares.len());
    let mut sum = Money::zero();

    for share in shares {
        let participant = resolve(participants, &share.participant)?;
        ensure_unlisted(&splits, participant)?;
        if share.amount.is_negative() {
            return Err(LedgerError::Validation(format!(
                "Share for {} cannot be negative: {}",
                participant.name,
                config.currency.format(share.amount)
            )));
        }
        sum = sum
            .checked_add(share.amount)
            .ok_or_else(|| LedgerError::Validation("Exact shares overflow".into()))?;
        splits.push(Split::new(participant.id, share.amount));
    }

    if sum != total {
        return Err(LedgerError::SplitMismatch {
            policy: SplitPolicy::Exact,
            expected: config.currency.format(total),
            actual: config.currency.format(sum),
        });
    }

    Ok(splits)
}

fn split_percent(
    total: Money,
    participants: &[Participant],
    shares: &[PercentShare],
    config: &LedgerConfig,
) -> LedgerResult<Vec<Split>> {
    let mut resolved: Vec<Split> = Vec::with_capacity(shares.len());
    let mut percent_sum = Decimal::ZERO;

    for share in shares {
        let participant = resolve(participants, &share.participant)?;
        ensure_unlisted(&resolved, participant)?;
        if share.percent.is_sign_negative() && !share.percent.is_zero() {
            return Err(LedgerError::Validation(format!(
                "Percentage for {} cannot be negative: {}%",
                participant.name, share.percent
            )));
        }
        percent_sum = percent_sum
            .checked_add(share.percent)
            .ok_or_else(|| LedgerError::Validation("Percentages overflow".into()))?;
        resolved.push(Split::new(participant.id, Money::zero()));
    }

    if resolved.is_empty() || (percent_sum - Decimal::ONE_HUNDRED).abs() > config.percent_epsilon {
        return Err(LedgerError::SplitMismatch {
            policy: SplitPolicy::Percent,
            expected: "100%".into(),
            actual: format!("{}%", percent_sum.normalize()),
        });
    }

    let rounding = config.rounding();
    for (split, share) in resolved.iter_mut().zip(shares) {
        split.amount = total
            .as_decimal()
            .checked_mul(share.percent)
            .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
            .and_then(|exact| rounding.round(exact))
            .ok_or_else(|| LedgerError::Validation("Percentage share overflows".into()))?;
    }

    // Rounded shares of a total near the top of the range can sum past it
    let rounded_sum: i128 = resolved.iter().map(|s| i128::from(s.amount.minor())).sum();
    let residual = i64::try_from(i128::from(total.minor()) - rounded_sum)
        .map_err(|_| LedgerError::Validation("Percentage shares overflow".into()))?;
    absorb_residual(&mut resolved, Money::from_minor(residual));

    Ok(resolved)
}

/// Push the rounding residual onto shares so they sum to the total
///
/// A positive residual goes to the first share. A negative residual is taken
/// from shares in order, never pushing one below zero.
fn absorb_residual(splits: &mut [Split], residual: Money) {
    if residual.is_zero() {
        return;
    }
    if residual.is_positive() {
        if let Some(first) = splits.first_mut() {
            first.amount += residual;
        }
        return;
    }

    let mut remaining = -residual;
    for split in splits.iter_mut() {
        let take = split.amount.min(remaining);
        split.amount -= take;
        remaining -= take;
        if remaining.is_zero() {
            break;
        }
    }
}

fn resolve<'a>(participants: &'a [Participant], identifier: &str) -> LedgerResult<&'a Participant> {
    participants
        .iter()
        .find(|p| p.matches(identifier))
        .ok_or_else(|| LedgerError::UnknownParticipant(identifier.trim().to_string()))
}

fn ensure_unlisted(splits: &[Split], participant: &Participant) -> LedgerResult<()> {
    if splits.iter().any(|s| s.participant == participant.id) {
        return Err(LedgerError::Validation(format!(
            "{} is listed more than once",
            participant.name
        )));
    }
    Ok(())
}
