//! Progress and aggregation rules for `Ahorros` savings plans.
//!
//! A plan's progress is derived from its payments on every read: the total
//! collected is the plain sum of payment amounts, and the percentage is that
//! total over the plan's target, clamped to `[0, 100]`.
//!
//! Amounts are integers in the same currency unit as the plan target.

/// Upper bound of a progress percentage.
pub const MAX_PERCENTAGE: f64 = 100.0;

/// Sum payment amounts.
///
/// Every amount counts, duplicates included. The sum saturates instead of
/// overflowing.
///
/// # Arguments
/// * `amounts` - Payment amounts in any order
#[must_use]
pub fn total_collected<I>(amounts: I) -> i64
where
    I: IntoIterator<Item = i64>,
{
    amounts.into_iter().fold(0i64, i64::saturating_add)
}

/// Percentage of `target_amount` covered by `total_collected`.
///
/// Returns `0.0` when the target is zero or negative. Otherwise the result is
/// clamped to `[0.0, 100.0]`, so over-payment reports 100 and a negative
/// total reports 0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn progress_percentage(total_collected: i64, target_amount: i64) -> f64 {
    if target_amount <= 0 {
        return 0.0;
    }

    let percentage = total_collected as f64 / target_amount as f64 * MAX_PERCENTAGE;
    percentage.clamp(0.0, MAX_PERCENTAGE)
}

/// [`progress_percentage`] rounded to the nearest whole percent.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn progress_percent_rounded(total_collected: i64, target_amount: i64) -> u8 {
    // Clamped to [0, 100] above, so the cast is lossless.
    progress_percentage(total_collected, target_amount).round() as u8
}

/// Amount still missing to reach the target, never negative.
#[must_use]
pub fn remaining_amount(total_collected: i64, target_amount: i64) -> i64 {
    target_amount.saturating_sub(total_collected).max(0)
}
