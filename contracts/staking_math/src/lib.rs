//! Shared weight and inflation arithmetic for the staking contracts.
//!
//! All financial calculations use checked arithmetic and panic with a stable,
//! caller-supplied message on overflow/underflow/div-by-zero so the whole
//! transaction aborts atomically.

#![no_std]


/// One day in seconds.
pub const SECONDS_PER_DAY: u64 = 86_400;

/// One (non-leap) year in seconds. Denominator of the annualized reward rate.
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Offset added to a lock duration before taking `log2`, so the multiplier is
/// well defined (and >= 16) for every valid duration.
pub const WEIGHT_TIME_UNIT: u64 = SECONDS_PER_DAY;

/// Default basis-point denominator (100% = 10_000 bps).
pub const DEFAULT_BPS_DENOMINATOR: u32 = 10_000;

/// Upper bound for the governance-tunable decay constant (100% per year).
pub const MAX_DECAY_CONSTANT_BPS: u32 = 10_000;

/// Panic message when the inflation-rate numerator overflows. Reachable only
/// with a reward cap above `i128::MAX / decay_constant`.
pub const RATE_OVERFLOW: &str = "inflation rate overflow";

// ─── Checked arithmetic ────────────────────────────────────────────────────

/// Checked `i128` addition with a stable panic message.
#[inline]
#[must_use]
pub fn add_i128(a: i128, b: i128, msg: &'static str) -> i128 {
    a.checked_add(b).unwrap_or_else(|| panic!("{msg}"))
}

/// Checked `i128` subtraction with a stable panic message.
#[inline]
#[must_use]
pub fn sub_i128(a: i128, b: i128, msg: &'static str) -> i128 {
    a.checked_sub(b).unwrap_or_else(|| panic!("{msg}"))
}

/// Checked `i128` multiplication with a stable panic message.
#[inline]
#[must_use]
pub fn mul_i128(a: i128, b: i128, msg: &'static str) -> i128 {
    a.checked_mul(b).unwrap_or_else(|| panic!("{msg}"))
}

/// Checked `i128` division with a stable panic message.
#[inline]
#[must_use]
pub fn div_i128(a: i128, b: i128, msg: &'static str) -> i128 {
    a.checked_div(b).unwrap_or_else(|| panic!("{msg}"))
}

/// Checked `u64` addition with a stable panic message. Used for expiry
/// timestamps, which must never wrap.
#[inline]
#[must_use]
pub fn add_u64(a: u64, b: u64, msg: &'static str) -> u64 {
    a.checked_add(b).unwrap_or_else(|| panic!("{msg}"))
}

// ─── Bond weight ───────────────────────────────────────────────────────────

/// Lock-duration multiplier: integer `log2(lock_duration + WEIGHT_TIME_UNIT)`.
///
/// Non-decreasing and sub-linear in the duration. The one-day offset keeps the
/// multiplier at 16 or more for any duration, so every positive principal has
/// positive weight. Reference points (seconds):
/// 0 -> 16, 1 day -> 17, 7 days -> 19, 30 days -> 21, 90 days -> 22,
/// 365 days -> 24.
#[inline]
#[must_use]
pub fn weight_multiplier(lock_duration: u64) -> i128 {
    let shifted = lock_duration.saturating_add(WEIGHT_TIME_UNIT);
    i128::from(shifted.ilog2())
}

/// A bond's weight: `principal * weight_multiplier(lock_duration)`.
///
/// The multiplier always uses the bond's (possibly extended) lock duration,
/// never the remaining time, so the same formula applies at creation, accrual
/// and unbond time and weight aggregates stay additive.
#[inline]
#[must_use]
pub fn bond_weight(principal: i128, lock_duration: u64, msg: &'static str) -> i128 {
    mul_i128(principal, weight_multiplier(lock_duration), msg)
}

// ─── Inflation ─────────────────────────────────────────────────────────────

/// Annualized inflation rate in basis points:
/// `decay_constant * (reward_cap - rewards_issued) / reward_cap`.
///
/// Shrinks monotonically toward zero as issuance approaches the cap. Clamped
/// to `[0, decay_constant]`; zero once the cap is reached or when the cap is
/// not positive.
#[must_use]
pub fn inflation_rate_bps(decay_constant: u32, reward_cap: i128, rewards_issued: i128) -> i128 {
    if reward_cap <= 0 || rewards_issued >= reward_cap {
        return 0;
    }
    let remaining = reward_cap - rewards_issued;
    div_i128(
        mul_i128(i128::from(decay_constant), remaining, RATE_OVERFLOW),
        reward_cap,
        RATE_OVERFLOW,
    )
}

/// Reward accrued over `elapsed_secs` at `rate_bps`:
/// `total_staked * rate_bps * elapsed / (SECONDS_PER_YEAR * bps_denominator)`.
///
/// Returns zero whenever any factor is zero.
#[must_use]
pub fn accrued_reward(
    total_staked: i128,
    rate_bps: i128,
    elapsed_secs: u64,
    bps_denominator: u32,
    msg: &'static str,
) -> i128 {
    if total_staked <= 0 || rate_bps <= 0 || elapsed_secs == 0 {
        return 0;
    }
    let numerator = mul_i128(
        mul_i128(total_staked, rate_bps, msg),
        i128::from(elapsed_secs),
        msg,
    );
    let denominator = mul_i128(
        i128::from(SECONDS_PER_YEAR),
        i128::from(bps_denominator),
        msg,
    );
    div_i128(numerator, denominator, msg)
}
