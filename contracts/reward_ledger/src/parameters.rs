//! Governance-controlled parameters of the inflation formula.
//!
//! Both knobs are restricted to the admin, validated against fixed bounds and
//! emit a `param_updated` event on every successful change.

use crate::errors::*;
use crate::events;
use crate::require_admin;
use crate::types::DataKey;
use soroban_sdk::{Address, Env};
use staking_math::{DEFAULT_BPS_DENOMINATOR, MAX_DECAY_CONSTANT_BPS};

/// Get the inflation decay constant in basis points.
#[must_use]
pub fn get_decay_constant(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&DataKey::DecayConstant)
        .unwrap_or(0)
}

/// Get the basis-point denominator of the inflation formula.
#[must_use]
pub fn get_bps_denominator(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&DataKey::BpsDenominator)
        .unwrap_or(DEFAULT_BPS_DENOMINATOR)
}

/// Get the emergency pause flag.
#[must_use]
pub fn get_paused(e: &Env) -> bool {
    e.storage().instance().get(&DataKey::Paused).unwrap_or(false)
}

/// Validate a decay constant. Shared by initialize and the setter.
pub fn check_decay_constant(value: u32) {
    if value > MAX_DECAY_CONSTANT_BPS {
        panic!("{}", ERR_INVALID_DECAY);
    }
}

/// Validate a basis-point denominator. Shared by initialize and the setter.
pub fn check_bps_denominator(value: u32) {
    if value == 0 {
        panic!("{}", ERR_INVALID_DENOMINATOR);
    }
}

/// Admin-only: update the decay constant.
pub fn set_decay_constant(e: &Env, caller: &Address, value: u32) {
    require_admin(e, caller);
    check_decay_constant(value);
    let old = get_decay_constant(e);
    e.storage().instance().set(&DataKey::DecayConstant, &value);
    events::emit_param_updated(e, "decay_constant", old, value, caller);
}

/// Admin-only: update the basis-point denominator.
pub fn set_bps_denominator(e: &Env, caller: &Address, value: u32) {
    require_admin(e, caller);
    check_bps_denominator(value);
    let old = get_bps_denominator(e);
    e.storage().instance().set(&DataKey::BpsDenominator, &value);
    events::emit_param_updated(e, "bps_denominator", old, value, caller);
}

/// Admin-only: flip the emergency pause flag.
///
/// Pausing stops pool deployment and new reward accrual only; the update
/// clock still advances and unbonding/claiming stay available, so a pause can
/// never trap principal.
pub fn set_paused(e: &Env, caller: &Address, flag: bool) {
    require_admin(e, caller);
    e.storage().instance().set(&DataKey::Paused, &flag);
    events::emit_paused(e, caller, flag);
}
