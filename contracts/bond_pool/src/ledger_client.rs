//! Cross-contract dispatch into the reward ledger.
//!
//! Every call here flows pool -> ledger; the ledger never calls back into a
//! pool mid-operation (the Soroban host rejects reentrant invocations).
//! Mutating pool entry points trigger `update_rewards` first and then collect
//! the pool's pending assignment, so the pool never mutates weights the
//! ledger has not yet paid out under the old clock.

use soroban_sdk::{vec, Address, Env, IntoVal, Symbol, Val};

/// Trigger a ledger update pass (idempotent on the ledger side).
pub fn update_ledger_rewards(e: &Env, ledger: &Address) {
    let args = vec![e];
    e.invoke_contract::<Val>(ledger, &Symbol::new(e, "update_rewards"), args);
}

/// Collect and zero this pool's pending reward assignment.
pub fn take_pending_reward(e: &Env, ledger: &Address, pool: &Address) -> i128 {
    let args = vec![e, pool.into_val(e)];
    e.invoke_contract::<i128>(ledger, &Symbol::new(e, "take_pending_reward"), args)
}

/// Report this pool's new absolute total weight.
pub fn notify_weight_change(e: &Env, ledger: &Address, pool: &Address, new_weight: i128) {
    let args = vec![e, pool.into_val(e), new_weight.into_val(e)];
    e.invoke_contract::<Val>(ledger, &Symbol::new(e, "notify_weight_change"), args);
}

/// Report a staked-principal delta.
pub fn notify_stake_change(e: &Env, ledger: &Address, pool: &Address, amount: i128, increase: bool) {
    let args = vec![
        e,
        pool.into_val(e),
        amount.into_val(e),
        increase.into_val(e),
    ];
    e.invoke_contract::<Val>(ledger, &Symbol::new(e, "notify_stake_change"), args);
}

/// Ask the ledger to pay `amount` of unclaimed rewards to `recipient`.
pub fn claim_from_ledger(e: &Env, ledger: &Address, pool: &Address, recipient: &Address, amount: i128) {
    let args = vec![
        e,
        pool.into_val(e),
        recipient.into_val(e),
        amount.into_val(e),
    ];
    e.invoke_contract::<Val>(ledger, &Symbol::new(e, "claim_reward"), args);
}
