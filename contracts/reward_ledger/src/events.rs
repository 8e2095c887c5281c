use soroban_sdk::{Address, Env, Symbol};

/// Emitted when a new bond pool is registered for an account.
///
/// # Topics
/// * `Symbol` - "pool_deployed"
/// * `Address` - The account owning the new pool
///
/// # Data
/// * `Address` - The pool contract address
pub fn emit_pool_deployed(e: &Env, account: &Address, pool: &Address) {
    let topics = (Symbol::new(e, "pool_deployed"), account.clone());
    e.events().publish(topics, pool.clone());
}

/// Emitted when an update pass mints and apportions new rewards.
///
/// # Topics
/// * `Symbol` - "rewards_distributed"
///
/// # Data
/// * `i128` - Total reward minted in this pass
/// * `i128` - Resulting unclaimed reward balance
/// * `u64`  - Ledger timestamp of the pass
pub fn emit_rewards_distributed(e: &Env, total_reward: i128, unclaimed: i128, timestamp: u64) {
    let topics = (Symbol::new(e, "rewards_distributed"),);
    e.events().publish(topics, (total_reward, unclaimed, timestamp));
}

/// Emitted when a pool claims rewards on behalf of its account.
///
/// # Topics
/// * `Symbol` - "reward_claimed"
/// * `Address` - The account whose pool originated the claim
///
/// # Data
/// * `Address` - The recipient of the transfer
/// * `i128` - The amount claimed
/// * `i128` - The remaining unclaimed reward balance
pub fn emit_reward_claimed(
    e: &Env,
    account: &Address,
    recipient: &Address,
    amount: i128,
    remaining: i128,
) {
    let topics = (Symbol::new(e, "reward_claimed"), account.clone());
    e.events().publish(topics, (recipient.clone(), amount, remaining));
}

/// Emitted when a governance parameter changes.
///
/// # Topics
/// * `Symbol` - "param_updated"
/// * `Symbol` - The parameter name
///
/// # Data
/// * `u32` - Old value
/// * `u32` - New value
/// * `Address` - The caller
pub fn emit_param_updated(e: &Env, name: &str, old: u32, new: u32, caller: &Address) {
    let topics = (Symbol::new(e, "param_updated"), Symbol::new(e, name));
    e.events().publish(topics, (old, new, caller.clone()));
}

/// Emitted when the pause flag flips.
///
/// # Topics
/// * `Symbol` - "paused"
///
/// # Data
/// * `bool` - New pause state
/// * `Address` - The caller
pub fn emit_paused(e: &Env, caller: &Address, flag: bool) {
    let topics = (Symbol::new(e, "paused"),);
    e.events().publish(topics, (flag, caller.clone()));
}
