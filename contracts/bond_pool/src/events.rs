use soroban_sdk::{Address, Env, Symbol};

/// Emitted when a new bond is created.
///
/// # Topics
/// * `Symbol` - "bonded"
/// * `Address` - The pool owner
///
/// # Data
/// * `u32`  - Index of the new bond
/// * `i128` - Principal committed
/// * `u64`  - Lock duration in seconds
/// * `bool` - Compounding flag
/// * `i128` - Resulting pool total weight
pub fn emit_bonded(
    e: &Env,
    owner: &Address,
    index: u32,
    amount: i128,
    lock_duration: u64,
    is_compound: bool,
    total_weight: i128,
) {
    let topics = (Symbol::new(e, "bonded"), owner.clone());
    let data = (index, amount, lock_duration, is_compound, total_weight);
    e.events().publish(topics, data);
}

/// Emitted when a bond is unbonded after lock expiry.
///
/// # Topics
/// * `Symbol` - "unbonded"
/// * `Address` - The pool owner
///
/// # Data
/// * `u32`  - Index the bond was removed from
/// * `i128` - Principal returned
/// * `i128` - Residual reward debt paid out
/// * `i128` - Resulting pool total weight
pub fn emit_unbonded(
    e: &Env,
    owner: &Address,
    index: u32,
    principal: i128,
    reward_debt: i128,
    total_weight: i128,
) {
    let topics = (Symbol::new(e, "unbonded"), owner.clone());
    let data = (index, principal, reward_debt, total_weight);
    e.events().publish(topics, data);
}

/// Emitted when a bond's principal is topped up.
///
/// # Topics
/// * `Symbol` - "bond_increased"
/// * `Address` - The pool owner
///
/// # Data
/// * `u32`  - Bond index
/// * `i128` - Amount added
/// * `i128` - New principal
/// * `i128` - Resulting pool total weight
pub fn emit_bond_increased(
    e: &Env,
    owner: &Address,
    index: u32,
    added: i128,
    new_principal: i128,
    total_weight: i128,
) {
    let topics = (Symbol::new(e, "bond_increased"), owner.clone());
    let data = (index, added, new_principal, total_weight);
    e.events().publish(topics, data);
}

/// Emitted when a bond's lock is extended.
///
/// # Topics
/// * `Symbol` - "lock_extended"
/// * `Address` - The pool owner
///
/// # Data
/// * `u32`  - Bond index
/// * `u64`  - Additional duration in seconds
/// * `u64`  - New expiry timestamp
/// * `i128` - Resulting pool total weight
pub fn emit_lock_extended(
    e: &Env,
    owner: &Address,
    index: u32,
    additional: u64,
    new_end_time: u64,
    total_weight: i128,
) {
    let topics = (Symbol::new(e, "lock_extended"), owner.clone());
    let data = (index, additional, new_end_time, total_weight);
    e.events().publish(topics, data);
}

/// Emitted when this pool collects and accrues its pending reward share.
///
/// # Topics
/// * `Symbol` - "rewards_accrued"
/// * `Address` - The pool owner
///
/// # Data
/// * `i128` - Share collected from the ledger
/// * `i128` - Portion folded into principals (compounding bonds)
/// * `i128` - Resulting pool total weight
pub fn emit_rewards_accrued(
    e: &Env,
    owner: &Address,
    amount: i128,
    compounded: i128,
    total_weight: i128,
) {
    let topics = (Symbol::new(e, "rewards_accrued"), owner.clone());
    e.events().publish(topics, (amount, compounded, total_weight));
}

/// Emitted when the owner claims a bond's reward debt.
///
/// # Topics
/// * `Symbol` - "reward_claimed"
/// * `Address` - The pool owner
///
/// # Data
/// * `u32`  - Bond index
/// * `i128` - Amount claimed
pub fn emit_reward_claimed(e: &Env, owner: &Address, index: u32, amount: i128) {
    let topics = (Symbol::new(e, "reward_claimed"), owner.clone());
    e.events().publish(topics, (index, amount));
}
