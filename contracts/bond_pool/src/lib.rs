//! Bond Pool Contract
//!
//! Per-account sub-ledger of the staking subsystem. Holds the account's bond
//! records, maintains the cached sum of their time-weighted shares, and
//! reports every weight/stake change upward to the reward ledger.
//!
//! ## Key design decisions
//!
//! - **Update-then-pull before every mutation**: every mutating entry point
//!   first triggers the ledger's `update_rewards` pass and then collects this
//!   pool's pending reward assignment, so accrual always lands on the
//!   pre-mutation records. All cross-contract calls flow pool -> ledger; the
//!   ledger never calls back mid-operation (the Soroban host would reject the
//!   reentrancy).
//! - **One weight formula**: a bond's weight is always
//!   `principal * log2(lock_duration + unit)` using the (possibly extended)
//!   lock duration, never the remaining time, so the subtraction at unbond
//!   time mirrors the additions exactly.
//! - **Swap-and-truncate removal**: `unbond` moves the last record into the
//!   vacated slot; callers must not assume index stability across calls.
//! - **Checks-Effects-Interactions**: local storage is final before any token
//!   transfer leaves or enters the pool.

#![no_std]

mod errors;
mod events;
mod ledger_client;
mod types;

#[cfg(test)]
mod test_helpers;



use errors::*;
pub use types::Bond;
use types::DataKey;

use soroban_sdk::{contract, contractimpl, token::TokenClient, vec, Address, Env, Vec};
use staking_math::{add_i128, add_u64, div_i128, mul_i128, sub_i128};

// ─── Helpers ───────────────────────────────────────────────────────────────

fn stored_owner(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::Owner)
        .unwrap_or_else(|| panic!("{}", ERR_NOT_INITIALIZED))
}

fn stored_ledger(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::Ledger)
        .unwrap_or_else(|| panic!("{}", ERR_NOT_INITIALIZED))
}

fn stored_token(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::Token)
        .unwrap_or_else(|| panic!("{}", ERR_NOT_INITIALIZED))
}

fn load_bonds(e: &Env) -> Vec<Bond> {
    e.storage()
        .persistent()
        .get(&DataKey::Bonds)
        .unwrap_or_else(|| vec![e])
}

fn store_bonds(e: &Env, bonds: &Vec<Bond>) {
    e.storage().persistent().set(&DataKey::Bonds, bonds);
}

fn load_total_weight(e: &Env) -> i128 {
    e.storage()
        .persistent()
        .get(&DataKey::TotalWeight)
        .unwrap_or(0_i128)
}

fn store_total_weight(e: &Env, weight: i128) {
    e.storage().persistent().set(&DataKey::TotalWeight, &weight);
}

fn bond_at(bonds: &Vec<Bond>, index: u32) -> Bond {
    bonds
        .get(index)
        .unwrap_or_else(|| panic!("{}", ERR_INVALID_INDEX))
}

/// A bond's current weight contribution. Always derived from the principal
/// and the full lock duration.
fn current_weight(bond: &Bond) -> i128 {
    staking_math::bond_weight(bond.principal, bond.lock_duration, ERR_WEIGHT_OVERFLOW)
}

fn subtract_weight(total: i128, weight: i128) -> i128 {
    let remaining = sub_i128(total, weight, ERR_WEIGHT_UNDERFLOW);
    if remaining < 0 {
        panic!("{}", ERR_WEIGHT_UNDERFLOW);
    }
    remaining
}

/// Synchronize with the ledger: run its update pass, then collect and accrue
/// this pool's pending reward. Called at the top of every mutating entry
/// point, before any local mutation. Returns the amount accrued.
fn pull_rewards(e: &Env, ledger: &Address) -> i128 {
    ledger_client::update_ledger_rewards(e, ledger);
    let pool = e.current_contract_address();
    let pending = ledger_client::take_pending_reward(e, ledger, &pool);
    if pending > 0 {
        accrue_share(e, ledger, pending);
    }
    pending
}

/// Apportion `amount` of collected reward across the bonds by their
/// pre-accrual weight share.
///
/// Compounding bonds fold their portion into the principal (the tokens are
/// claimed from the ledger into pool custody in the same call); the rest
/// accumulate reward debt. The weight of a compounding bond changes with its
/// principal, so shares are computed from a pre-mutation snapshot, all
/// mutations are applied, and only then is the cached total recomputed from
/// the post-accrual records in a single pass.
fn accrue_share(e: &Env, ledger: &Address, amount: i128) {
    let total_weight = load_total_weight(e);
    if total_weight == 0 || amount <= 0 {
        return;
    }

    let now = e.ledger().timestamp();
    let mut bonds = load_bonds(e);
    let count = bonds.len();

    // Phase 1: shares from the pre-mutation weight snapshot.
    let mut shares: Vec<i128> = vec![e];
    for bond in bonds.iter() {
        let share = div_i128(
            mul_i128(amount, current_weight(&bond), ERR_REWARD_OVERFLOW),
            total_weight,
            ERR_REWARD_OVERFLOW,
        );
        shares.push_back(share);
    }

    // Phase 2: apply all principal/reward-debt mutations.
    let mut compounded: i128 = 0;
    for i in 0..count {
        let mut bond = bonds.get_unchecked(i);
        let share = shares.get_unchecked(i);
        if share > 0 {
            if bond.is_compound {
                bond.principal = add_i128(bond.principal, share, ERR_PRINCIPAL_OVERFLOW);
                compounded = add_i128(compounded, share, ERR_REWARD_OVERFLOW);
            } else {
                bond.reward_debt = add_i128(bond.reward_debt, share, ERR_REWARD_OVERFLOW);
            }
        }
        bond.last_update_time = now;
        bonds.set(i, bond);
    }
    store_bonds(e, &bonds);

    // Phase 3: recompute the cached total from the post-accrual records.
    let mut new_total: i128 = 0;
    for bond in bonds.iter() {
        new_total = add_i128(new_total, current_weight(&bond), ERR_WEIGHT_OVERFLOW);
    }
    store_total_weight(e, new_total);

    let pool = e.current_contract_address();
    if compounded > 0 {
        // Compounded rewards become pool-held principal.
        ledger_client::claim_from_ledger(e, ledger, &pool, &pool, compounded);
    }
    ledger_client::notify_weight_change(e, ledger, &pool, new_total);
    if compounded > 0 {
        ledger_client::notify_stake_change(e, ledger, &pool, compounded, true);
    }

    events::emit_rewards_accrued(e, &stored_owner(e), amount, compounded, new_total);
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct BondPool;

#[contractimpl]
impl BondPool {
    // ── Setup ──────────────────────────────────────────────────────────────

    /// One-time initialization, invoked by the ledger during `deploy_pool`.
    /// Binds the pool to its ledger, owning account and staking token.
    pub fn initialize(e: Env, ledger: Address, owner: Address, token: Address) {
        if e.storage().instance().has(&DataKey::Owner) {
            panic!("{}", ERR_ALREADY_INITIALIZED);
        }
        e.storage().instance().set(&DataKey::Ledger, &ledger);
        e.storage().instance().set(&DataKey::Owner, &owner);
        e.storage().instance().set(&DataKey::Token, &token);
    }

    // ── Bond lifecycle ─────────────────────────────────────────────────────

    /// Lock `amount` of the staking token for `lock_duration` seconds.
    ///
    /// Requirements:
    /// - `amount` > 0, `lock_duration` > 0
    /// - Caller has approved the pool to spend `amount`
    ///
    /// The compounding flag is fixed for the bond's lifetime. Returns the new
    /// record's index; indices are invalidated by later `unbond` calls.
    pub fn bond(e: Env, amount: i128, lock_duration: u64, is_compound: bool) -> u32 {
        let owner = stored_owner(&e);
        owner.require_auth();

        if amount <= 0 {
            panic!("{}", ERR_INVALID_AMOUNT);
        }
        if lock_duration == 0 {
            panic!("{}", ERR_INVALID_DURATION);
        }

        let ledger = stored_ledger(&e);
        pull_rewards(&e, &ledger);

        let now = e.ledger().timestamp();
        let end_time = add_u64(now, lock_duration, ERR_DURATION_OVERFLOW);
        let weight = staking_math::bond_weight(amount, lock_duration, ERR_WEIGHT_OVERFLOW);

        let mut bonds = load_bonds(&e);
        let index = bonds.len();
        bonds.push_back(Bond {
            principal: amount,
            lock_duration,
            start_time: now,
            end_time,
            last_update_time: now,
            reward_debt: 0,
            is_compound,
        });
        store_bonds(&e, &bonds);

        let new_total = add_i128(load_total_weight(&e), weight, ERR_WEIGHT_OVERFLOW);
        store_total_weight(&e, new_total);

        let pool = e.current_contract_address();
        ledger_client::notify_weight_change(&e, &ledger, &pool, new_total);
        ledger_client::notify_stake_change(&e, &ledger, &pool, amount, true);

        // Pull the principal in last (caller must have approved).
        let token = stored_token(&e);
        TokenClient::new(&e, &token).transfer_from(&pool, &owner, &pool, &amount);

        events::emit_bonded(&e, &owner, index, amount, lock_duration, is_compound, new_total);
        index
    }

    /// Release the bond at `index` after its lock has expired.
    ///
    /// Pays out the principal plus any residual reward debt (claimed through
    /// the ledger in the same call) and removes the record by
    /// swap-with-last-and-truncate. Returns the total payout.
    pub fn unbond(e: Env, index: u32) -> i128 {
        let owner = stored_owner(&e);
        owner.require_auth();

        let now = e.ledger().timestamp();
        {
            let bonds = load_bonds(&e);
            let bond = bond_at(&bonds, index);
            if now < bond.end_time {
                panic!("{}", ERR_STILL_LOCKED);
            }
        }

        let ledger = stored_ledger(&e);
        pull_rewards(&e, &ledger);

        // The reward pass may have compounded this bond; re-read it.
        let mut bonds = load_bonds(&e);
        let bond = bond_at(&bonds, index);
        let weight = current_weight(&bond);

        let last_index = bonds.len() - 1;
        if index != last_index {
            let last = bond_at(&bonds, last_index);
            bonds.set(index, last);
        }
        bonds.pop_back();
        store_bonds(&e, &bonds);

        let new_total = subtract_weight(load_total_weight(&e), weight);
        store_total_weight(&e, new_total);

        let pool = e.current_contract_address();
        ledger_client::notify_weight_change(&e, &ledger, &pool, new_total);
        ledger_client::notify_stake_change(&e, &ledger, &pool, bond.principal, false);
        if bond.reward_debt > 0 {
            ledger_client::claim_from_ledger(&e, &ledger, &pool, &owner, bond.reward_debt);
        }

        let token = stored_token(&e);
        TokenClient::new(&e, &token).transfer(&pool, &owner, &bond.principal);

        events::emit_unbonded(&e, &owner, index, bond.principal, bond.reward_debt, new_total);
        add_i128(bond.principal, bond.reward_debt, ERR_PRINCIPAL_OVERFLOW)
    }

    /// Top up the bond at `index` with `amount` additional principal.
    pub fn increase_amount(e: Env, index: u32, amount: i128) {
        let owner = stored_owner(&e);
        owner.require_auth();

        if amount <= 0 {
            panic!("{}", ERR_INVALID_AMOUNT);
        }
        {
            let bonds = load_bonds(&e);
            let _ = bond_at(&bonds, index);
        }

        let ledger = stored_ledger(&e);
        pull_rewards(&e, &ledger);

        let mut bonds = load_bonds(&e);
        let mut bond = bond_at(&bonds, index);
        let old_weight = current_weight(&bond);
        bond.principal = add_i128(bond.principal, amount, ERR_PRINCIPAL_OVERFLOW);
        let new_weight = current_weight(&bond);
        let new_principal = bond.principal;
        bonds.set(index, bond);
        store_bonds(&e, &bonds);

        let new_total = add_i128(
            subtract_weight(load_total_weight(&e), old_weight),
            new_weight,
            ERR_WEIGHT_OVERFLOW,
        );
        store_total_weight(&e, new_total);

        let pool = e.current_contract_address();
        ledger_client::notify_weight_change(&e, &ledger, &pool, new_total);
        ledger_client::notify_stake_change(&e, &ledger, &pool, amount, true);

        let token = stored_token(&e);
        TokenClient::new(&e, &token).transfer_from(&pool, &owner, &pool, &amount);

        events::emit_bond_increased(&e, &owner, index, amount, new_principal, new_total);
    }

    /// Extend the lock of the bond at `index` by `additional_duration`
    /// seconds. Rejected once the existing lock has expired.
    pub fn extend_lock_duration(e: Env, index: u32, additional_duration: u64) {
        let owner = stored_owner(&e);
        owner.require_auth();

        if additional_duration == 0 {
            panic!("{}", ERR_INVALID_DURATION);
        }
        {
            let bonds = load_bonds(&e);
            let _ = bond_at(&bonds, index);
        }

        let ledger = stored_ledger(&e);
        pull_rewards(&e, &ledger);

        let now = e.ledger().timestamp();
        let mut bonds = load_bonds(&e);
        let mut bond = bond_at(&bonds, index);
        if now >= bond.end_time {
            panic!("{}", ERR_LOCK_EXPIRED);
        }

        let old_weight = current_weight(&bond);
        bond.lock_duration = add_u64(bond.lock_duration, additional_duration, ERR_DURATION_OVERFLOW);
        bond.end_time = add_u64(bond.end_time, additional_duration, ERR_DURATION_OVERFLOW);
        let new_weight = current_weight(&bond);
        let new_end_time = bond.end_time;
        bonds.set(index, bond);
        store_bonds(&e, &bonds);

        let new_total = add_i128(
            subtract_weight(load_total_weight(&e), old_weight),
            new_weight,
            ERR_WEIGHT_OVERFLOW,
        );
        store_total_weight(&e, new_total);

        let pool = e.current_contract_address();
        ledger_client::notify_weight_change(&e, &ledger, &pool, new_total);

        events::emit_lock_extended(&e, &owner, index, additional_duration, new_end_time, new_total);
    }

    // ── Rewards ────────────────────────────────────────────────────────────

    /// Synchronize this pool with the ledger: trigger an update pass, then
    /// collect and accrue any pending reward assignment. Callable by anyone
    /// (it only moves this pool's own assignment into its own records).
    /// Returns the amount accrued.
    pub fn sync_rewards(e: Env) -> i128 {
        let ledger = stored_ledger(&e);
        pull_rewards(&e, &ledger)
    }

    /// Claim the accrued reward debt of the bond at `index`.
    ///
    /// Zeroes the debt before requesting the ledger transfer, so claiming
    /// twice without intervening accrual pays exactly once. Returns the
    /// amount claimed (zero when nothing had accrued).
    pub fn claim_reward(e: Env, index: u32) -> i128 {
        let owner = stored_owner(&e);
        owner.require_auth();

        {
            let bonds = load_bonds(&e);
            let _ = bond_at(&bonds, index);
        }

        let ledger = stored_ledger(&e);
        pull_rewards(&e, &ledger);

        let mut bonds = load_bonds(&e);
        let mut bond = bond_at(&bonds, index);
        let amount = bond.reward_debt;
        if amount > 0 {
            bond.reward_debt = 0;
            bonds.set(index, bond);
            store_bonds(&e, &bonds);

            let pool = e.current_contract_address();
            ledger_client::claim_from_ledger(&e, &ledger, &pool, &owner, amount);
            events::emit_reward_claimed(&e, &owner, index, amount);
        }
        amount
    }

    // ── Read-only surface ──────────────────────────────────────────────────

    pub fn get_bonds_count(e: Env) -> u32 {
        load_bonds(&e).len()
    }

    pub fn get_total_bond_weight(e: Env) -> i128 {
        load_total_weight(&e)
    }

    pub fn get_bond(e: Env, index: u32) -> Bond {
        bond_at(&load_bonds(&e), index)
    }

    pub fn get_owner(e: Env) -> Address {
        stored_owner(&e)
    }

    pub fn get_ledger(e: Env) -> Address {
        stored_ledger(&e)
    }
}
