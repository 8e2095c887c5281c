//! Reward Ledger Contract
//!
//! Singleton manager of the staking subsystem. Tracks the global aggregates
//! (staked principal, bond weight, unclaimed rewards, last update time), the
//! account-to-pool registry, and mints/apportions the inflation-funded reward
//! pool across registered bond pools by weight share.
//!
//! ## Key design decisions
//!
//! - **Lazy, idempotent clock**: `update_rewards` is callable by anyone and is
//!   a no-op unless the ledger timestamp advanced past the last pass. Pools
//!   invoke it before every weight/stake mutation so stale weights never earn
//!   rewards computed under a newer clock.
//! - **Absolute weight notifications**: pools report their post-mutation total
//!   weight; the ledger keeps a per-pool cache and applies the difference.
//!   Stake notifications are deltas with an explicit direction flag.
//! - **Assign-then-pull distribution**: the Soroban host rejects reentrant
//!   invocations, so the update pass cannot call into a pool that is calling
//!   it. Instead each pass assigns every pool's proportional share to a
//!   per-pool pending bucket; pools collect their bucket through
//!   `take_pending_reward` before mutating their own records. New rewards are
//!   minted to the ledger itself at assignment time, so every later claim is
//!   solvent.
//! - **Issuance cap**: rewards are clamped so lifetime issuance never exceeds
//!   the configured cap; the inflation rate decays toward zero as issuance
//!   approaches it.

#![no_std]

mod errors;
mod events;
pub mod parameters;
mod pool_client;
mod types;

#[cfg(test)]
mod test_helpers;



use errors::*;
use types::DataKey;

use soroban_sdk::{
    contract, contractimpl,
    token::{StellarAssetClient, TokenClient},
    vec, Address, Env, Vec,
};
use staking_math::{add_i128, div_i128, mul_i128, sub_i128};

// ─── Helpers ───────────────────────────────────────────────────────────────

fn require_initialized(e: &Env) {
    if !e.storage().instance().has(&DataKey::Admin) {
        panic!("{}", ERR_NOT_INITIALIZED);
    }
}

pub(crate) fn require_admin(e: &Env, caller: &Address) {
    caller.require_auth();
    let stored: Address = e
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .unwrap_or_else(|| panic!("{}", ERR_NOT_INITIALIZED));
    if stored != *caller {
        panic!("{}", ERR_NOT_ADMIN);
    }
}

/// Authorize a pool-originated call and resolve the owning account.
fn require_registered_pool(e: &Env, pool: &Address) -> Address {
    pool.require_auth();
    e.storage()
        .persistent()
        .get(&DataKey::AccountOf(pool.clone()))
        .unwrap_or_else(|| panic!("{}", ERR_NOT_A_POOL))
}

fn get_token(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::Token)
        .unwrap_or_else(|| panic!("{}", ERR_NOT_INITIALIZED))
}

fn read_amount(e: &Env, key: &DataKey) -> i128 {
    e.storage().instance().get(key).unwrap_or(0_i128)
}

fn pool_weight(e: &Env, pool: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&DataKey::PoolWeight(pool.clone()))
        .unwrap_or(0_i128)
}

fn accounts(e: &Env) -> Vec<Address> {
    e.storage()
        .persistent()
        .get(&DataKey::Accounts)
        .unwrap_or_else(|| vec![e])
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct RewardLedger;

#[contractimpl]
impl RewardLedger {
    // ── Setup ──────────────────────────────────────────────────────────────

    /// One-time initialization.
    ///
    /// `token` serves as both the staked principal and the minted reward; the
    /// ledger must be installed as the token admin so it can mint inflation
    /// rewards to itself. `reward_cap` bounds lifetime issuance and drives the
    /// inflation decay. Panics if called again after initialization.
    pub fn initialize(
        e: Env,
        admin: Address,
        token: Address,
        decay_constant: u32,
        bps_denominator: u32,
        reward_cap: i128,
    ) {
        if e.storage().instance().has(&DataKey::Admin) {
            panic!("{}", ERR_ALREADY_INITIALIZED);
        }
        parameters::check_decay_constant(decay_constant);
        parameters::check_bps_denominator(bps_denominator);
        if reward_cap <= 0 {
            panic!("{}", ERR_INVALID_CAP);
        }

        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::Token, &token);
        e.storage()
            .instance()
            .set(&DataKey::DecayConstant, &decay_constant);
        e.storage()
            .instance()
            .set(&DataKey::BpsDenominator, &bps_denominator);
        e.storage().instance().set(&DataKey::RewardCap, &reward_cap);
        e.storage()
            .instance()
            .set(&DataKey::LastUpdate, &e.ledger().timestamp());
    }

    /// Register and initialize a bond pool for `account`.
    ///
    /// Exactly one pool per account, and one account per pool contract; both
    /// bindings are immutable once set. The pool is initialized through a
    /// cross-contract call so it is bound to this ledger, the account and the
    /// staking token atomically with its registration.
    pub fn deploy_pool(e: Env, account: Address, pool: Address) -> Address {
        require_initialized(&e);
        account.require_auth();
        if parameters::get_paused(&e) {
            panic!("{}", ERR_PAUSED);
        }

        let by_account = DataKey::PoolFor(account.clone());
        if e.storage().persistent().has(&by_account) {
            panic!("{}", ERR_DUPLICATE_POOL);
        }
        let by_pool = DataKey::AccountOf(pool.clone());
        if e.storage().persistent().has(&by_pool) {
            panic!("{}", ERR_POOL_TAKEN);
        }

        e.storage().persistent().set(&by_account, &pool);
        e.storage().persistent().set(&by_pool, &account);
        e.storage()
            .persistent()
            .set(&DataKey::PoolWeight(pool.clone()), &0_i128);

        let mut list = accounts(&e);
        list.push_back(account.clone());
        e.storage().persistent().set(&DataKey::Accounts, &list);

        let token = get_token(&e);
        pool_client::initialize_pool(&e, &pool, &e.current_contract_address(), &account, &token);

        events::emit_pool_deployed(&e, &account, &pool);
        pool
    }

    // ── Reward accrual ─────────────────────────────────────────────────────

    /// Advance the ledger clock and apportion rewards accrued since the last
    /// pass. Callable by anyone; a no-op when time has not advanced.
    ///
    /// The reward pool is `total_staked * rate * elapsed / (year * denom)`
    /// where `rate = decay * (cap - issued) / cap`, clamped so issuance never
    /// exceeds the cap. Each registered pool is assigned
    /// `total_reward * pool_weight / total_weight` of pending reward, computed
    /// from the weights recorded before this pass; rounding dust stays
    /// unclaimed. Pools collect their assignment via `take_pending_reward`.
    pub fn update_rewards(e: Env) {
        require_initialized(&e);
        let now = e.ledger().timestamp();
        let last: u64 = e
            .storage()
            .instance()
            .get(&DataKey::LastUpdate)
            .unwrap_or(now);
        if now <= last {
            return;
        }
        let elapsed = now - last;

        let staked = read_amount(&e, &DataKey::TotalStaked);
        let total_weight = read_amount(&e, &DataKey::TotalBondWeight);

        if !parameters::get_paused(&e) && staked > 0 && total_weight > 0 {
            let cap = read_amount(&e, &DataKey::RewardCap);
            let issued = read_amount(&e, &DataKey::RewardsIssued);
            let rate = staking_math::inflation_rate_bps(
                parameters::get_decay_constant(&e),
                cap,
                issued,
            );
            let mut total_reward = staking_math::accrued_reward(
                staked,
                rate,
                elapsed,
                parameters::get_bps_denominator(&e),
                ERR_REWARD_OVERFLOW,
            );
            let headroom = sub_i128(cap, issued, ERR_REWARD_OVERFLOW);
            if total_reward > headroom {
                total_reward = headroom;
            }

            if total_reward > 0 {
                let unclaimed = add_i128(
                    read_amount(&e, &DataKey::Unclaimed),
                    total_reward,
                    ERR_REWARD_OVERFLOW,
                );
                e.storage().instance().set(&DataKey::Unclaimed, &unclaimed);
                e.storage().instance().set(
                    &DataKey::RewardsIssued,
                    &add_i128(issued, total_reward, ERR_REWARD_OVERFLOW),
                );

                // Mint before assigning shares so every later claim against
                // the pending buckets is solvent.
                let token = get_token(&e);
                StellarAssetClient::new(&e, &token)
                    .mint(&e.current_contract_address(), &total_reward);

                events::emit_rewards_distributed(&e, total_reward, unclaimed, now);

                for account in accounts(&e).iter() {
                    let pool: Address = e
                        .storage()
                        .persistent()
                        .get(&DataKey::PoolFor(account.clone()))
                        .unwrap_or_else(|| panic!("{}", ERR_NO_POOL));
                    let share = div_i128(
                        mul_i128(total_reward, pool_weight(&e, &pool), ERR_REWARD_OVERFLOW),
                        total_weight,
                        ERR_REWARD_OVERFLOW,
                    );
                    if share > 0 {
                        let key = DataKey::PendingReward(pool.clone());
                        let pending: i128 =
                            e.storage().persistent().get(&key).unwrap_or(0_i128);
                        e.storage().persistent().set(
                            &key,
                            &add_i128(pending, share, ERR_REWARD_OVERFLOW),
                        );
                    }
                }
            }
        }

        e.storage().instance().set(&DataKey::LastUpdate, &now);
    }

    /// Collect and zero the calling pool's pending reward assignment.
    ///
    /// Pools invoke this right after `update_rewards` and before mutating
    /// their own records, so accrual always happens under pre-mutation
    /// weights.
    pub fn take_pending_reward(e: Env, pool: Address) -> i128 {
        require_initialized(&e);
        let _account = require_registered_pool(&e, &pool);
        let key = DataKey::PendingReward(pool);
        let pending: i128 = e.storage().persistent().get(&key).unwrap_or(0_i128);
        if pending > 0 {
            e.storage().persistent().set(&key, &0_i128);
        }
        pending
    }

    // ── Pool-originated notifications ──────────────────────────────────────

    /// Replace the recorded weight of the calling pool with its new absolute
    /// total and adjust the global aggregate by the difference.
    pub fn notify_weight_change(e: Env, pool: Address, new_pool_weight: i128) {
        require_initialized(&e);
        let _account = require_registered_pool(&e, &pool);
        if new_pool_weight < 0 {
            panic!("{}", ERR_NEGATIVE_WEIGHT);
        }

        let old = pool_weight(&e, &pool);
        let total = read_amount(&e, &DataKey::TotalBondWeight);
        let grown = add_i128(total, new_pool_weight, ERR_WEIGHT_OVERFLOW);
        let adjusted = sub_i128(grown, old, ERR_WEIGHT_UNDERFLOW);
        if adjusted < 0 {
            panic!("{}", ERR_WEIGHT_UNDERFLOW);
        }

        e.storage()
            .persistent()
            .set(&DataKey::PoolWeight(pool), &new_pool_weight);
        e.storage()
            .instance()
            .set(&DataKey::TotalBondWeight, &adjusted);
    }

    /// Apply a staked-principal delta reported by the calling pool.
    pub fn notify_stake_change(e: Env, pool: Address, amount: i128, increase: bool) {
        require_initialized(&e);
        let _account = require_registered_pool(&e, &pool);
        if amount <= 0 {
            panic!("{}", ERR_INVALID_AMOUNT);
        }

        let total = read_amount(&e, &DataKey::TotalStaked);
        let new_total = if increase {
            add_i128(total, amount, ERR_STAKE_OVERFLOW)
        } else {
            let t = sub_i128(total, amount, ERR_STAKE_UNDERFLOW);
            if t < 0 {
                panic!("{}", ERR_STAKE_UNDERFLOW);
            }
            t
        };
        e.storage().instance().set(&DataKey::TotalStaked, &new_total);
    }

    /// Transfer `amount` of previously minted rewards to `recipient` on behalf
    /// of the calling pool. Fails when the unclaimed balance cannot cover it.
    pub fn claim_reward(e: Env, pool: Address, recipient: Address, amount: i128) {
        require_initialized(&e);
        let account = require_registered_pool(&e, &pool);
        if amount <= 0 {
            panic!("{}", ERR_INVALID_AMOUNT);
        }

        let unclaimed = read_amount(&e, &DataKey::Unclaimed);
        if amount > unclaimed {
            panic!("{}", ERR_INSUFFICIENT_UNCLAIMED);
        }
        let remaining = unclaimed - amount;
        e.storage().instance().set(&DataKey::Unclaimed, &remaining);

        let token = get_token(&e);
        TokenClient::new(&e, &token).transfer(&e.current_contract_address(), &recipient, &amount);

        events::emit_reward_claimed(&e, &account, &recipient, amount, remaining);
    }

    // ── Governance ─────────────────────────────────────────────────────────

    pub fn set_decay_constant(e: Env, caller: Address, value: u32) {
        parameters::set_decay_constant(&e, &caller, value);
    }

    pub fn set_bps_denominator(e: Env, caller: Address, value: u32) {
        parameters::set_bps_denominator(&e, &caller, value);
    }

    pub fn set_paused(e: Env, caller: Address, flag: bool) {
        parameters::set_paused(&e, &caller, flag);
    }

    // ── Read-only surface ──────────────────────────────────────────────────

    /// Look up the pool registered for `account`.
    pub fn bond_pools(e: Env, account: Address) -> Address {
        e.storage()
            .persistent()
            .get(&DataKey::PoolFor(account))
            .unwrap_or_else(|| panic!("{}", ERR_NO_POOL))
    }

    pub fn has_pool(e: Env, account: Address) -> bool {
        e.storage().persistent().has(&DataKey::PoolFor(account))
    }

    pub fn get_total_bond_weight(e: Env) -> i128 {
        read_amount(&e, &DataKey::TotalBondWeight)
    }

    pub fn total_staked(e: Env) -> i128 {
        read_amount(&e, &DataKey::TotalStaked)
    }

    pub fn total_unclaimed_rewards(e: Env) -> i128 {
        read_amount(&e, &DataKey::Unclaimed)
    }

    pub fn last_update_time(e: Env) -> u64 {
        e.storage().instance().get(&DataKey::LastUpdate).unwrap_or(0)
    }

    pub fn get_pool_weight(e: Env, pool: Address) -> i128 {
        pool_weight(&e, &pool)
    }

    pub fn get_pending_reward(e: Env, pool: Address) -> i128 {
        e.storage()
            .persistent()
            .get(&DataKey::PendingReward(pool))
            .unwrap_or(0_i128)
    }

    pub fn decay_constant(e: Env) -> u32 {
        parameters::get_decay_constant(&e)
    }

    pub fn bps_denominator(e: Env) -> u32 {
        parameters::get_bps_denominator(&e)
    }

    pub fn rewards_issued(e: Env) -> i128 {
        read_amount(&e, &DataKey::RewardsIssued)
    }

    pub fn reward_cap(e: Env) -> i128 {
        read_amount(&e, &DataKey::RewardCap)
    }

    pub fn is_paused(e: Env) -> bool {
        parameters::get_paused(&e)
    }

    pub fn stakeholder_count(e: Env) -> u32 {
        accounts(&e).len()
    }
}
