//! Shared test helpers for bond_pool tests.

#![cfg(test)]

use crate::{BondPool, BondPoolClient};
use reward_ledger::{RewardLedger, RewardLedgerClient};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env};

/// Default mint: large enough for all test scenarios.
pub const DEFAULT_MINT: i128 = 100_000_000_000_000;

/// One day in seconds.
pub const ONE_DAY: u64 = 86_400;
/// One week in seconds.
pub const SEVEN_DAYS: u64 = 7 * ONE_DAY;
/// Half of the standard 30-day lock.
pub const FIFTEEN_DAYS: u64 = 15 * ONE_DAY;
/// The standard lock used across tests.
pub const THIRTY_DAYS: u64 = 30 * ONE_DAY;
/// One (non-leap) year in seconds.
pub const ONE_YEAR: u64 = 365 * ONE_DAY;

/// Inflation decay constant used in tests: 5% per year at zero issuance.
pub const DECAY_BPS: u32 = 500;
pub const BPS_DENOM: u32 = 10_000;
pub const REWARD_CAP: i128 = 1_000_000_000_000;

/// Standard principal: 1000 tokens at 6 decimals.
pub const PRINCIPAL: i128 = 1_000_000_000;

pub struct Setup<'a> {
    pub ledger: RewardLedgerClient<'a>,
    pub pool: BondPoolClient<'a>,
    pub token: TokenClient<'a>,
    pub admin: Address,
    pub owner: Address,
    pub ledger_id: Address,
    pub pool_id: Address,
    pub token_id: Address,
}

/// Full environment setup: ledger + pool + stellar asset, mints to `owner`,
/// hands the asset admin role to the ledger, registers the pool and approves
/// it to spend the owner's tokens.
pub fn setup(e: &Env) -> Setup<'_> {
    setup_with_cap(e, REWARD_CAP)
}

pub fn setup_with_cap(e: &Env, reward_cap: i128) -> Setup<'_> {
    e.mock_all_auths();

    let admin = Address::generate(e);
    let owner = Address::generate(e);

    let ledger_id = e.register(RewardLedger, ());
    let ledger = RewardLedgerClient::new(e, &ledger_id);
    let pool_id = e.register(BondPool, ());
    let pool = BondPoolClient::new(e, &pool_id);

    let token_id = e
        .register_stellar_asset_contract_v2(admin.clone())
        .address();
    let asset_admin = StellarAssetClient::new(e, &token_id);
    asset_admin.mint(&owner, &DEFAULT_MINT);
    // The ledger mints inflation rewards, so it takes over as asset admin.
    asset_admin.set_admin(&ledger_id);

    ledger.initialize(&admin, &token_id, &DECAY_BPS, &BPS_DENOM, &reward_cap);
    ledger.deploy_pool(&owner, &pool_id);

    let token = TokenClient::new(e, &token_id);
    let expiry = e.ledger().sequence().saturating_add(10_000);
    token.approve(&owner, &pool_id, &DEFAULT_MINT, &expiry);

    Setup {
        ledger,
        pool,
        token,
        admin,
        owner,
        ledger_id,
        pool_id,
        token_id,
    }
}

/// Jump the ledger clock to an absolute timestamp.
pub fn warp_to(e: &Env, timestamp: u64) {
    e.ledger().with_mut(|li| li.timestamp = timestamp);
}

/// The reward pool accrued over `elapsed` seconds at the current rate.
pub fn expected_reward(total_staked: i128, rewards_issued: i128, reward_cap: i128, elapsed: u64) -> i128 {
    let rate = staking_math::inflation_rate_bps(DECAY_BPS, reward_cap, rewards_issued);
    staking_math::accrued_reward(total_staked, rate, elapsed, BPS_DENOM, "overflow")
}
