//! Shared test helpers for reward_ledger tests.

#![cfg(test)]

use crate::{RewardLedger, RewardLedgerClient};
use bond_pool::{BondPool, BondPoolClient};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env};

/// Default mint per funded account: large enough for all test scenarios.
pub const DEFAULT_MINT: i128 = 100_000_000_000_000;

/// One day in seconds.
pub const ONE_DAY: u64 = 86_400;
pub const TEN_DAYS: u64 = 10 * ONE_DAY;
pub const FIFTEEN_DAYS: u64 = 15 * ONE_DAY;
pub const THIRTY_DAYS: u64 = 30 * ONE_DAY;
pub const ONE_YEAR: u64 = 365 * ONE_DAY;

/// Inflation decay constant used in tests: 5% per year at zero issuance.
pub const DECAY_BPS: u32 = 500;
pub const BPS_DENOM: u32 = 10_000;
pub const REWARD_CAP: i128 = 1_000_000_000_000;

/// Standard principal: 1000 tokens at 6 decimals.
pub const PRINCIPAL: i128 = 1_000_000_000;

pub struct Setup<'a> {
    pub ledger: RewardLedgerClient<'a>,
    pub token: TokenClient<'a>,
    pub admin: Address,
    pub alice: Address,
    pub bob: Address,
    pub ledger_id: Address,
    pub token_id: Address,
}

/// Ledger + stellar asset setup with two funded accounts.
///
/// Mints to both accounts before handing the asset admin role to the ledger
/// (the original admin loses mint rights afterwards), then initializes the
/// ledger with the standard test parameters.
pub fn setup(e: &Env) -> Setup<'_> {
    setup_with_cap(e, REWARD_CAP)
}

pub fn setup_with_cap(e: &Env, reward_cap: i128) -> Setup<'_> {
    e.mock_all_auths();

    let admin = Address::generate(e);
    let alice = Address::generate(e);
    let bob = Address::generate(e);

    let ledger_id = e.register(RewardLedger, ());
    let ledger = RewardLedgerClient::new(e, &ledger_id);

    let token_id = e
        .register_stellar_asset_contract_v2(admin.clone())
        .address();
    let asset_admin = StellarAssetClient::new(e, &token_id);
    asset_admin.mint(&alice, &DEFAULT_MINT);
    asset_admin.mint(&bob, &DEFAULT_MINT);
    asset_admin.set_admin(&ledger_id);

    ledger.initialize(&admin, &token_id, &DECAY_BPS, &BPS_DENOM, &reward_cap);

    Setup {
        ledger,
        token: TokenClient::new(e, &token_id),
        admin,
        alice,
        bob,
        ledger_id,
        token_id,
    }
}

/// Deploy and register a bond pool for `account`, approving it to spend the
/// account's tokens.
pub fn register_pool<'a>(e: &'a Env, s: &Setup<'a>, account: &Address) -> (BondPoolClient<'a>, Address) {
    let pool_id = e.register(BondPool, ());
    s.ledger.deploy_pool(account, &pool_id);

    let expiry = e.ledger().sequence().saturating_add(10_000);
    s.token.approve(account, &pool_id, &DEFAULT_MINT, &expiry);

    (BondPoolClient::new(e, &pool_id), pool_id)
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
