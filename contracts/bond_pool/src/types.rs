use soroban_sdk::contracttype;

// ─── Bond state ────────────────────────────────────────────────────────────

/// A single principal commitment with a fixed lock duration.
///
/// Bonds are removed by swap-with-last-and-truncate, so indices are not
/// stable across `unbond` calls.
#[contracttype]
#[derive(Clone, Debug)]
pub struct Bond {
    /// Committed amount. Grows under compounding.
    pub principal: i128,
    /// Lock period in seconds; grows under `extend_lock_duration`.
    pub lock_duration: u64,
    /// Ledger timestamp at creation.
    pub start_time: u64,
    /// Pre-computed expiry: `start_time + lock_duration`.
    pub end_time: u64,
    /// Timestamp of the last reward accrual touching this bond.
    pub last_update_time: u64,
    /// Reward accrued but not yet transferred to the owner.
    pub reward_debt: i128,
    /// If true, accrued reward folds into `principal` instead of
    /// `reward_debt`. Fixed at creation time.
    pub is_compound: bool,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// The reward ledger this pool reports to.
    Ledger,
    /// The account owning this pool.
    Owner,
    /// Staking/reward token address.
    Token,
    /// The bond collection (Vec<Bond>).
    Bonds,
    /// Cached sum of all bond weights in this pool.
    TotalWeight,
}
