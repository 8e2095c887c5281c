use soroban_sdk::contracttype;

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Governance/administration address.
    Admin,
    /// Token serving as both staked principal and minted reward.
    Token,
    /// Inflation decay constant in basis points.
    DecayConstant,
    /// Basis-point denominator of the inflation formula.
    BpsDenominator,
    /// Maximum reward issuance (the cap the inflation rate decays toward).
    RewardCap,
    /// Total reward issued through this ledger so far.
    RewardsIssued,
    /// Sum of all live bond principals across all pools.
    TotalStaked,
    /// Sum of all pools' bond weights.
    TotalBondWeight,
    /// Rewards minted but not yet transferred to accounts.
    Unclaimed,
    /// Ledger clock, advanced only by update_rewards.
    LastUpdate,
    /// Emergency pause flag.
    Paused,
    /// Per-account pool lookup (one pool per account, immutable once set).
    PoolFor(soroban_sdk::Address),
    /// Reverse lookup: pool contract -> owning account.
    AccountOf(soroban_sdk::Address),
    /// Ledger-side cache of each pool's absolute weight.
    PoolWeight(soroban_sdk::Address),
    /// Reward assigned to a pool but not yet pulled by it.
    PendingReward(soroban_sdk::Address),
    /// Enumerable stakeholder list (Vec<Address>).
    Accounts,
}
