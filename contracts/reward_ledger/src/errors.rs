/// All panic messages used by the reward_ledger contract.
///
/// Using string constants avoids typos in `#[should_panic(expected = "...")]` tests.
pub const ERR_ALREADY_INITIALIZED: &str = "already initialized";
pub const ERR_NOT_INITIALIZED: &str = "not initialized";
pub const ERR_NOT_ADMIN: &str = "not admin";
pub const ERR_PAUSED: &str = "ledger is paused";
pub const ERR_DUPLICATE_POOL: &str = "pool already deployed for this account";
pub const ERR_POOL_TAKEN: &str = "pool contract already registered";
pub const ERR_NO_POOL: &str = "no pool deployed for this account";
pub const ERR_NOT_A_POOL: &str = "caller is not a registered pool";
pub const ERR_INSUFFICIENT_UNCLAIMED: &str = "insufficient unclaimed rewards";
pub const ERR_INVALID_AMOUNT: &str = "amount must be positive";
pub const ERR_NEGATIVE_WEIGHT: &str = "weight must be non-negative";
pub const ERR_INVALID_DECAY: &str = "decay constant out of range";
pub const ERR_INVALID_DENOMINATOR: &str = "denominator must be positive";
pub const ERR_INVALID_CAP: &str = "reward cap must be positive";
pub const ERR_STAKE_OVERFLOW: &str = "staked total overflow";
pub const ERR_STAKE_UNDERFLOW: &str = "staked total underflow";
pub const ERR_WEIGHT_OVERFLOW: &str = "weight total overflow";
pub const ERR_WEIGHT_UNDERFLOW: &str = "weight total underflow";
pub const ERR_REWARD_OVERFLOW: &str = "reward accrual overflow";
