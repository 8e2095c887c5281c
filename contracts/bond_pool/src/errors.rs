/// All panic messages used by the bond_pool contract.
///
/// Using string constants avoids typos in `#[should_panic(expected = "...")]` tests.
pub const ERR_ALREADY_INITIALIZED: &str = "already initialized";
pub const ERR_NOT_INITIALIZED: &str = "not initialized";
pub const ERR_INVALID_AMOUNT: &str = "amount must be positive";
pub const ERR_INVALID_DURATION: &str = "duration must be positive";
pub const ERR_INVALID_INDEX: &str = "bond index out of range";
pub const ERR_STILL_LOCKED: &str = "bond is still locked";
pub const ERR_LOCK_EXPIRED: &str = "bond lock has expired";
pub const ERR_DURATION_OVERFLOW: &str = "bond expiry timestamp would overflow";
pub const ERR_WEIGHT_OVERFLOW: &str = "bond weight overflow";
pub const ERR_WEIGHT_UNDERFLOW: &str = "pool weight underflow";
pub const ERR_PRINCIPAL_OVERFLOW: &str = "principal overflow";
pub const ERR_REWARD_OVERFLOW: &str = "reward accrual overflow";
