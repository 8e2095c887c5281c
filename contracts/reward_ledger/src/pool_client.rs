//! Cross-contract dispatch into per-account bond pools.
//!
//! The ledger never calls into a pool that might call back (the Soroban host
//! rejects reentrant invocations), so this is limited to the one-shot
//! initialization at registration time. Reward delivery is assign-then-pull:
//! pools collect their pending share via `take_pending_reward`.

use soroban_sdk::{vec, Address, Env, IntoVal, Symbol, Val};

/// Initialize a freshly registered pool with its ledger, owner and token.
pub fn initialize_pool(e: &Env, pool: &Address, ledger: &Address, owner: &Address, token: &Address) {
    let args = vec![
        e,
        ledger.into_val(e),
        owner.into_val(e),
        token.into_val(e),
    ];
    e.invoke_contract::<Val>(pool, &Symbol::new(e, "initialize"), args);
}
