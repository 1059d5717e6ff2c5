//! Router events

use soroban_sdk::{Address, Env, Symbol, Vec};

/// Emitted when router is initialized
pub fn emit_initialized(env: &Env, factory: &Address, wnative: &Address) {
    env.events().publish(
        (Symbol::new(env, "RouterInit"),),
        (factory.clone(), wnative.clone()),
    );
}

/// Emitted when liquidity is deposited through the router
pub fn emit_add_liquidity(
    env: &Env,
    sender: &Address,
    pair: &Address,
    amount_a: u128,
    amount_b: u128,
    liquidity: u128,
) {
    env.events().publish(
        (Symbol::new(env, "AddLiq"),),
        (sender.clone(), pair.clone(), amount_a, amount_b, liquidity),
    );
}

/// Emitted when liquidity is withdrawn through the router
pub fn emit_remove_liquidity(
    env: &Env,
    sender: &Address,
    pair: &Address,
    liquidity: u128,
    amount_a: u128,
    amount_b: u128,
) {
    env.events().publish(
        (Symbol::new(env, "RemoveLiq"),),
        (sender.clone(), pair.clone(), liquidity, amount_a, amount_b),
    );
}

/// Emitted once per routed swap, after all hops settle
pub fn emit_swap_routed(
    env: &Env,
    sender: &Address,
    path: &Vec<Address>,
    amount_in: u128,
    amount_out: u128,
) {
    env.events().publish(
        (Symbol::new(env, "SwapRouted"),),
        (sender.clone(), path.clone(), amount_in, amount_out),
    );
}
