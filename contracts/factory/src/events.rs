//! Factory events

use soroban_sdk::{Address, BytesN, Env, Symbol};

/// Emitted when factory is initialized
pub fn emit_initialized(env: &Env, fee_to_setter: &Address) {
    env.events().publish(
        (Symbol::new(env, "FactoryInit"),),
        (fee_to_setter.clone(),),
    );
}

/// Emitted when a new pair is created
pub fn emit_pair_created(
    env: &Env,
    token_0: &Address,
    token_1: &Address,
    pair: &Address,
    pair_count: u32,
) {
    env.events().publish(
        (Symbol::new(env, "PairCreated"),),
        (token_0.clone(), token_1.clone(), pair.clone(), pair_count),
    );
}

/// Emitted when the protocol fee recipient changes
pub fn emit_fee_to_updated(env: &Env, fee_to: &Option<Address>) {
    env.events().publish(
        (Symbol::new(env, "FeeToUpdated"),),
        (fee_to.clone(),),
    );
}

/// Emitted when control over the protocol fee moves to a new account
pub fn emit_fee_to_setter_updated(env: &Env, old_setter: &Address, new_setter: &Address) {
    env.events().publish(
        (Symbol::new(env, "FeeSetterUpdated"),),
        (old_setter.clone(), new_setter.clone()),
    );
}

/// Emitted when the pair wasm hash is rotated
pub fn emit_pair_wasm_hash_updated(env: &Env, wasm_hash: &BytesN<32>) {
    env.events().publish(
        (Symbol::new(env, "PairWasmUpdated"),),
        (wasm_hash.clone(),),
    );
}
