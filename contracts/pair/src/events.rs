// Pair events module for MakoSwap
// All events use compact names to reduce storage/gas costs

use soroban_sdk::{Address, Env, Symbol};

/// Emitted when liquidity is deposited
/// Topics: ("Mint",)
/// Data: (sender, amount_0, amount_1)
pub fn emit_mint(env: &Env, sender: &Address, amount_0: u128, amount_1: u128) {
    env.events().publish(
        (Symbol::new(env, "Mint"),),
        (sender.clone(), amount_0, amount_1),
    );
}

/// Emitted when liquidity is withdrawn
/// Topics: ("Burn",)
/// Data: (sender, amount_0, amount_1, to)
pub fn emit_burn(env: &Env, sender: &Address, amount_0: u128, amount_1: u128, to: &Address) {
    env.events().publish(
        (Symbol::new(env, "Burn"),),
        (sender.clone(), amount_0, amount_1, to.clone()),
    );
}

/// Emitted on every executed swap
/// Topics: ("Swap",)
/// Data: (sender, amount_0_in, amount_1_in, amount_0_out, amount_1_out, to)
pub fn emit_swap(
    env: &Env,
    sender: &Address,
    amount_0_in: u128,
    amount_1_in: u128,
    amount_0_out: u128,
    amount_1_out: u128,
    to: &Address,
) {
    env.events().publish(
        (Symbol::new(env, "Swap"),),
        (
            sender.clone(),
            amount_0_in,
            amount_1_in,
            amount_0_out,
            amount_1_out,
            to.clone(),
        ),
    );
}

/// Emitted whenever the tracked reserves change
/// Topics: ("Sync",)
/// Data: (reserve_0, reserve_1)
pub fn emit_sync(env: &Env, reserve_0: u128, reserve_1: u128) {
    env.events()
        .publish((Symbol::new(env, "Sync"),), (reserve_0, reserve_1));
}

/// Emitted on every share movement, including mints (from the zero
/// sentinel) and burns (to the zero sentinel)
/// Topics: ("Transfer",)
/// Data: (from, to, value)
pub fn emit_transfer(env: &Env, from: &Address, to: &Address, value: u128) {
    env.events().publish(
        (Symbol::new(env, "Transfer"),),
        (from.clone(), to.clone(), value),
    );
}

/// Emitted when a share allowance is set
/// Topics: ("Approval",)
/// Data: (owner, spender, value)
pub fn emit_approval(env: &Env, owner: &Address, spender: &Address, value: u128) {
    env.events().publish(
        (Symbol::new(env, "Approval"),),
        (owner.clone(), spender.clone(), value),
    );
}

/// Emitted when the ownership boundary moves
/// Topics: ("OwnerChanged",)
/// Data: (previous, new)
pub fn emit_ownership_transferred(env: &Env, previous: &Address, new: &Address) {
    env.events().publish(
        (Symbol::new(env, "OwnerChanged"),),
        (previous.clone(), new.clone()),
    );
}
