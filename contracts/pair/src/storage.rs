// Pair storage module for MakoSwap

use soroban_sdk::{contracttype, Address, Env, String};

use crate::error::PairError;
use crate::types::PairData;

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum PairDataKey {
    /// Core pair state (tokens, reserves, accumulators)
    Pair,
    /// Total LP shares outstanding
    TotalShares,
    /// LP share balance per holder
    Shares(Address),
    /// Share allowance per (owner, spender)
    Allowance(Address, Address),
    /// Ownership boundary
    Owner,
    /// Reentrancy guard flag
    Locked,
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

/// Persistent storage lifetime in ledgers (~1 year at 5s/ledger)
const PERSISTENT_LIFETIME: u32 = 6_307_200;
/// TTL bump threshold
const PERSISTENT_BUMP: u32 = 6_307_200;

/// Extend TTL for a persistent storage key
fn extend_ttl(env: &Env, key: &PairDataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

// ============================================================
// SENTINEL ADDRESS
// ============================================================

/// The all-zero strkey. Soroban has no native null address, so this plays
/// the burn sink for locked shares and the "unset" owner.
pub fn zero_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(
        env,
        "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF",
    ))
}

// ============================================================
// PAIR DATA
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&PairDataKey::Pair)
}

pub fn write_pair_data(env: &Env, data: &PairData) {
    env.storage().persistent().set(&PairDataKey::Pair, data);
    extend_ttl(env, &PairDataKey::Pair);
}

pub fn read_pair_data(env: &Env) -> Result<PairData, PairError> {
    env.storage()
        .persistent()
        .get(&PairDataKey::Pair)
        .ok_or(PairError::NotInitialized)
}

// ============================================================
// SHARE LEDGER
// ============================================================

pub fn read_total_shares(env: &Env) -> u128 {
    env.storage()
        .persistent()
        .get(&PairDataKey::TotalShares)
        .unwrap_or(0)
}

pub fn write_total_shares(env: &Env, total: u128) {
    env.storage()
        .persistent()
        .set(&PairDataKey::TotalShares, &total);
    extend_ttl(env, &PairDataKey::TotalShares);
}

pub fn read_shares(env: &Env, holder: &Address) -> u128 {
    let key = PairDataKey::Shares(holder.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn write_shares(env: &Env, holder: &Address, amount: u128) {
    let key = PairDataKey::Shares(holder.clone());
    env.storage().persistent().set(&key, &amount);
    extend_ttl(env, &key);
}

pub fn read_allowance(env: &Env, owner: &Address, spender: &Address) -> u128 {
    let key = PairDataKey::Allowance(owner.clone(), spender.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn write_allowance(env: &Env, owner: &Address, spender: &Address, amount: u128) {
    let key = PairDataKey::Allowance(owner.clone(), spender.clone());
    env.storage().persistent().set(&key, &amount);
    extend_ttl(env, &key);
}

// ============================================================
// OWNERSHIP
// ============================================================

pub fn read_owner(env: &Env) -> Option<Address> {
    env.storage().persistent().get(&PairDataKey::Owner)
}

pub fn write_owner(env: &Env, owner: &Address) {
    env.storage().persistent().set(&PairDataKey::Owner, owner);
    extend_ttl(env, &PairDataKey::Owner);
}

pub fn clear_owner(env: &Env) {
    env.storage().persistent().remove(&PairDataKey::Owner);
}

// ============================================================
// REENTRANCY GUARD
// ============================================================

/// Take the guard. A nested call while an operation is in flight fails;
/// a failed operation's writes roll back, so an error exit cannot leave
/// the flag behind.
pub fn acquire_lock(env: &Env) -> Result<(), PairError> {
    if env
        .storage()
        .instance()
        .get(&PairDataKey::Locked)
        .unwrap_or(false)
    {
        return Err(PairError::ReentrantCall);
    }
    env.storage().instance().set(&PairDataKey::Locked, &true);
    Ok(())
}

pub fn release_lock(env: &Env) {
    env.storage().instance().set(&PairDataKey::Locked, &false);
}
