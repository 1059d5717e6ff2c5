// Factory storage module for MakoSwap

use soroban_sdk::{contracttype, Address, Env, String};

use crate::types::FactoryConfig;

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum FactoryDataKey {
    Config,
    Initialized,
    Pair(Address, Address),
    PairByIndex(u32),
    PairCount,
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

const PERSISTENT_LIFETIME: u32 = 6_307_200;
const PERSISTENT_BUMP: u32 = 6_307_200;

fn extend_ttl(env: &Env, key: &FactoryDataKey) {
    env.storage().persistent().extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

/// The all-zero strkey, used as the burn sink and rejected as a pair token.
pub fn zero_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(
        env,
        "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF",
    ))
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn factory_is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&FactoryDataKey::Initialized)
}

pub fn factory_set_initialized(env: &Env) {
    env.storage().persistent().set(&FactoryDataKey::Initialized, &true);
    extend_ttl(env, &FactoryDataKey::Initialized);
}

// ============================================================
// FACTORY CONFIG
// ============================================================

pub fn write_factory_config(env: &Env, config: &FactoryConfig) {
    env.storage().persistent().set(&FactoryDataKey::Config, config);
    extend_ttl(env, &FactoryDataKey::Config);
}

pub fn read_factory_config(env: &Env) -> Option<FactoryConfig> {
    env.storage().persistent().get(&FactoryDataKey::Config)
}

// ============================================================
// PAIR REGISTRY
// ============================================================

pub fn pair_exists(env: &Env, token_a: &Address, token_b: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&FactoryDataKey::Pair(token_a.clone(), token_b.clone()))
}

pub fn get_pair_address(env: &Env, token_a: &Address, token_b: &Address) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&FactoryDataKey::Pair(token_a.clone(), token_b.clone()))
}

/// Records a freshly deployed pair under both token orderings and appends it
/// to the index. Returns the new registry length.
pub fn register_pair(env: &Env, token_0: &Address, token_1: &Address, pair: &Address) -> u32 {
    let forward = FactoryDataKey::Pair(token_0.clone(), token_1.clone());
    env.storage().persistent().set(&forward, pair);
    extend_ttl(env, &forward);

    let reverse = FactoryDataKey::Pair(token_1.clone(), token_0.clone());
    env.storage().persistent().set(&reverse, pair);
    extend_ttl(env, &reverse);

    let index = get_pair_count(env);
    let index_key = FactoryDataKey::PairByIndex(index);
    env.storage().persistent().set(&index_key, pair);
    extend_ttl(env, &index_key);

    let count = index + 1;
    env.storage().persistent().set(&FactoryDataKey::PairCount, &count);
    extend_ttl(env, &FactoryDataKey::PairCount);
    count
}

pub fn get_pair_by_index(env: &Env, index: u32) -> Option<Address> {
    env.storage().persistent().get(&FactoryDataKey::PairByIndex(index))
}

pub fn get_pair_count(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&FactoryDataKey::PairCount)
        .unwrap_or(0)
}
