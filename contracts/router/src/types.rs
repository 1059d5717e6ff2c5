//! Router type definitions

use soroban_sdk::{contracttype, Address};

// ============================================================
// ROUTER CONFIG
// ============================================================

#[contracttype]
#[derive(Clone, Debug)]
pub struct RouterConfig {
    /// Factory contract address
    pub factory: Address,
    /// Wrapped-native token contract address
    pub wnative: Address,
}

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum DataKey {
    /// Router config
    Config,
    /// Initialization flag
    Initialized,
}
