//! Factory type definitions

use soroban_sdk::{contracttype, Address, BytesN};

// ============================================================
// FACTORY CONFIG
// ============================================================

/// Factory configuration
#[contracttype]
#[derive(Clone, Debug)]
pub struct FactoryConfig {
    /// Recipient of the protocol fee cut, None while the fee is off
    pub fee_to: Option<Address>,
    /// Account allowed to change `fee_to` and the pair wasm hash
    pub fee_to_setter: Address,
    /// Uploaded wasm hash the factory instantiates new pairs from
    pub pair_wasm_hash: BytesN<32>,
}
