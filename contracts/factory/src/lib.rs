#![no_std]

//! # MakoSwap Factory
//!
//! Registry and deployer for constant-product pairs.
//!
//! ## Responsibilities:
//! 1. Deploy pairs deterministically (one per unordered token set)
//! 2. Duplicate prevention
//! 3. Protocol fee switch (`fee_to` / `fee_to_setter`)

use soroban_sdk::{
    contract, contractimpl, vec, xdr::ToXdr, Address, BytesN, Env, IntoVal, Symbol,
};

mod error;
mod events;
mod storage;
mod types;

pub use error::{FactoryError, FactoryErrorMsg};
use events::*;
use storage::*;
pub use types::*;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct MakoFactory;

#[contractimpl]
impl MakoFactory {
    // ========================================================
    // WRITE FUNCTIONS
    // ========================================================

    /// Initialize factory
    pub fn initialize(
        env: Env,
        fee_to_setter: Address,
        pair_wasm_hash: BytesN<32>,
    ) -> Result<(), FactoryError> {
        fee_to_setter.require_auth();

        if factory_is_initialized(&env) {
            return Err(FactoryError::AlreadyInitialized);
        }

        let config = FactoryConfig {
            fee_to: None,
            fee_to_setter: fee_to_setter.clone(),
            pair_wasm_hash,
        };
        write_factory_config(&env, &config);
        factory_set_initialized(&env);

        emit_initialized(&env, &fee_to_setter);

        Ok(())
    }

    /// Create the pair for a token set (atomic: deploy + init + register)
    ///
    /// Anyone may call. Fails if the pair already exists, the tokens are
    /// equal, or either token is the zero address.
    pub fn create_pair(
        env: Env,
        token_a: Address,
        token_b: Address,
    ) -> Result<Address, FactoryError> {
        let config = read_factory_config(&env).ok_or(FactoryError::NotInitialized)?;

        if token_a == token_b {
            return Err(FactoryError::IdenticalAddresses);
        }

        let zero = zero_address(&env);
        if token_a == zero || token_b == zero {
            return Err(FactoryError::ZeroAddress);
        }

        let (token_0, token_1) = if token_a < token_b {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };

        if pair_exists(&env, &token_0, &token_1) {
            return Err(FactoryError::PairExists);
        }

        // === DEPLOY PAIR ===
        let pair = Self::deploy_pair(&env, &config, &token_0, &token_1);

        // === INITIALIZE PAIR ===
        let init_result = env.try_invoke_contract::<(), soroban_sdk::Error>(
            &pair,
            &Symbol::new(&env, "initialize"),
            vec![
                &env,
                env.current_contract_address().into_val(&env),
                token_0.clone().into_val(&env),
                token_1.clone().into_val(&env),
            ],
        );
        match init_result {
            Ok(Ok(())) => {}
            _ => return Err(FactoryError::PairInstantiationFailed),
        }

        // === REGISTER PAIR ===
        let pair_count = register_pair(&env, &token_0, &token_1, &pair);

        emit_pair_created(&env, &token_0, &token_1, &pair, pair_count);

        Ok(pair)
    }

    /// Point the protocol fee at a new recipient, or switch it off with None
    pub fn set_fee_to(
        env: Env,
        caller: Address,
        fee_to: Option<Address>,
    ) -> Result<(), FactoryError> {
        caller.require_auth();

        let mut config = read_factory_config(&env).ok_or(FactoryError::NotInitialized)?;
        if caller != config.fee_to_setter {
            return Err(FactoryError::CallerIsNotFeeSetter);
        }

        config.fee_to = fee_to.clone();
        write_factory_config(&env, &config);

        emit_fee_to_updated(&env, &fee_to);

        Ok(())
    }

    /// Hand the fee switch to a new setter
    pub fn set_fee_to_setter(
        env: Env,
        caller: Address,
        new_setter: Address,
    ) -> Result<(), FactoryError> {
        caller.require_auth();

        let mut config = read_factory_config(&env).ok_or(FactoryError::NotInitialized)?;
        if caller != config.fee_to_setter {
            return Err(FactoryError::CallerIsNotFeeSetter);
        }

        emit_fee_to_setter_updated(&env, &config.fee_to_setter, &new_setter);

        config.fee_to_setter = new_setter;
        write_factory_config(&env, &config);

        Ok(())
    }

    /// Rotate the wasm hash used for future pair deployments
    pub fn set_pair_wasm_hash(
        env: Env,
        caller: Address,
        wasm_hash: BytesN<32>,
    ) -> Result<(), FactoryError> {
        caller.require_auth();

        let mut config = read_factory_config(&env).ok_or(FactoryError::NotInitialized)?;
        if caller != config.fee_to_setter {
            return Err(FactoryError::CallerIsNotFeeSetter);
        }

        config.pair_wasm_hash = wasm_hash.clone();
        write_factory_config(&env, &config);

        emit_pair_wasm_hash_updated(&env, &wasm_hash);

        Ok(())
    }

    // ========================================================
    // READ FUNCTIONS
    // ========================================================

    /// Get pair contract address for a token set, in either order
    pub fn get_pair(env: Env, token_a: Address, token_b: Address) -> Option<Address> {
        get_pair_address(&env, &token_a, &token_b)
    }

    /// Get the pair at a creation-ordered index, starting from 0
    pub fn all_pairs(env: Env, index: u32) -> Option<Address> {
        get_pair_by_index(&env, index)
    }

    /// Total number of pairs deployed through this factory
    pub fn all_pairs_length(env: Env) -> u32 {
        get_pair_count(&env)
    }

    /// Current protocol fee recipient, None while the fee is off.
    ///
    /// Pairs call this on every liquidity event to decide whether to
    /// mint the protocol's share.
    pub fn fee_to(env: Env) -> Option<Address> {
        read_factory_config(&env).and_then(|c| c.fee_to)
    }

    /// Account allowed to change the fee recipient
    pub fn fee_to_setter(env: Env) -> Result<Address, FactoryError> {
        read_factory_config(&env)
            .map(|c| c.fee_to_setter)
            .ok_or(FactoryError::NotInitialized)
    }

    /// Wasm hash new pairs are instantiated from
    pub fn pair_wasm_hash(env: Env) -> Result<BytesN<32>, FactoryError> {
        read_factory_config(&env)
            .map(|c| c.pair_wasm_hash)
            .ok_or(FactoryError::NotInitialized)
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    fn deploy_pair(
        env: &Env,
        config: &FactoryConfig,
        token_0: &Address,
        token_1: &Address,
    ) -> Address {
        // Deterministic salt from the sorted token set
        let mut salt_data = token_0.clone().to_xdr(env);
        salt_data.append(&token_1.clone().to_xdr(env));
        let salt = env.crypto().sha256(&salt_data);

        env.deployer()
            .with_current_contract(salt)
            .deploy(config.pair_wasm_hash.clone())
    }
}
