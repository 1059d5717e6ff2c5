#![no_std]

//! # MakoSwap Router
//!
//! Stateless orchestration over the factory and its pairs.
//!
//! ## Features:
//! 1. Path quoting against live reserves
//! 2. Add/remove liquidity with slippage bounds
//! 3. Multi-hop swaps (A -> B -> C)
//! 4. Native-token variants through the wrapped-native contract
//!
//! The router never holds liquidity of its own. Every hop moves tokens
//! straight between pairs, and only the native variants route output
//! through the router for unwrapping.

use soroban_sdk::{
    contract, contractimpl, token, vec, Address, Bytes, Env, IntoVal, Symbol, Vec,
};

use makoswap_math as amm_math;

mod error;
mod events;
mod storage;
mod types;

pub use error::RouterError;
use events::*;
use storage::*;
pub use types::*;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct MakoRouter;

#[contractimpl]
impl MakoRouter {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize router with the factory and wrapped-native addresses
    pub fn initialize(env: Env, factory: Address, wnative: Address) -> Result<(), RouterError> {
        if is_initialized(&env) {
            return Err(RouterError::AlreadyInitialized);
        }

        let config = RouterConfig {
            factory: factory.clone(),
            wnative: wnative.clone(),
        };
        write_config(&env, &config);
        set_initialized(&env);

        emit_initialized(&env, &factory, &wnative);

        Ok(())
    }

    pub fn factory(env: Env) -> Result<Address, RouterError> {
        Ok(read_config(&env)?.factory)
    }

    pub fn wnative(env: Env) -> Result<Address, RouterError> {
        Ok(read_config(&env)?.wnative)
    }

    // ========================================================
    // QUOTING (Read)
    // ========================================================

    /// Counter-amount preserving the current reserve ratio
    pub fn quote(
        env: Env,
        amount_a: u128,
        reserve_a: u128,
        reserve_b: u128,
    ) -> Result<u128, RouterError> {
        if amount_a == 0 {
            return Err(RouterError::InsufficientAmount);
        }
        if reserve_a == 0 || reserve_b == 0 {
            return Err(RouterError::InsufficientLiquidity);
        }
        Ok(amm_math::quote(&env, amount_a, reserve_a, reserve_b)?)
    }

    /// Output bought by an exact input, after the 0.3% fee
    pub fn get_amount_out(
        env: Env,
        amount_in: u128,
        reserve_in: u128,
        reserve_out: u128,
    ) -> Result<u128, RouterError> {
        if amount_in == 0 {
            return Err(RouterError::InsufficientInputAmount);
        }
        if reserve_in == 0 || reserve_out == 0 {
            return Err(RouterError::InsufficientLiquidity);
        }
        Ok(amm_math::get_amount_out(&env, amount_in, reserve_in, reserve_out)?)
    }

    /// Input required to buy an exact output, after the 0.3% fee
    pub fn get_amount_in(
        env: Env,
        amount_out: u128,
        reserve_in: u128,
        reserve_out: u128,
    ) -> Result<u128, RouterError> {
        if amount_out == 0 {
            return Err(RouterError::InsufficientOutputAmount);
        }
        if reserve_in == 0 || reserve_out == 0 || amount_out >= reserve_out {
            return Err(RouterError::InsufficientLiquidity);
        }
        Ok(amm_math::get_amount_in(&env, amount_out, reserve_in, reserve_out)?)
    }

    /// Per-hop amounts for an exact-input path. `result[0]` is the input,
    /// `result[last]` the final output.
    pub fn get_amounts_out(
        env: Env,
        amount_in: u128,
        path: Vec<Address>,
    ) -> Result<Vec<u128>, RouterError> {
        let config = read_config(&env)?;
        Self::amounts_out(&env, &config.factory, amount_in, &path)
    }

    /// Per-hop amounts for an exact-output path, computed back to front
    pub fn get_amounts_in(
        env: Env,
        amount_out: u128,
        path: Vec<Address>,
    ) -> Result<Vec<u128>, RouterError> {
        let config = read_config(&env)?;
        Self::amounts_in(&env, &config.factory, amount_out, &path)
    }

    /// Reserves of the pair for (a, b), returned in (a, b) order
    pub fn get_reserves(
        env: Env,
        token_a: Address,
        token_b: Address,
    ) -> Result<(u128, u128), RouterError> {
        let config = read_config(&env)?;
        Self::reserves_for(&env, &config.factory, &token_a, &token_b)
    }

    // ========================================================
    // LIQUIDITY (Write)
    // ========================================================

    /// Deposit both tokens at the current ratio and mint LP shares to `to`.
    /// Creates the pair through the factory when it does not exist yet.
    /// Returns the amounts actually deposited and the shares minted.
    pub fn add_liquidity(
        env: Env,
        sender: Address,
        token_a: Address,
        token_b: Address,
        amount_a_desired: u128,
        amount_b_desired: u128,
        amount_a_min: u128,
        amount_b_min: u128,
        to: Address,
        deadline: u64,
    ) -> Result<(u128, u128, u128), RouterError> {
        sender.require_auth();
        Self::check_deadline(&env, deadline)?;
        let config = read_config(&env)?;

        let pair = match Self::pair_for(&env, &config.factory, &token_a, &token_b) {
            Some(pair) => pair,
            None => env.invoke_contract(
                &config.factory,
                &Symbol::new(&env, "create_pair"),
                vec![&env, token_a.clone().into_val(&env), token_b.clone().into_val(&env)],
            ),
        };

        let (amount_a, amount_b) = Self::optimal_amounts(
            &env,
            &config.factory,
            &token_a,
            &token_b,
            amount_a_desired,
            amount_b_desired,
            amount_a_min,
            amount_b_min,
        )?;

        Self::transfer_token(&env, &token_a, &sender, &pair, amount_a)?;
        Self::transfer_token(&env, &token_b, &sender, &pair, amount_b)?;
        let liquidity = Self::pair_mint(&env, &pair, &to);

        emit_add_liquidity(&env, &sender, &pair, amount_a, amount_b, liquidity);

        Ok((amount_a, amount_b, liquidity))
    }

    /// Burn `liquidity` LP shares and send both tokens to `to`
    pub fn remove_liquidity(
        env: Env,
        sender: Address,
        token_a: Address,
        token_b: Address,
        liquidity: u128,
        amount_a_min: u128,
        amount_b_min: u128,
        to: Address,
        deadline: u64,
    ) -> Result<(u128, u128), RouterError> {
        sender.require_auth();
        Self::check_deadline(&env, deadline)?;
        let config = read_config(&env)?;

        let pair = Self::pair_for(&env, &config.factory, &token_a, &token_b)
            .ok_or(RouterError::PairNotFound)?;

        Self::pair_transfer_shares(&env, &pair, &sender, &pair, liquidity);
        let (amount_0, amount_1) = Self::pair_burn(&env, &pair, &to);

        let (amount_a, amount_b) = if token_a < token_b {
            (amount_0, amount_1)
        } else {
            (amount_1, amount_0)
        };
        if amount_a < amount_a_min {
            return Err(RouterError::InsufficientAAmount);
        }
        if amount_b < amount_b_min {
            return Err(RouterError::InsufficientBAmount);
        }

        emit_remove_liquidity(&env, &sender, &pair, liquidity, amount_a, amount_b);

        Ok((amount_a, amount_b))
    }

    /// `add_liquidity` against the wrapped-native token. Wraps exactly the
    /// native amount the ratio calls for, straight into the pair.
    pub fn add_liquidity_native(
        env: Env,
        sender: Address,
        token: Address,
        amount_token_desired: u128,
        amount_native_desired: u128,
        amount_token_min: u128,
        amount_native_min: u128,
        to: Address,
        deadline: u64,
    ) -> Result<(u128, u128, u128), RouterError> {
        sender.require_auth();
        Self::check_deadline(&env, deadline)?;
        let config = read_config(&env)?;

        let pair = match Self::pair_for(&env, &config.factory, &token, &config.wnative) {
            Some(pair) => pair,
            None => env.invoke_contract(
                &config.factory,
                &Symbol::new(&env, "create_pair"),
                vec![
                    &env,
                    token.clone().into_val(&env),
                    config.wnative.clone().into_val(&env),
                ],
            ),
        };

        let (amount_token, amount_native) = Self::optimal_amounts(
            &env,
            &config.factory,
            &token,
            &config.wnative,
            amount_token_desired,
            amount_native_desired,
            amount_token_min,
            amount_native_min,
        )?;

        Self::transfer_token(&env, &token, &sender, &pair, amount_token)?;
        Self::wnative_deposit(&env, &config.wnative, &pair, amount_native)?;
        let liquidity = Self::pair_mint(&env, &pair, &to);

        emit_add_liquidity(&env, &sender, &pair, amount_token, amount_native, liquidity);

        Ok((amount_token, amount_native, liquidity))
    }

    /// `remove_liquidity` against the wrapped-native token, unwrapping the
    /// native share of the proceeds out to `to`
    pub fn remove_liquidity_native(
        env: Env,
        sender: Address,
        token: Address,
        liquidity: u128,
        amount_token_min: u128,
        amount_native_min: u128,
        to: Address,
        deadline: u64,
    ) -> Result<(u128, u128), RouterError> {
        sender.require_auth();
        Self::check_deadline(&env, deadline)?;
        let config = read_config(&env)?;

        let pair = Self::pair_for(&env, &config.factory, &token, &config.wnative)
            .ok_or(RouterError::PairNotFound)?;

        let router = env.current_contract_address();
        Self::pair_transfer_shares(&env, &pair, &sender, &pair, liquidity);
        let (amount_0, amount_1) = Self::pair_burn(&env, &pair, &router);

        let (amount_token, amount_native) = if token < config.wnative {
            (amount_0, amount_1)
        } else {
            (amount_1, amount_0)
        };
        if amount_token < amount_token_min {
            return Err(RouterError::InsufficientAAmount);
        }
        if amount_native < amount_native_min {
            return Err(RouterError::InsufficientBAmount);
        }

        Self::transfer_token(&env, &token, &router, &to, amount_token)?;
        Self::wnative_withdraw(&env, &config.wnative, &router, &to, amount_native)?;

        emit_remove_liquidity(&env, &sender, &pair, liquidity, amount_token, amount_native);

        Ok((amount_token, amount_native))
    }

    // ========================================================
    // SWAPS (Write)
    // ========================================================

    /// Swap an exact input along `path`, enforcing a minimum final output
    pub fn swap_exact_tokens_for_tokens(
        env: Env,
        sender: Address,
        amount_in: u128,
        amount_out_min: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Result<Vec<u128>, RouterError> {
        sender.require_auth();
        Self::check_deadline(&env, deadline)?;
        let config = read_config(&env)?;

        let amounts = Self::amounts_out(&env, &config.factory, amount_in, &path)?;
        if Self::last_amount(&amounts) < amount_out_min {
            return Err(RouterError::InsufficientOutputAmount);
        }

        Self::fund_first_pair(&env, &config.factory, &sender, &path, amount_in)?;
        Self::swap_along_path(&env, &config.factory, &amounts, &path, &to)?;

        emit_swap_routed(&env, &sender, &path, amount_in, Self::last_amount(&amounts));
        Ok(amounts)
    }

    /// Swap for an exact output along `path`, capping the input spent
    pub fn swap_tokens_for_exact_tokens(
        env: Env,
        sender: Address,
        amount_out: u128,
        amount_in_max: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Result<Vec<u128>, RouterError> {
        sender.require_auth();
        Self::check_deadline(&env, deadline)?;
        let config = read_config(&env)?;

        let amounts = Self::amounts_in(&env, &config.factory, amount_out, &path)?;
        let amount_in = Self::first_amount(&amounts);
        if amount_in > amount_in_max {
            return Err(RouterError::ExcessiveInputAmount);
        }

        Self::fund_first_pair(&env, &config.factory, &sender, &path, amount_in)?;
        Self::swap_along_path(&env, &config.factory, &amounts, &path, &to)?;

        emit_swap_routed(&env, &sender, &path, amount_in, amount_out);
        Ok(amounts)
    }

    /// Exact native input; `path` must start with the wrapped-native token
    pub fn swap_exact_native_for_tokens(
        env: Env,
        sender: Address,
        amount_in: u128,
        amount_out_min: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Result<Vec<u128>, RouterError> {
        sender.require_auth();
        Self::check_deadline(&env, deadline)?;
        let config = read_config(&env)?;

        if path.first() != Some(config.wnative.clone()) {
            return Err(RouterError::InvalidPath);
        }

        let amounts = Self::amounts_out(&env, &config.factory, amount_in, &path)?;
        if Self::last_amount(&amounts) < amount_out_min {
            return Err(RouterError::InsufficientOutputAmount);
        }

        let first_pair = Self::first_pair(&env, &config.factory, &path)?;
        Self::wnative_deposit(&env, &config.wnative, &first_pair, amount_in)?;
        Self::swap_along_path(&env, &config.factory, &amounts, &path, &to)?;

        emit_swap_routed(&env, &sender, &path, amount_in, Self::last_amount(&amounts));
        Ok(amounts)
    }

    /// Exact native output; `path` must end with the wrapped-native token
    pub fn swap_tokens_for_exact_native(
        env: Env,
        sender: Address,
        amount_out: u128,
        amount_in_max: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Result<Vec<u128>, RouterError> {
        sender.require_auth();
        Self::check_deadline(&env, deadline)?;
        let config = read_config(&env)?;

        if path.last() != Some(config.wnative.clone()) {
            return Err(RouterError::InvalidPath);
        }

        let amounts = Self::amounts_in(&env, &config.factory, amount_out, &path)?;
        let amount_in = Self::first_amount(&amounts);
        if amount_in > amount_in_max {
            return Err(RouterError::ExcessiveInputAmount);
        }

        let router = env.current_contract_address();
        Self::fund_first_pair(&env, &config.factory, &sender, &path, amount_in)?;
        Self::swap_along_path(&env, &config.factory, &amounts, &path, &router)?;
        Self::wnative_withdraw(&env, &config.wnative, &router, &to, amount_out)?;

        emit_swap_routed(&env, &sender, &path, amount_in, amount_out);
        Ok(amounts)
    }

    /// Exact token input for native output; `path` must end with the
    /// wrapped-native token
    pub fn swap_exact_tokens_for_native(
        env: Env,
        sender: Address,
        amount_in: u128,
        amount_out_min: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Result<Vec<u128>, RouterError> {
        sender.require_auth();
        Self::check_deadline(&env, deadline)?;
        let config = read_config(&env)?;

        if path.last() != Some(config.wnative.clone()) {
            return Err(RouterError::InvalidPath);
        }

        let amounts = Self::amounts_out(&env, &config.factory, amount_in, &path)?;
        let amount_out = Self::last_amount(&amounts);
        if amount_out < amount_out_min {
            return Err(RouterError::InsufficientOutputAmount);
        }

        let router = env.current_contract_address();
        Self::fund_first_pair(&env, &config.factory, &sender, &path, amount_in)?;
        Self::swap_along_path(&env, &config.factory, &amounts, &path, &router)?;
        Self::wnative_withdraw(&env, &config.wnative, &router, &to, amount_out)?;

        emit_swap_routed(&env, &sender, &path, amount_in, amount_out);
        Ok(amounts)
    }

    /// Native input for an exact token output; `path` must start with the
    /// wrapped-native token
    pub fn swap_native_for_exact_tokens(
        env: Env,
        sender: Address,
        amount_out: u128,
        amount_in_max: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Result<Vec<u128>, RouterError> {
        sender.require_auth();
        Self::check_deadline(&env, deadline)?;
        let config = read_config(&env)?;

        if path.first() != Some(config.wnative.clone()) {
            return Err(RouterError::InvalidPath);
        }

        let amounts = Self::amounts_in(&env, &config.factory, amount_out, &path)?;
        let amount_in = Self::first_amount(&amounts);
        if amount_in > amount_in_max {
            return Err(RouterError::ExcessiveInputAmount);
        }

        let first_pair = Self::first_pair(&env, &config.factory, &path)?;
        Self::wnative_deposit(&env, &config.wnative, &first_pair, amount_in)?;
        Self::swap_along_path(&env, &config.factory, &amounts, &path, &to)?;

        emit_swap_routed(&env, &sender, &path, amount_in, amount_out);
        Ok(amounts)
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    /// Deadlines are ledger timestamps; a deadline equal to now still passes
    fn check_deadline(env: &Env, deadline: u64) -> Result<(), RouterError> {
        if deadline < env.ledger().timestamp() {
            return Err(RouterError::Expired);
        }
        Ok(())
    }

    fn pair_for(
        env: &Env,
        factory: &Address,
        token_a: &Address,
        token_b: &Address,
    ) -> Option<Address> {
        env.invoke_contract(
            factory,
            &Symbol::new(env, "get_pair"),
            vec![env, token_a.clone().into_val(env), token_b.clone().into_val(env)],
        )
    }

    fn reserves_for(
        env: &Env,
        factory: &Address,
        token_a: &Address,
        token_b: &Address,
    ) -> Result<(u128, u128), RouterError> {
        let pair =
            Self::pair_for(env, factory, token_a, token_b).ok_or(RouterError::PairNotFound)?;
        let (reserve_0, reserve_1, _): (u128, u128, u64) = env.invoke_contract(
            &pair,
            &Symbol::new(env, "get_reserves"),
            Vec::new(env),
        );
        if token_a < token_b {
            Ok((reserve_0, reserve_1))
        } else {
            Ok((reserve_1, reserve_0))
        }
    }

    fn amounts_out(
        env: &Env,
        factory: &Address,
        amount_in: u128,
        path: &Vec<Address>,
    ) -> Result<Vec<u128>, RouterError> {
        if path.len() < 2 {
            return Err(RouterError::InvalidPath);
        }
        if amount_in == 0 {
            return Err(RouterError::InsufficientInputAmount);
        }

        let mut amounts = vec![env, amount_in];
        let mut current = amount_in;
        for i in 0..path.len() - 1 {
            let token_in = path.get_unchecked(i);
            let token_out = path.get_unchecked(i + 1);
            let (reserve_in, reserve_out) =
                Self::reserves_for(env, factory, &token_in, &token_out)?;
            if reserve_in == 0 || reserve_out == 0 {
                return Err(RouterError::InsufficientLiquidity);
            }
            current = amm_math::get_amount_out(env, current, reserve_in, reserve_out)?;
            amounts.push_back(current);
        }
        Ok(amounts)
    }

    fn amounts_in(
        env: &Env,
        factory: &Address,
        amount_out: u128,
        path: &Vec<Address>,
    ) -> Result<Vec<u128>, RouterError> {
        if path.len() < 2 {
            return Err(RouterError::InvalidPath);
        }
        if amount_out == 0 {
            return Err(RouterError::InsufficientOutputAmount);
        }

        // Built back to front, then reversed into path order
        let mut reversed = vec![env, amount_out];
        let mut current = amount_out;
        for i in (0..path.len() - 1).rev() {
            let token_in = path.get_unchecked(i);
            let token_out = path.get_unchecked(i + 1);
            let (reserve_in, reserve_out) =
                Self::reserves_for(env, factory, &token_in, &token_out)?;
            if reserve_in == 0 || reserve_out == 0 || current >= reserve_out {
                return Err(RouterError::InsufficientLiquidity);
            }
            current = amm_math::get_amount_in(env, current, reserve_in, reserve_out)?;
            reversed.push_back(current);
        }

        let mut amounts = Vec::new(env);
        for i in (0..reversed.len()).rev() {
            amounts.push_back(reversed.get_unchecked(i));
        }
        Ok(amounts)
    }

    /// Executes every hop. Each pair pays its output straight to the next
    /// pair; the final hop pays `to`.
    fn swap_along_path(
        env: &Env,
        factory: &Address,
        amounts: &Vec<u128>,
        path: &Vec<Address>,
        to: &Address,
    ) -> Result<(), RouterError> {
        let router = env.current_contract_address();
        for i in 0..path.len() - 1 {
            let token_in = path.get_unchecked(i);
            let token_out = path.get_unchecked(i + 1);
            let amount_out = amounts.get_unchecked((i + 1) as u32);

            let (amount_0_out, amount_1_out) = if token_in < token_out {
                (0u128, amount_out)
            } else {
                (amount_out, 0u128)
            };

            let recipient = if i < path.len() - 2 {
                let next = path.get_unchecked(i + 2);
                Self::pair_for(env, factory, &token_out, &next)
                    .ok_or(RouterError::PairNotFound)?
            } else {
                to.clone()
            };

            let pair = Self::pair_for(env, factory, &token_in, &token_out)
                .ok_or(RouterError::PairNotFound)?;
            let _: () = env.invoke_contract(
                &pair,
                &Symbol::new(env, "swap"),
                vec![
                    env,
                    router.clone().into_val(env),
                    amount_0_out.into_val(env),
                    amount_1_out.into_val(env),
                    recipient.into_val(env),
                    Option::<Bytes>::None.into_val(env),
                ],
            );
        }
        Ok(())
    }

    /// Moves the input for the first hop from `sender` into the first pair
    fn fund_first_pair(
        env: &Env,
        factory: &Address,
        sender: &Address,
        path: &Vec<Address>,
        amount_in: u128,
    ) -> Result<(), RouterError> {
        let first_pair = Self::first_pair(env, factory, path)?;
        let token_in = path.get_unchecked(0);
        Self::transfer_token(env, &token_in, sender, &first_pair, amount_in)
    }

    fn first_pair(
        env: &Env,
        factory: &Address,
        path: &Vec<Address>,
    ) -> Result<Address, RouterError> {
        if path.len() < 2 {
            return Err(RouterError::InvalidPath);
        }
        Self::pair_for(env, factory, &path.get_unchecked(0), &path.get_unchecked(1))
            .ok_or(RouterError::PairNotFound)
    }

    /// Desired amounts on first deposit, ratio-quoted counter-amounts after.
    /// Tries B from A first, falls back to A from B when B would overshoot.
    fn optimal_amounts(
        env: &Env,
        factory: &Address,
        token_a: &Address,
        token_b: &Address,
        amount_a_desired: u128,
        amount_b_desired: u128,
        amount_a_min: u128,
        amount_b_min: u128,
    ) -> Result<(u128, u128), RouterError> {
        let (reserve_a, reserve_b) = match Self::reserves_for(env, factory, token_a, token_b) {
            Ok(reserves) => reserves,
            Err(RouterError::PairNotFound) => (0, 0),
            Err(err) => return Err(err),
        };
        if reserve_a == 0 && reserve_b == 0 {
            return Ok((amount_a_desired, amount_b_desired));
        }

        let amount_b_optimal = amm_math::quote(env, amount_a_desired, reserve_a, reserve_b)?;
        if amount_b_optimal <= amount_b_desired {
            if amount_b_optimal < amount_b_min {
                return Err(RouterError::InsufficientBAmount);
            }
            return Ok((amount_a_desired, amount_b_optimal));
        }

        let amount_a_optimal = amm_math::quote(env, amount_b_desired, reserve_b, reserve_a)?;
        // quote is monotone, so the flipped amount cannot overshoot A
        if amount_a_optimal < amount_a_min {
            return Err(RouterError::InsufficientAAmount);
        }
        Ok((amount_a_optimal, amount_b_desired))
    }

    fn transfer_token(
        env: &Env,
        token: &Address,
        from: &Address,
        to: &Address,
        amount: u128,
    ) -> Result<(), RouterError> {
        let amount = amm_math::amount_to_i128(amount, 12)?;
        token::Client::new(env, token).transfer(from, to, &amount);
        Ok(())
    }

    fn wnative_deposit(
        env: &Env,
        wnative: &Address,
        to: &Address,
        amount: u128,
    ) -> Result<(), RouterError> {
        let amount = amm_math::amount_to_i128(amount, 13)?;
        let _: () = env.invoke_contract(
            wnative,
            &Symbol::new(env, "deposit"),
            vec![env, to.clone().into_val(env), amount.into_val(env)],
        );
        Ok(())
    }

    fn wnative_withdraw(
        env: &Env,
        wnative: &Address,
        from: &Address,
        to: &Address,
        amount: u128,
    ) -> Result<(), RouterError> {
        let amount = amm_math::amount_to_i128(amount, 14)?;
        let _: () = env.invoke_contract(
            wnative,
            &Symbol::new(env, "withdraw"),
            vec![
                env,
                from.clone().into_val(env),
                to.clone().into_val(env),
                amount.into_val(env),
            ],
        );
        Ok(())
    }

    fn pair_mint(env: &Env, pair: &Address, to: &Address) -> u128 {
        let router = env.current_contract_address();
        env.invoke_contract(
            pair,
            &Symbol::new(env, "mint"),
            vec![env, router.into_val(env), to.clone().into_val(env)],
        )
    }

    fn pair_burn(env: &Env, pair: &Address, to: &Address) -> (u128, u128) {
        let router = env.current_contract_address();
        env.invoke_contract(
            pair,
            &Symbol::new(env, "burn"),
            vec![env, router.into_val(env), to.clone().into_val(env)],
        )
    }

    fn pair_transfer_shares(env: &Env, pair: &Address, from: &Address, to: &Address, amount: u128) {
        let _: () = env.invoke_contract(
            pair,
            &Symbol::new(env, "transfer_shares"),
            vec![
                env,
                from.clone().into_val(env),
                to.clone().into_val(env),
                amount.into_val(env),
            ],
        );
    }

    fn first_amount(amounts: &Vec<u128>) -> u128 {
        amounts.get_unchecked(0)
    }

    fn last_amount(amounts: &Vec<u128>) -> u128 {
        amounts.get_unchecked(amounts.len() - 1)
    }
}
