#![no_std]

use soroban_sdk::{
    contract, contractimpl, token, vec, Address, Bytes, Env, IntoVal, Symbol,
};

// External packages
use makoswap_math::{
    accumulate, amount_to_i128, amount_to_u128, constant_product_holds, initial_liquidity,
    price_x64, proportional_liquidity, protocol_fee_liquidity, redeemable_amounts, root_k,
    MINIMUM_LIQUIDITY, RESERVES_UPPER_BOUND,
};

// Local modules
mod error;
mod events;
mod storage;
pub mod types;

pub use error::PairError;
use events::*;
use storage::*;
use types::PairData;

#[contract]
pub struct MakoPair;

#[contractimpl]
impl MakoPair {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize the pair for a token set. Called by the factory right
    /// after deployment; the factory becomes the initial owner.
    pub fn initialize(
        env: Env,
        factory: Address,
        token_a: Address,
        token_b: Address,
    ) -> Result<(), PairError> {
        factory.require_auth();

        if is_initialized(&env) {
            return Err(PairError::AlreadyInitialized);
        }
        if token_a == token_b {
            return Err(PairError::IdenticalTokens);
        }

        let (token_0, token_1) = if token_a < token_b {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };

        let data = PairData {
            factory: factory.clone(),
            token_0,
            token_1,
            reserve_0: 0,
            reserve_1: 0,
            block_timestamp_last: 0,
            price_0_cumulative_last: 0,
            price_1_cumulative_last: 0,
            root_k_last: None,
        };
        write_pair_data(&env, &data);
        write_owner(&env, &factory);

        Ok(())
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    pub fn token_0(env: Env) -> Result<Address, PairError> {
        Ok(read_pair_data(&env)?.token_0)
    }

    pub fn token_1(env: Env) -> Result<Address, PairError> {
        Ok(read_pair_data(&env)?.token_1)
    }

    pub fn factory(env: Env) -> Result<Address, PairError> {
        Ok(read_pair_data(&env)?.factory)
    }

    /// Tracked reserves and the timestamp of their last update.
    pub fn get_reserves(env: Env) -> Result<(u128, u128, u64), PairError> {
        let data = read_pair_data(&env)?;
        Ok((data.reserve_0, data.reserve_1, data.block_timestamp_last))
    }

    pub fn price_0_cumulative_last(env: Env) -> Result<u128, PairError> {
        Ok(read_pair_data(&env)?.price_0_cumulative_last)
    }

    pub fn price_1_cumulative_last(env: Env) -> Result<u128, PairError> {
        Ok(read_pair_data(&env)?.price_1_cumulative_last)
    }

    // ========================================================
    // SHARE LEDGER
    // ========================================================

    pub fn total_shares(env: Env) -> u128 {
        read_total_shares(&env)
    }

    pub fn share_balance(env: Env, holder: Address) -> u128 {
        read_shares(&env, &holder)
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> u128 {
        read_allowance(&env, &owner, &spender)
    }

    /// Move LP shares. `from` must authorize.
    pub fn transfer_shares(
        env: Env,
        from: Address,
        to: Address,
        amount: u128,
    ) -> Result<(), PairError> {
        from.require_auth();
        move_shares(&env, &from, &to, amount)
    }

    /// Set `spender`'s allowance over `owner`'s shares.
    pub fn approve_shares(
        env: Env,
        owner: Address,
        spender: Address,
        amount: u128,
    ) -> Result<(), PairError> {
        owner.require_auth();
        write_allowance(&env, &owner, &spender, amount);
        emit_approval(&env, &owner, &spender, amount);
        Ok(())
    }

    /// Move LP shares on behalf of `from`, consuming allowance.
    pub fn transfer_shares_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: u128,
    ) -> Result<(), PairError> {
        spender.require_auth();
        let allowed = read_allowance(&env, &from, &spender);
        let remaining = allowed
            .checked_sub(amount)
            .ok_or(PairError::InsufficientAllowance)?;
        write_allowance(&env, &from, &spender, remaining);
        move_shares(&env, &from, &to, amount)
    }

    // ========================================================
    // LIQUIDITY
    // ========================================================

    /// Mint LP shares to `to` for whatever token amounts were transferred
    /// to the pair since the last reserve update. Returns the shares
    /// minted. The first mint burns MINIMUM_LIQUIDITY shares permanently.
    pub fn mint(env: Env, sender: Address, to: Address) -> Result<u128, PairError> {
        sender.require_auth();
        acquire_lock(&env)?;

        let mut data = read_pair_data(&env)?;
        let balance_0 = token_balance(&env, &data.token_0)?;
        let balance_1 = token_balance(&env, &data.token_1)?;
        let amount_0 = balance_0
            .checked_sub(data.reserve_0)
            .ok_or(PairError::SubUnderflow)?;
        let amount_1 = balance_1
            .checked_sub(data.reserve_1)
            .ok_or(PairError::SubUnderflow)?;

        let fee_on = mint_fee(&env, &mut data)?;
        // Total shares after a possible protocol-fee mint.
        let total = read_total_shares(&env);
        let liquidity = if total == 0 {
            let liquidity = initial_liquidity(&env, amount_0, amount_1)?;
            mint_shares(&env, &zero_address(&env), MINIMUM_LIQUIDITY)?;
            liquidity
        } else {
            proportional_liquidity(&env, amount_0, amount_1, data.reserve_0, data.reserve_1, total)?
        };
        if liquidity == 0 {
            return Err(PairError::InsufficientLiquidityMinted);
        }
        mint_shares(&env, &to, liquidity)?;

        update(&env, &mut data, balance_0, balance_1)?;
        if fee_on {
            data.root_k_last = Some(root_k(&env, data.reserve_0, data.reserve_1));
        }
        write_pair_data(&env, &data);

        emit_mint(&env, &sender, amount_0, amount_1);
        release_lock(&env);
        Ok(liquidity)
    }

    /// Burn the LP shares held by the pair itself (callers transfer shares
    /// in first) and send the pro-rata token amounts to `to`.
    pub fn burn(env: Env, sender: Address, to: Address) -> Result<(u128, u128), PairError> {
        sender.require_auth();
        acquire_lock(&env)?;

        let mut data = read_pair_data(&env)?;
        let pair_address = env.current_contract_address();
        let balance_0 = token_balance(&env, &data.token_0)?;
        let balance_1 = token_balance(&env, &data.token_1)?;
        let liquidity = read_shares(&env, &pair_address);

        let fee_on = mint_fee(&env, &mut data)?;
        let total = read_total_shares(&env);
        let (amount_0, amount_1) =
            redeemable_amounts(&env, liquidity, balance_0, balance_1, total)?;
        if amount_0 == 0 || amount_1 == 0 {
            return Err(PairError::InsufficientLiquidityBurned);
        }
        burn_shares(&env, &pair_address, liquidity)?;

        transfer_token(&env, &data.token_0, &to, amount_0)?;
        transfer_token(&env, &data.token_1, &to, amount_1)?;

        let balance_0 = token_balance(&env, &data.token_0)?;
        let balance_1 = token_balance(&env, &data.token_1)?;
        update(&env, &mut data, balance_0, balance_1)?;
        if fee_on {
            data.root_k_last = Some(root_k(&env, data.reserve_0, data.reserve_1));
        }
        write_pair_data(&env, &data);

        emit_burn(&env, &sender, amount_0, amount_1, &to);
        release_lock(&env);
        Ok((amount_0, amount_1))
    }

    // ========================================================
    // SWAP
    // ========================================================

    /// Swap against the reserves. Output tokens are transferred
    /// optimistically; when `data` is present the recipient's `mako_call`
    /// hook runs before inputs are measured, enabling flash swaps. The
    /// fee-adjusted constant product must not shrink.
    pub fn swap(
        env: Env,
        sender: Address,
        amount_0_out: u128,
        amount_1_out: u128,
        to: Address,
        data: Option<Bytes>,
    ) -> Result<(), PairError> {
        sender.require_auth();
        acquire_lock(&env)?;

        let mut pair = read_pair_data(&env)?;
        if amount_0_out == 0 && amount_1_out == 0 {
            return Err(PairError::InsufficientOutputAmount);
        }
        if amount_0_out >= pair.reserve_0 || amount_1_out >= pair.reserve_1 {
            return Err(PairError::InsufficientLiquidity);
        }
        if to == pair.token_0 || to == pair.token_1 {
            return Err(PairError::InvalidTo);
        }

        if amount_0_out > 0 {
            transfer_token(&env, &pair.token_0, &to, amount_0_out)?;
        }
        if amount_1_out > 0 {
            transfer_token(&env, &pair.token_1, &to, amount_1_out)?;
        }
        if let Some(payload) = data {
            env.invoke_contract::<()>(
                &to,
                &Symbol::new(&env, "mako_call"),
                vec![
                    &env,
                    sender.clone().into_val(&env),
                    amount_0_out.into_val(&env),
                    amount_1_out.into_val(&env),
                    payload.into_val(&env),
                ],
            );
        }

        let balance_0 = token_balance(&env, &pair.token_0)?;
        let balance_1 = token_balance(&env, &pair.token_1)?;
        let amount_0_in = surplus_over(balance_0, pair.reserve_0, amount_0_out)?;
        let amount_1_in = surplus_over(balance_1, pair.reserve_1, amount_1_out)?;
        if amount_0_in == 0 && amount_1_in == 0 {
            return Err(PairError::InsufficientInputAmount);
        }

        let holds = constant_product_holds(
            &env,
            balance_0,
            balance_1,
            amount_0_in,
            amount_1_in,
            pair.reserve_0,
            pair.reserve_1,
        )?;
        if !holds {
            return Err(PairError::K);
        }

        update(&env, &mut pair, balance_0, balance_1)?;
        write_pair_data(&env, &pair);

        emit_swap(
            &env,
            &sender,
            amount_0_in,
            amount_1_in,
            amount_0_out,
            amount_1_out,
            &to,
        );
        release_lock(&env);
        Ok(())
    }

    // ========================================================
    // RECOVERY
    // ========================================================

    /// Transfer any balance above the tracked reserves to `to`.
    pub fn skim(env: Env, sender: Address, to: Address) -> Result<(), PairError> {
        sender.require_auth();
        acquire_lock(&env)?;

        let data = read_pair_data(&env)?;
        let balance_0 = token_balance(&env, &data.token_0)?;
        let balance_1 = token_balance(&env, &data.token_1)?;
        let excess_0 = balance_0
            .checked_sub(data.reserve_0)
            .ok_or(PairError::SubUnderflow)?;
        let excess_1 = balance_1
            .checked_sub(data.reserve_1)
            .ok_or(PairError::SubUnderflow)?;
        if excess_0 > 0 {
            transfer_token(&env, &data.token_0, &to, excess_0)?;
        }
        if excess_1 > 0 {
            transfer_token(&env, &data.token_1, &to, excess_1)?;
        }

        release_lock(&env);
        Ok(())
    }

    /// Force the tracked reserves to match the actual balances.
    pub fn sync(env: Env, sender: Address) -> Result<(), PairError> {
        sender.require_auth();
        acquire_lock(&env)?;

        let mut data = read_pair_data(&env)?;
        let balance_0 = token_balance(&env, &data.token_0)?;
        let balance_1 = token_balance(&env, &data.token_1)?;
        update(&env, &mut data, balance_0, balance_1)?;
        write_pair_data(&env, &data);

        release_lock(&env);
        Ok(())
    }

    // ========================================================
    // OWNERSHIP
    // ========================================================

    pub fn owner(env: Env) -> Option<Address> {
        read_owner(&env)
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), PairError> {
        caller.require_auth();
        let current = read_owner(&env).ok_or(PairError::CallerIsNotOwner)?;
        if caller != current {
            return Err(PairError::CallerIsNotOwner);
        }
        if new_owner == zero_address(&env) {
            return Err(PairError::NewOwnerIsZero);
        }
        write_owner(&env, &new_owner);
        emit_ownership_transferred(&env, &current, &new_owner);
        Ok(())
    }

    pub fn renounce_ownership(env: Env, caller: Address) -> Result<(), PairError> {
        caller.require_auth();
        let current = read_owner(&env).ok_or(PairError::CallerIsNotOwner)?;
        if caller != current {
            return Err(PairError::CallerIsNotOwner);
        }
        clear_owner(&env);
        emit_ownership_transferred(&env, &current, &zero_address(&env));
        Ok(())
    }
}

// ========================================================
// HELPER FUNCTIONS
// ========================================================

/// Balance of `token` held by the pair, widened into the unsigned domain.
fn token_balance(env: &Env, token: &Address) -> Result<u128, PairError> {
    let pair_address = env.current_contract_address();
    let balance = token::Client::new(env, token).balance(&pair_address);
    Ok(amount_to_u128(balance, 10)?)
}

fn transfer_token(env: &Env, token: &Address, to: &Address, amount: u128) -> Result<(), PairError> {
    let pair_address = env.current_contract_address();
    let amount = amount_to_i128(amount, 11)?;
    token::Client::new(env, token).transfer(&pair_address, to, &amount);
    Ok(())
}

/// Input derived from a post-transfer balance: anything above
/// `reserve - amount_out` arrived during this swap.
fn surplus_over(balance: u128, reserve: u128, amount_out: u128) -> Result<u128, PairError> {
    let floor = reserve
        .checked_sub(amount_out)
        .ok_or(PairError::SubUnderflow)?;
    if balance > floor {
        Ok(balance - floor)
    } else {
        Ok(0)
    }
}

/// Advance the price accumulators for the time the outgoing reserves were
/// in force, then store the new balances as reserves.
fn update(env: &Env, data: &mut PairData, balance_0: u128, balance_1: u128) -> Result<(), PairError> {
    if balance_0 > RESERVES_UPPER_BOUND || balance_1 > RESERVES_UPPER_BOUND {
        return Err(PairError::ReservesOverflow);
    }
    let now = env.ledger().timestamp();
    let elapsed = now.saturating_sub(data.block_timestamp_last);
    if elapsed > 0 && data.reserve_0 > 0 && data.reserve_1 > 0 {
        data.price_0_cumulative_last = accumulate(
            data.price_0_cumulative_last,
            price_x64(env, data.reserve_1, data.reserve_0),
            elapsed,
        );
        data.price_1_cumulative_last = accumulate(
            data.price_1_cumulative_last,
            price_x64(env, data.reserve_0, data.reserve_1),
            elapsed,
        );
    }
    data.reserve_0 = balance_0;
    data.reserve_1 = balance_1;
    data.block_timestamp_last = now;
    emit_sync(env, data.reserve_0, data.reserve_1);
    Ok(())
}

/// Accrue the protocol fee when the factory has a collector configured:
/// 1/6 of sqrt-K growth since the last liquidity event, minted as shares.
/// Returns whether the fee is switched on. An unreachable factory counts
/// as fee off.
fn mint_fee(env: &Env, data: &mut PairData) -> Result<bool, PairError> {
    let result = env.try_invoke_contract::<Option<Address>, soroban_sdk::Error>(
        &data.factory,
        &Symbol::new(env, "fee_to"),
        vec![env],
    );
    let fee_to = match result {
        Ok(Ok(fee_to)) => fee_to,
        _ => None,
    };

    match fee_to {
        Some(collector) => {
            if let Some(root_k_last) = data.root_k_last {
                let current_root_k = root_k(env, data.reserve_0, data.reserve_1);
                let total = read_total_shares(env);
                let liquidity =
                    protocol_fee_liquidity(env, current_root_k, root_k_last, total)?;
                if liquidity > 0 {
                    mint_shares(env, &collector, liquidity)?;
                }
            }
            Ok(true)
        }
        None => {
            data.root_k_last = None;
            Ok(false)
        }
    }
}

fn mint_shares(env: &Env, to: &Address, amount: u128) -> Result<(), PairError> {
    let total = read_total_shares(env)
        .checked_add(amount)
        .ok_or(PairError::AddOverflow)?;
    write_total_shares(env, total);
    let balance = read_shares(env, to)
        .checked_add(amount)
        .ok_or(PairError::AddOverflow)?;
    write_shares(env, to, balance);
    emit_transfer(env, &zero_address(env), to, amount);
    Ok(())
}

fn burn_shares(env: &Env, from: &Address, amount: u128) -> Result<(), PairError> {
    let balance = read_shares(env, from)
        .checked_sub(amount)
        .ok_or(PairError::InsufficientBalance)?;
    write_shares(env, from, balance);
    let total = read_total_shares(env)
        .checked_sub(amount)
        .ok_or(PairError::SubUnderflow)?;
    write_total_shares(env, total);
    emit_transfer(env, from, &zero_address(env), amount);
    Ok(())
}

fn move_shares(env: &Env, from: &Address, to: &Address, amount: u128) -> Result<(), PairError> {
    let from_balance = read_shares(env, from)
        .checked_sub(amount)
        .ok_or(PairError::InsufficientBalance)?;
    write_shares(env, from, from_balance);
    let to_balance = read_shares(env, to)
        .checked_add(amount)
        .ok_or(PairError::AddOverflow)?;
    write_shares(env, to, to_balance);
    emit_transfer(env, from, to, amount);
    Ok(())
}
