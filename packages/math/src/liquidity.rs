// SPDX-License-Identifier: MIT
// LP share issuance and redemption arithmetic.

use soroban_sdk::{Env, U256};

use crate::constants::{MINIMUM_LIQUIDITY, PROTOCOL_FEE_ADJ_DENOM};
use crate::error::MathError;
use crate::sqrt::isqrt_wide;

fn mul_div(env: &Env, a: u128, b: u128, denominator: u128, cast_step: u8) -> Result<u128, MathError> {
    U256::from_u128(env, a)
        .mul(&U256::from_u128(env, b))
        .div(&U256::from_u128(env, denominator))
        .to_u128()
        .ok_or(MathError::CastOverflow(cast_step))
}

/// Shares issued by the first mint: `sqrt(a0 * a1) - MINIMUM_LIQUIDITY`.
/// Seeds too small to cover the locked minimum underflow.
pub fn initial_liquidity(env: &Env, amount_0: u128, amount_1: u128) -> Result<u128, MathError> {
    isqrt_wide(env, amount_0, amount_1)
        .checked_sub(MINIMUM_LIQUIDITY)
        .ok_or(MathError::SubUnderflow(4))
}

/// Shares issued by a follow-up mint: `min(a0*supply/r0, a1*supply/r1)`,
/// so unbalanced deposits are priced at the worse ratio.
pub fn proportional_liquidity(
    env: &Env,
    amount_0: u128,
    amount_1: u128,
    reserve_0: u128,
    reserve_1: u128,
    total_supply: u128,
) -> Result<u128, MathError> {
    if reserve_0 == 0 || reserve_1 == 0 {
        return Err(MathError::DivByZero(5));
    }
    let liquidity_0 = mul_div(env, amount_0, total_supply, reserve_0, 4)?;
    let liquidity_1 = mul_div(env, amount_1, total_supply, reserve_1, 5)?;
    Ok(liquidity_0.min(liquidity_1))
}

/// Pro-rata token amounts released by burning `liquidity` shares against the
/// pair's current balances.
pub fn redeemable_amounts(
    env: &Env,
    liquidity: u128,
    balance_0: u128,
    balance_1: u128,
    total_supply: u128,
) -> Result<(u128, u128), MathError> {
    if total_supply == 0 {
        return Err(MathError::DivByZero(6));
    }
    let amount_0 = mul_div(env, liquidity, balance_0, total_supply, 6)?;
    let amount_1 = mul_div(env, liquidity, balance_1, total_supply, 7)?;
    Ok((amount_0, amount_1))
}

/// Square root of the invariant K for the given reserves.
pub fn root_k(env: &Env, reserve_0: u128, reserve_1: u128) -> u128 {
    isqrt_wide(env, reserve_0, reserve_1)
}

/// Shares minted to the protocol fee collector for the growth of sqrt(K)
/// since the last liquidity event. Zero when sqrt(K) has not grown.
pub fn protocol_fee_liquidity(
    env: &Env,
    root_k: u128,
    root_k_last: u128,
    total_supply: u128,
) -> Result<u128, MathError> {
    if root_k <= root_k_last {
        return Ok(0);
    }
    let denominator = root_k
        .checked_mul(PROTOCOL_FEE_ADJ_DENOM)
        .ok_or(MathError::MulOverflow(7))?
        .checked_add(root_k_last)
        .ok_or(MathError::AddOverflow(2))?;
    mul_div(env, total_supply, root_k - root_k_last, denominator, 8)
}
