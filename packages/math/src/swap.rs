// SPDX-License-Identifier: MIT
// Constant-product pricing formulas (0.3% fee).

use soroban_sdk::{Env, U256};

use crate::constants::{
    RESERVES_UPPER_BOUND, SWAP_FEE_DENOMINATOR, SWAP_FEE_NUMERATOR, TRADING_FEE_ADJ_AMOUNTS,
    TRADING_FEE_ADJ_RESERVES,
};
use crate::error::MathError;

/// Given an input amount and the pair reserves, returns the maximum output
/// the pair will honor: `in * 997 * reserve_out / (reserve_in * 1000 + in * 997)`.
pub fn get_amount_out(
    env: &Env,
    amount_in: u128,
    reserve_in: u128,
    reserve_out: u128,
) -> Result<u128, MathError> {
    if reserve_in == 0 || reserve_out == 0 {
        return Err(MathError::DivByZero(1));
    }
    if reserve_in > RESERVES_UPPER_BOUND || reserve_out > RESERVES_UPPER_BOUND {
        return Err(MathError::MulOverflow(1));
    }
    let amount_in_with_fee =
        U256::from_u128(env, amount_in).mul(&U256::from_u128(env, SWAP_FEE_NUMERATOR));
    let numerator = amount_in_with_fee.mul(&U256::from_u128(env, reserve_out));
    let denominator = U256::from_u128(env, reserve_in * SWAP_FEE_DENOMINATOR)
        .add(&amount_in_with_fee);
    numerator
        .div(&denominator)
        .to_u128()
        .ok_or(MathError::CastOverflow(1))
}

/// Given a desired output amount and the pair reserves, returns the minimum
/// input the pair requires:
/// `reserve_in * out * 1000 / ((reserve_out - out) * 997) + 1`.
pub fn get_amount_in(
    env: &Env,
    amount_out: u128,
    reserve_in: u128,
    reserve_out: u128,
) -> Result<u128, MathError> {
    if reserve_in == 0 || reserve_out == 0 {
        return Err(MathError::DivByZero(2));
    }
    if reserve_in > RESERVES_UPPER_BOUND || reserve_out > RESERVES_UPPER_BOUND {
        return Err(MathError::MulOverflow(2));
    }
    let numerator = U256::from_u128(env, reserve_in)
        .mul(&U256::from_u128(env, amount_out))
        .mul(&U256::from_u128(env, SWAP_FEE_DENOMINATOR));
    let reserve_out_rest = reserve_out
        .checked_sub(amount_out)
        .ok_or(MathError::SubUnderflow(1))?;
    if reserve_out_rest == 0 {
        return Err(MathError::DivByZero(3));
    }
    let denominator = U256::from_u128(env, reserve_out_rest * SWAP_FEE_NUMERATOR);
    let amount_in = numerator
        .div(&denominator)
        .to_u128()
        .ok_or(MathError::CastOverflow(2))?;
    amount_in.checked_add(1).ok_or(MathError::AddOverflow(1))
}

/// Value of `amount_a` units of asset A in asset B at the current reserve
/// ratio, with no fee applied: `amount_a * reserve_b / reserve_a`.
pub fn quote(
    env: &Env,
    amount_a: u128,
    reserve_a: u128,
    reserve_b: u128,
) -> Result<u128, MathError> {
    if reserve_a == 0 {
        return Err(MathError::DivByZero(4));
    }
    U256::from_u128(env, amount_a)
        .mul(&U256::from_u128(env, reserve_b))
        .div(&U256::from_u128(env, reserve_a))
        .to_u128()
        .ok_or(MathError::CastOverflow(3))
}

/// Fee-adjusted constant-product check performed after a swap's inputs are
/// known: `(b0*1000 - in0*3) * (b1*1000 - in1*3) >= r0 * r1 * 1000^2`.
pub fn constant_product_holds(
    env: &Env,
    balance_0: u128,
    balance_1: u128,
    amount_0_in: u128,
    amount_1_in: u128,
    reserve_0: u128,
    reserve_1: u128,
) -> Result<bool, MathError> {
    if balance_0 > RESERVES_UPPER_BOUND
        || balance_1 > RESERVES_UPPER_BOUND
        || reserve_0 > RESERVES_UPPER_BOUND
        || reserve_1 > RESERVES_UPPER_BOUND
    {
        return Err(MathError::MulOverflow(3));
    }
    let adjusted_0 = (balance_0 * TRADING_FEE_ADJ_RESERVES)
        .checked_sub(
            amount_0_in
                .checked_mul(TRADING_FEE_ADJ_AMOUNTS)
                .ok_or(MathError::MulOverflow(4))?,
        )
        .ok_or(MathError::SubUnderflow(2))?;
    let adjusted_1 = (balance_1 * TRADING_FEE_ADJ_RESERVES)
        .checked_sub(
            amount_1_in
                .checked_mul(TRADING_FEE_ADJ_AMOUNTS)
                .ok_or(MathError::MulOverflow(5))?,
        )
        .ok_or(MathError::SubUnderflow(3))?;
    let lhs = U256::from_u128(env, adjusted_0).mul(&U256::from_u128(env, adjusted_1));
    let rhs = U256::from_u128(env, reserve_0 * TRADING_FEE_ADJ_RESERVES)
        .mul(&U256::from_u128(env, reserve_1 * TRADING_FEE_ADJ_RESERVES));
    Ok(lhs >= rhs)
}
