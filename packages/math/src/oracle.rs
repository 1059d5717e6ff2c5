// SPDX-License-Identifier: MIT
// Q64.64 cumulative-price accumulator arithmetic.

use soroban_sdk::{Env, U256};

use crate::constants::Q64;

/// Marginal price of the denominator asset in units of the numerator asset
/// as a Q64.64 fixed-point value, saturating when the ratio exceeds the
/// format. A zero denominator also saturates; callers skip accumulation
/// while either reserve is empty.
pub fn price_x64(env: &Env, numerator_reserve: u128, denominator_reserve: u128) -> u128 {
    if denominator_reserve == 0 {
        return u128::MAX;
    }
    U256::from_u128(env, numerator_reserve)
        .mul(&U256::from_u128(env, Q64))
        .div(&U256::from_u128(env, denominator_reserve))
        .to_u128()
        .unwrap_or(u128::MAX)
}

/// Advances a cumulative price integral by `price * elapsed`.
///
/// The product saturates and the accumulator wraps modulo 2^128; consumers
/// difference two observations with wrapping subtraction, so the wraparound
/// epoch is transparent to them.
pub fn accumulate(cumulative: u128, price: u128, elapsed: u64) -> u128 {
    cumulative.wrapping_add(price.saturating_mul(elapsed as u128))
}
