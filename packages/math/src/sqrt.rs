// SPDX-License-Identifier: MIT
// Integer square roots over u128 and 256-bit products.

use soroban_sdk::{Env, U256};

/// Floor integer square root of a u128.
pub fn isqrt_u128(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    // Initial guess: 2^ceil(bits/2) is always >= sqrt(n), so the Newton
    // iteration decreases monotonically onto the floor root.
    let bits = 128 - n.leading_zeros();
    let mut x = 1u128 << ((bits + 1) / 2);
    loop {
        let next = (x + n / x) / 2;
        if next >= x {
            return x;
        }
        x = next;
    }
}

/// Floor integer square root of the full 256-bit product `a * b`.
///
/// The result always fits a u128 because the product of two u128 values
/// is below 2^256.
pub fn isqrt_wide(env: &Env, a: u128, b: u128) -> u128 {
    if a == 0 || b == 0 {
        return 0;
    }
    if let Some(product) = a.checked_mul(b) {
        return isqrt_u128(product);
    }
    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    // The product exceeds u128::MAX here, so every iterate stays at or
    // above 2^64 and `product / x` fits a u128.
    let mut x = u128::MAX;
    loop {
        let q = product
            .div(&U256::from_u128(env, x))
            .to_u128()
            .unwrap_or(u128::MAX);
        let next = x / 2 + q / 2 + (x % 2 + q % 2) / 2;
        if next >= x {
            return x;
        }
        x = next;
    }
}
