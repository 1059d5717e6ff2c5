// MakoSwap Math Package

#![no_std]

pub mod constants;
pub mod error;
pub mod liquidity;
pub mod oracle;
pub mod sqrt;
pub mod swap;

pub use constants::*;
pub use error::MathError;

pub use liquidity::{
    initial_liquidity,
    proportional_liquidity,
    protocol_fee_liquidity,
    redeemable_amounts,
    root_k,
};
pub use oracle::{accumulate, price_x64};
pub use sqrt::{isqrt_u128, isqrt_wide};
pub use swap::{constant_product_holds, get_amount_in, get_amount_out, quote};

/// Widens a token-interface amount into the internal unsigned domain.
/// Token balances are never negative, but the conversion stays checked.
pub fn amount_to_u128(value: i128, step: u8) -> Result<u128, MathError> {
    u128::try_from(value).map_err(|_| MathError::CastOverflow(step))
}

/// Narrows an internal amount back to the token interface.
pub fn amount_to_i128(value: u128, step: u8) -> Result<i128, MathError> {
    i128::try_from(value).map_err(|_| MathError::CastOverflow(step))
}
