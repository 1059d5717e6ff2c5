// MakoSwap constant-product parameters.

// ============================================================
// LIQUIDITY CONSTANTS
// ============================================================

/// Shares permanently locked on the first mint of every pair.
/// Prevents the total supply from ever returning to zero.
pub const MINIMUM_LIQUIDITY: u128 = 1_000;

/// Reserves never exceed 2^112 - 1 so the fee-adjusted product of two
/// reserves fits 256 bits.
pub const RESERVES_UPPER_BOUND: u128 = (1u128 << 112) - 1;

// ============================================================
// FEE CONSTANTS
// ============================================================

/// Swap fee is 0.3%, expressed as the 997/1000 pair used by the
/// quoting formulas.
pub const SWAP_FEE_NUMERATOR: u128 = 997;
pub const SWAP_FEE_DENOMINATOR: u128 = 1_000;

/// The same fee for the constant-product check: reserves scale by 1000
/// and input amounts by 3 before comparing K.
pub const TRADING_FEE_ADJ_RESERVES: u128 = 1_000;
pub const TRADING_FEE_ADJ_AMOUNTS: u128 = 3;

/// Protocol fee adjustment. With the fee switched on, 1/6 of sqrt-K
/// growth is minted to the collector:
/// `supply * (root_k - root_k_last) / (root_k * 5 + root_k_last)`.
pub const PROTOCOL_FEE_ADJ_DENOM: u128 = 5;

// ============================================================
// MATH CONSTANTS
// ============================================================

/// Q64 multiplier (2^64) for fixed-point math
/// Used as the scaling factor for the Q64.64 price accumulators.
pub const Q64: u128 = 1u128 << 64;
