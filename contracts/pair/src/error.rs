//! Pair error types

use makoswap_math::MathError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum PairError {
    // Initialization
    AlreadyInitialized = 100,
    NotInitialized = 101,
    IdenticalTokens = 102,

    // Ownership
    CallerIsNotOwner = 200,
    NewOwnerIsZero = 201,

    // Share ledger
    InsufficientBalance = 300,
    InsufficientAllowance = 301,

    // Liquidity
    InsufficientLiquidityMinted = 400,
    InsufficientLiquidityBurned = 401,

    // Swap
    InsufficientOutputAmount = 500,
    InsufficientLiquidity = 501,
    InvalidTo = 502,
    InsufficientInputAmount = 503,
    K = 504,
    ReservesOverflow = 505,

    // Reentrancy
    ReentrantCall = 600,

    // Arithmetic. Step identifiers live in makoswap-math; the contract ABI
    // carries the failure kind only.
    AddOverflow = 700,
    CastOverflow = 701,
    DivByZero = 702,
    MulOverflow = 703,
    SubUnderflow = 704,
}

impl From<MathError> for PairError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::AddOverflow(_) => PairError::AddOverflow,
            MathError::CastOverflow(_) => PairError::CastOverflow,
            MathError::DivByZero(_) => PairError::DivByZero,
            MathError::MulOverflow(_) => PairError::MulOverflow,
            MathError::SubUnderflow(_) => PairError::SubUnderflow,
        }
    }
}
