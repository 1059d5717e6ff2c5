//! Router error types

use makoswap_math::MathError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum RouterError {
    // Initialization
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Path errors
    InvalidPath = 10,
    PairNotFound = 11,
    Expired = 12,

    // Quote errors
    InsufficientAmount = 20,
    InsufficientInputAmount = 21,
    InsufficientOutputAmount = 22,
    InsufficientLiquidity = 23,
    ExcessiveInputAmount = 24,

    // Liquidity errors
    InsufficientAAmount = 30,
    InsufficientBAmount = 31,

    // Arithmetic errors
    AddOverflow = 40,
    CastOverflow = 41,
    DivByZero = 42,
    MulOverflow = 43,
    SubUnderflow = 44,
}

impl From<MathError> for RouterError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::AddOverflow(_) => RouterError::AddOverflow,
            MathError::CastOverflow(_) => RouterError::CastOverflow,
            MathError::DivByZero(_) => RouterError::DivByZero,
            MathError::MulOverflow(_) => RouterError::MulOverflow,
            MathError::SubUnderflow(_) => RouterError::SubUnderflow,
        }
    }
}
