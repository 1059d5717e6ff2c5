// Factory error module for MakoSwap

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FactoryError {
    // Initialization errors (1000-1099)
    AlreadyInitialized = 1000,
    NotInitialized = 1001,

    // Pair creation errors (1100-1199)
    PairExists = 1100,
    IdenticalAddresses = 1101,
    ZeroAddress = 1102,
    PairInstantiationFailed = 1103,

    // Authorization errors (1300-1399)
    CallerIsNotFeeSetter = 1300,
}

/// Human-readable error messages for debugging
pub struct FactoryErrorMsg;

impl FactoryErrorMsg {
    // Initialization
    pub const ALREADY_INITIALIZED: &'static str = "Factory: already initialized";
    pub const NOT_INITIALIZED: &'static str = "Factory: not initialized";

    // Pair creation
    pub const PAIR_EXISTS: &'static str = "Factory: pair already exists for these tokens";
    pub const IDENTICAL_ADDRESSES: &'static str = "Factory: token addresses must be different";
    pub const ZERO_ADDRESS: &'static str = "Factory: token address must not be the zero address";
    pub const PAIR_INSTANTIATION_FAILED: &'static str = "Factory: pair contract initialization failed";

    // Authorization
    pub const CALLER_IS_NOT_FEE_SETTER: &'static str = "Factory: caller is not the fee-to setter";
}
