// Pair state types

use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug)]
pub struct PairData {
    /// Factory that deployed this pair
    pub factory: Address,
    /// First token (sorted: token_0 < token_1)
    pub token_0: Address,
    /// Second token
    pub token_1: Address,
    /// Tracked balance of token_0
    pub reserve_0: u128,
    /// Tracked balance of token_1
    pub reserve_1: u128,
    /// Ledger timestamp of the last reserve update
    pub block_timestamp_last: u64,
    /// Q64.64 cumulative price of token_0 in units of token_1
    pub price_0_cumulative_last: u128,
    /// Q64.64 cumulative price of token_1 in units of token_0
    pub price_1_cumulative_last: u128,
    /// sqrt(K) as of the last liquidity event, tracked while the protocol
    /// fee is switched on
    pub root_k_last: Option<u128>,
}
