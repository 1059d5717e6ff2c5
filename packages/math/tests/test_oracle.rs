use makoswap_math::{accumulate, price_x64, Q64};
use soroban_sdk::Env;

#[test]
fn test_price_x64_unit_ratio() {
    let env = Env::default();
    assert_eq!(price_x64(&env, 10_000, 10_000), Q64);
}

#[test]
fn test_price_x64_ratios() {
    let env = Env::default();
    assert_eq!(price_x64(&env, 2_000, 1_000), 2 * Q64);
    assert_eq!(price_x64(&env, 1_000, 2_000), Q64 / 2);
    // 1/3 in Q64.64 is the floor of 2^64 / 3.
    assert_eq!(price_x64(&env, 1_000, 3_000), Q64 / 3);
}

#[test]
fn test_price_x64_saturates() {
    let env = Env::default();
    assert_eq!(price_x64(&env, u128::MAX, 1), u128::MAX);
    assert_eq!(price_x64(&env, 1, 0), u128::MAX);
}

#[test]
fn test_accumulate_advances_linearly() {
    let cumulative = accumulate(0, Q64, 10);
    assert_eq!(cumulative, 10 * Q64);
    let cumulative = accumulate(cumulative, 2 * Q64, 5);
    assert_eq!(cumulative, 20 * Q64);
}

#[test]
fn test_accumulate_zero_elapsed() {
    assert_eq!(accumulate(42, Q64, 0), 42);
}

#[test]
fn test_accumulate_wraps() {
    // Consumers difference observations with wrapping_sub, so the epoch
    // boundary must wrap rather than saturate or trap.
    let before = u128::MAX - 5;
    let after = accumulate(before, 1, 10);
    assert_eq!(after, 4);
    assert_eq!(after.wrapping_sub(before), 10);
}
