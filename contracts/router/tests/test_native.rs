mod common;

use makoswap_pair::MakoPairClient;
use makoswap_router::RouterError;
use soroban_sdk::{testutils::Address as _, vec, Address, Env};

const DEADLINE: u64 = u64::MAX;

/// Pair over (token, wnative), seeded with equal sides
fn setup_native_pair<'a>(
    env: &'a Env,
    rig: &common::Rig<'a>,
    token: &Address,
    amount: i128,
    provider: &Address,
) -> MakoPairClient<'a> {
    let pair = common::make_pair(env, rig, token, &rig.wnative.address);
    common::mint_tokens(env, token, &pair.address, amount);
    rig.wnative.deposit(&pair.address, &amount);
    pair.mint(provider, provider);
    pair
}

#[test]
fn add_liquidity_native_wraps_into_pair() {
    let env = Env::default();
    env.mock_all_auths();
    let rig = common::setup(&env);

    let token = common::create_token(&env);
    let pair = common::make_pair(&env, &rig, &token, &rig.wnative.address);

    let provider = Address::generate(&env);
    common::mint_tokens(&env, &token, &provider, 10_000);

    let (amount_token, amount_native, liquidity) = rig.router.add_liquidity_native(
        &provider, &token, &10_000, &10_000, &0, &0, &provider, &DEADLINE,
    );

    assert_eq!((amount_token, amount_native), (10_000, 10_000));
    assert_eq!(liquidity, 9_000);
    assert_eq!(rig.wnative.balance(&pair.address), 10_000);
    assert_eq!(common::token_balance(&env, &token, &pair.address), 10_000);
    assert_eq!(pair.share_balance(&provider), 9_000);
}

#[test]
fn remove_liquidity_native_unwraps_to_recipient() {
    let env = Env::default();
    env.mock_all_auths();
    let rig = common::setup(&env);

    let token = common::create_token(&env);
    let provider = Address::generate(&env);
    let pair = setup_native_pair(&env, &rig, &token, 10_000, &provider);

    let (amount_token, amount_native) = rig.router.remove_liquidity_native(
        &provider, &token, &2_000, &0, &0, &provider, &DEADLINE,
    );

    assert_eq!((amount_token, amount_native), (2_000, 2_000));
    assert_eq!(common::token_balance(&env, &token, &provider), 2_000);
    assert_eq!(rig.wnative.native_paid(&provider), 2_000);
    // Nothing sticks to the router
    assert_eq!(rig.wnative.balance(&rig.router.address), 0);
    assert_eq!(common::token_balance(&env, &token, &rig.router.address), 0);
    assert_eq!(pair.share_balance(&provider), 7_000);
}

#[test]
fn swap_exact_native_for_tokens() {
    let env = Env::default();
    env.mock_all_auths();
    let rig = common::setup(&env);

    let token = common::create_token(&env);
    let provider = Address::generate(&env);
    let pair = setup_native_pair(&env, &rig, &token, 100_000, &provider);
    let _ = pair;

    let trader = Address::generate(&env);
    let path = vec![&env, rig.wnative.address.clone(), token.clone()];
    let amounts = rig
        .router
        .swap_exact_native_for_tokens(&trader, &1_000, &980, &path, &trader, &DEADLINE);

    assert_eq!(amounts, vec![&env, 1_000u128, 987u128]);
    assert_eq!(common::token_balance(&env, &token, &trader), 987);
}

#[test]
fn swap_exact_tokens_for_native() {
    let env = Env::default();
    env.mock_all_auths();
    let rig = common::setup(&env);

    let token = common::create_token(&env);
    let provider = Address::generate(&env);
    setup_native_pair(&env, &rig, &token, 100_000, &provider);

    let trader = Address::generate(&env);
    common::mint_tokens(&env, &token, &trader, 1_000);

    let path = vec![&env, token.clone(), rig.wnative.address.clone()];
    let amounts = rig
        .router
        .swap_exact_tokens_for_native(&trader, &1_000, &980, &path, &trader, &DEADLINE);

    assert_eq!(amounts, vec![&env, 1_000u128, 987u128]);
    assert_eq!(rig.wnative.native_paid(&trader), 987);
    assert_eq!(rig.wnative.balance(&rig.router.address), 0);
}

#[test]
fn swap_tokens_for_exact_native() {
    let env = Env::default();
    env.mock_all_auths();
    let rig = common::setup(&env);

    let token = common::create_token(&env);
    let provider = Address::generate(&env);
    setup_native_pair(&env, &rig, &token, 100_000, &provider);

    let trader = Address::generate(&env);
    common::mint_tokens(&env, &token, &trader, 1_000);

    let path = vec![&env, token.clone(), rig.wnative.address.clone()];
    let amounts = rig
        .router
        .swap_tokens_for_exact_native(&trader, &987, &1_000, &path, &trader, &DEADLINE);

    assert_eq!(amounts, vec![&env, 1_000u128, 987u128]);
    assert_eq!(rig.wnative.native_paid(&trader), 987);
}

#[test]
fn swap_native_for_exact_tokens() {
    let env = Env::default();
    env.mock_all_auths();
    let rig = common::setup(&env);

    let token = common::create_token(&env);
    let provider = Address::generate(&env);
    setup_native_pair(&env, &rig, &token, 100_000, &provider);

    let trader = Address::generate(&env);
    let path = vec![&env, rig.wnative.address.clone(), token.clone()];
    let amounts = rig
        .router
        .swap_native_for_exact_tokens(&trader, &987, &1_000, &path, &trader, &DEADLINE);

    assert_eq!(amounts, vec![&env, 1_000u128, 987u128]);
    assert_eq!(common::token_balance(&env, &token, &trader), 987);
}

#[test]
fn native_paths_must_terminate_in_wnative() {
    let env = Env::default();
    env.mock_all_auths();
    let rig = common::setup(&env);

    let token_a = common::create_token(&env);
    let token_b = common::create_token(&env);
    let trader = Address::generate(&env);

    let path = vec![&env, token_a.clone(), token_b.clone()];
    assert_eq!(
        rig.router
            .try_swap_exact_native_for_tokens(&trader, &1_000, &0, &path, &trader, &DEADLINE),
        Err(Ok(RouterError::InvalidPath))
    );
    assert_eq!(
        rig.router
            .try_swap_exact_tokens_for_native(&trader, &1_000, &0, &path, &trader, &DEADLINE),
        Err(Ok(RouterError::InvalidPath))
    );
    assert_eq!(
        rig.router
            .try_swap_tokens_for_exact_native(&trader, &987, &1_000, &path, &trader, &DEADLINE),
        Err(Ok(RouterError::InvalidPath))
    );
    assert_eq!(
        rig.router
            .try_swap_native_for_exact_tokens(&trader, &987, &1_000, &path, &trader, &DEADLINE),
        Err(Ok(RouterError::InvalidPath))
    );
}
