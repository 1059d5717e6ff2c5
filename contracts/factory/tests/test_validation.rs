mod common;

use makoswap_factory::FactoryError;
use soroban_sdk::Env;

#[test]
fn create_pair_rejects_identical_tokens() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_factory(&env);
    let token = common::create_token(&env);

    assert_eq!(
        client.try_create_pair(&token, &token),
        Err(Ok(FactoryError::IdenticalAddresses))
    );
}

#[test]
fn create_pair_rejects_zero_address() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_factory(&env);
    let token = common::create_token(&env);
    let zero = common::zero_address(&env);

    assert_eq!(
        client.try_create_pair(&zero, &token),
        Err(Ok(FactoryError::ZeroAddress))
    );
    assert_eq!(
        client.try_create_pair(&token, &zero),
        Err(Ok(FactoryError::ZeroAddress))
    );
}

#[test]
fn get_pair_unknown_tokens_is_none() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_factory(&env);
    let token_a = common::create_token(&env);
    let token_b = common::create_token(&env);

    assert_eq!(client.get_pair(&token_a, &token_b), None);
    assert_eq!(client.get_pair(&token_b, &token_a), None);
}
