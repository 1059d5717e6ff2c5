mod common;

use makoswap_factory::{FactoryError, MakoFactory, MakoFactoryClient};
use soroban_sdk::{testutils::Address as _, Address, BytesN, Env};

#[test]
fn initialization_success() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, fee_to_setter) = common::setup_factory(&env);

    assert_eq!(client.all_pairs_length(), 0);
    assert_eq!(client.all_pairs(&0), None);
    assert_eq!(client.fee_to(), None);
    assert_eq!(client.fee_to_setter(), fee_to_setter);
    assert_eq!(client.pair_wasm_hash(), BytesN::from_array(&env, &[0u8; 32]));
}

#[test]
fn double_initialization_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, fee_to_setter) = common::setup_factory(&env);
    let hash = BytesN::from_array(&env, &[0u8; 32]);

    assert_eq!(
        client.try_initialize(&fee_to_setter, &hash),
        Err(Ok(FactoryError::AlreadyInitialized))
    );
}

#[test]
fn create_pair_before_initialize_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let factory_id = env.register(MakoFactory, ());
    let client = MakoFactoryClient::new(&env, &factory_id);

    let token_a = common::create_token(&env);
    let token_b = common::create_token(&env);

    assert_eq!(
        client.try_create_pair(&token_a, &token_b),
        Err(Ok(FactoryError::NotInitialized))
    );
}

#[test]
fn views_before_initialize() {
    let env = Env::default();
    env.mock_all_auths();

    let factory_id = env.register(MakoFactory, ());
    let client = MakoFactoryClient::new(&env, &factory_id);

    assert_eq!(client.fee_to(), None);
    assert_eq!(client.all_pairs_length(), 0);
    assert_eq!(
        client.try_fee_to_setter(),
        Err(Ok(FactoryError::NotInitialized))
    );
    assert_eq!(
        client.try_pair_wasm_hash(),
        Err(Ok(FactoryError::NotInitialized))
    );

    let caller = Address::generate(&env);
    assert_eq!(
        client.try_set_fee_to(&caller, &Some(caller.clone())),
        Err(Ok(FactoryError::NotInitialized))
    );
}
