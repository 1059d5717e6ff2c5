use makoswap_factory::{MakoFactory, MakoFactoryClient};
use soroban_sdk::{testutils::Address as _, Address, BytesN, Env};

pub fn setup_factory(env: &Env) -> (MakoFactoryClient<'_>, Address) {
    let fee_to_setter = Address::generate(env);
    let factory_id = env.register(MakoFactory, ());
    let client = MakoFactoryClient::new(env, &factory_id);
    let pair_wasm_hash = BytesN::from_array(env, &[0u8; 32]);
    client.initialize(&fee_to_setter, &pair_wasm_hash);
    (client, fee_to_setter)
}

pub fn create_token(env: &Env) -> Address {
    let admin = Address::generate(env);
    let token_id = env.register_stellar_asset_contract_v2(admin.clone());
    token_id.address()
}

#[allow(dead_code)]
pub fn zero_address(env: &Env) -> Address {
    Address::from_string(&soroban_sdk::String::from_str(
        env,
        "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF",
    ))
}
