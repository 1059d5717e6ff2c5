use soroban_sdk::{contract, contractimpl, testutils::Address as _, Address, Env, String};
use makoswap_pair::{MakoPair, MakoPairClient};

/// Stand-in factory. Pairs look up the protocol fee collector here; by
/// default none is set, so the fee stays off.
#[contract]
pub struct StubFactory;

#[contractimpl]
impl StubFactory {
    pub fn set_fee_to(env: Env, collector: Address) {
        env.storage().instance().set(&0u32, &collector);
    }

    pub fn fee_to(env: Env) -> Option<Address> {
        env.storage().instance().get(&0u32)
    }
}

/// Deploy a pair against a stub factory. Returns the pair client plus the
/// factory address and the pair's sorted tokens.
pub fn setup_pair(env: &Env) -> (MakoPairClient<'_>, Address, Address, Address) {
    let factory = env.register(StubFactory, ());
    let token_a = create_token(env);
    let token_b = create_token(env);

    let pair_id = env.register(MakoPair, ());
    let client = MakoPairClient::new(env, &pair_id);
    client.initialize(&factory, &token_a, &token_b);

    let token_0 = client.token_0();
    let token_1 = client.token_1();
    (client, factory, token_0, token_1)
}

/// Create a test token
pub fn create_token(env: &Env) -> Address {
    let admin = Address::generate(env);
    let token_id = env.register_stellar_asset_contract_v2(admin);
    token_id.address()
}

/// Mint tokens to an address
pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    use soroban_sdk::token::StellarAssetClient;
    let client = StellarAssetClient::new(env, token);
    client.mint(to, &amount);
}

pub fn token_balance(env: &Env, token: &Address, of: &Address) -> i128 {
    soroban_sdk::token::Client::new(env, token).balance(of)
}

/// Deposit both tokens into the pair and mint shares to `provider`.
pub fn seed_liquidity(
    env: &Env,
    pair: &MakoPairClient,
    token_0: &Address,
    token_1: &Address,
    amount_0: i128,
    amount_1: i128,
    provider: &Address,
) -> u128 {
    mint_tokens(env, token_0, &pair.address, amount_0);
    mint_tokens(env, token_1, &pair.address, amount_1);
    pair.mint(provider, provider)
}

/// The all-zero strkey the pair uses as burn sink and null owner.
pub fn zero_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(
        env,
        "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF",
    ))
}
