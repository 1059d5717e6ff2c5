use makoswap_pair::{MakoPair, MakoPairClient};
use makoswap_router::{MakoRouter, MakoRouterClient};
use soroban_sdk::{
    contract, contractimpl, contracttype, testutils::Address as _, token::StellarAssetClient,
    vec, Address, Env, IntoVal, Symbol,
};

// ============================================================
// TEST FACTORY
// ============================================================

#[contracttype]
pub enum FactoryKey {
    Pair(Address, Address),
    NextPair,
    FeeTo,
}

/// Registry-only factory. Pairs are registered natively by the test and
/// wired in through `set_pair`; `create_pair` hands out a pre-registered
/// instance and initializes it, standing in for wasm deployment.
#[contract]
pub struct TestFactory;

#[contractimpl]
impl TestFactory {
    pub fn set_pair(env: Env, token_a: Address, token_b: Address, pair: Address) {
        env.storage()
            .instance()
            .set(&FactoryKey::Pair(token_a.clone(), token_b.clone()), &pair);
        env.storage()
            .instance()
            .set(&FactoryKey::Pair(token_b, token_a), &pair);
    }

    pub fn set_next_pair(env: Env, pair: Address) {
        env.storage().instance().set(&FactoryKey::NextPair, &pair);
    }

    pub fn get_pair(env: Env, token_a: Address, token_b: Address) -> Option<Address> {
        env.storage()
            .instance()
            .get(&FactoryKey::Pair(token_a, token_b))
    }

    pub fn create_pair(env: Env, token_a: Address, token_b: Address) -> Address {
        let pair: Address = env
            .storage()
            .instance()
            .get(&FactoryKey::NextPair)
            .unwrap();
        let _: () = env.invoke_contract(
            &pair,
            &Symbol::new(&env, "initialize"),
            vec![
                &env,
                env.current_contract_address().into_val(&env),
                token_a.clone().into_val(&env),
                token_b.clone().into_val(&env),
            ],
        );
        Self::set_pair(env, token_a, token_b, pair.clone());
        pair
    }

    pub fn fee_to(env: Env) -> Option<Address> {
        env.storage().instance().get(&FactoryKey::FeeTo)
    }
}

// ============================================================
// MOCK WRAPPED-NATIVE TOKEN
// ============================================================

#[contracttype]
pub enum WnativeKey {
    Balance(Address),
    NativePaid(Address),
}

/// Wrapped-native stand-in. `deposit` mints wrapped balance as if native
/// had been received; `withdraw` burns it and records the native payout.
#[contract]
pub struct MockWnative;

#[contractimpl]
impl MockWnative {
    pub fn deposit(env: Env, to: Address, amount: i128) {
        let key = WnativeKey::Balance(to);
        let balance: i128 = env.storage().instance().get(&key).unwrap_or(0);
        env.storage().instance().set(&key, &(balance + amount));
    }

    pub fn withdraw(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        let key = WnativeKey::Balance(from);
        let balance: i128 = env.storage().instance().get(&key).unwrap_or(0);
        assert!(balance >= amount, "wnative: balance too low");
        env.storage().instance().set(&key, &(balance - amount));

        let paid_key = WnativeKey::NativePaid(to);
        let paid: i128 = env.storage().instance().get(&paid_key).unwrap_or(0);
        env.storage().instance().set(&paid_key, &(paid + amount));
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        env.storage()
            .instance()
            .get(&WnativeKey::Balance(id))
            .unwrap_or(0)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        let from_key = WnativeKey::Balance(from);
        let from_balance: i128 = env.storage().instance().get(&from_key).unwrap_or(0);
        assert!(from_balance >= amount, "wnative: balance too low");
        env.storage().instance().set(&from_key, &(from_balance - amount));

        let to_key = WnativeKey::Balance(to);
        let to_balance: i128 = env.storage().instance().get(&to_key).unwrap_or(0);
        env.storage().instance().set(&to_key, &(to_balance + amount));
    }

    /// Native amount paid out to `to` by `withdraw`, for assertions
    pub fn native_paid(env: Env, to: Address) -> i128 {
        env.storage()
            .instance()
            .get(&WnativeKey::NativePaid(to))
            .unwrap_or(0)
    }
}

// ============================================================
// SETUP HELPERS
// ============================================================

pub struct Rig<'a> {
    pub router: MakoRouterClient<'a>,
    pub factory: TestFactoryClient<'a>,
    pub wnative: MockWnativeClient<'a>,
}

pub fn setup(env: &Env) -> Rig<'_> {
    let factory_id = env.register(TestFactory, ());
    let wnative_id = env.register(MockWnative, ());
    let router_id = env.register(MakoRouter, ());

    let router = MakoRouterClient::new(env, &router_id);
    router.initialize(&factory_id, &wnative_id);

    Rig {
        router,
        factory: TestFactoryClient::new(env, &factory_id),
        wnative: MockWnativeClient::new(env, &wnative_id),
    }
}

/// Register a pair for (a, b), initialize it against the test factory, and
/// record it in the registry.
pub fn make_pair<'a>(
    env: &'a Env,
    rig: &Rig<'a>,
    token_a: &Address,
    token_b: &Address,
) -> MakoPairClient<'a> {
    let pair_id = env.register(MakoPair, ());
    let pair = MakoPairClient::new(env, &pair_id);
    pair.initialize(&rig.factory.address, token_a, token_b);
    rig.factory.set_pair(token_a, token_b, &pair_id);
    pair
}

/// Deposit both tokens into a pair and mint the first shares to `provider`
pub fn seed_pair(
    env: &Env,
    pair: &MakoPairClient,
    amount_0: i128,
    amount_1: i128,
    provider: &Address,
) -> u128 {
    let token_0 = pair.token_0();
    let token_1 = pair.token_1();
    mint_tokens(env, &token_0, &pair.address, amount_0);
    mint_tokens(env, &token_1, &pair.address, amount_1);
    pair.mint(provider, provider)
}

pub fn create_token(env: &Env) -> Address {
    let admin = Address::generate(env);
    env.register_stellar_asset_contract_v2(admin).address()
}

pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    StellarAssetClient::new(env, token).mint(to, &amount);
}

pub fn token_balance(env: &Env, token: &Address, of: &Address) -> i128 {
    soroban_sdk::token::Client::new(env, token).balance(of)
}
