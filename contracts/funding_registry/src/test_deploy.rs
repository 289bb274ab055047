//! Deployment tests against the compiled pool contract.

use super::*;
use soroban_sdk::{
    testutils::{Address as _, Events},
    token, Address, Env, InvokeError, String, Symbol, TryFromVal,
};

mod funding_pool {
    soroban_sdk::contractimport!(
        file = "../../target/wasm32-unknown-unknown/release/funding_pool.wasm"
    );
}

const EXPIRATION: u32 = 1_000;

struct TestContext {
    env: Env,
    owner: Address,
    registry_id: Address,
    usdx: Address,
}

impl TestContext {
    fn registry(&self) -> FundingRegistryClient<'_> {
        FundingRegistryClient::new(&self.env, &self.registry_id)
    }

    fn create_pool(&self, operator: &Address, total_supply: i128, min_amount: i128) -> Address {
        self.registry().create_funding_contract(
            operator,
            &total_supply,
            &min_amount,
            &String::from_str(&self.env, "Test Funding"),
            &String::from_str(&self.env, "TEST"),
            &self.usdx,
            &self.usdx,
        )
    }
}

fn setup() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let usdx = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let pool_wasm_hash = env.deployer().upload_contract_wasm(funding_pool::WASM);
    let registry_id = env.register_contract(None, FundingRegistry);
    FundingRegistryClient::new(&env, &registry_id).initialize(&owner, &pool_wasm_hash);

    TestContext {
        env,
        owner,
        registry_id,
        usdx,
    }
}

#[test]
fn test_operator_creates_pool() {
    let ctx = setup();
    let registry = ctx.registry();

    let pool_id = ctx.create_pool(&ctx.owner, 1_000_000, 100);

    let (contract, topics, data) = ctx.env.events().all().last().unwrap();
    assert_eq!(contract, ctx.registry_id);
    let name = Symbol::try_from_val(&ctx.env, &topics.get(0).unwrap()).unwrap();
    assert_eq!(name, Symbol::new(&ctx.env, "funding_created"));
    let event = FundingCreatedEvent::try_from_val(&ctx.env, &data).unwrap();
    assert_eq!(event.pool, pool_id);
    assert_eq!(event.creator, ctx.owner);
    assert_eq!(event.index, 0);

    assert_eq!(registry.pool_count(), 1);
    assert_eq!(registry.get_pool(&0), pool_id);

    let pool = funding_pool::Client::new(&ctx.env, &pool_id);
    assert_eq!(pool.owner(), ctx.owner);
    assert_eq!(pool.total_supply(), 1_000_000);
    assert_eq!(pool.balance(&pool_id), 1_000_000);
    assert_eq!(pool.get_min_investment(), 100);
}

#[test]
fn test_added_operator_owns_created_pool() {
    let ctx = setup();
    let registry = ctx.registry();
    let operator = Address::generate(&ctx.env);

    registry.add_operator(&ctx.owner, &operator);
    let first = ctx.create_pool(&operator, 1_000, 10);
    let second = ctx.create_pool(&ctx.owner, 2_000, 10);

    assert_ne!(first, second);
    assert_eq!(registry.get_pools(), soroban_sdk::vec![&ctx.env, first.clone(), second]);
    assert_eq!(funding_pool::Client::new(&ctx.env, &first).owner(), operator);
}

#[test]
fn test_pool_validation_failure_aborts_creation() {
    let ctx = setup();
    let registry = ctx.registry();

    let result = registry.try_create_funding_contract(
        &ctx.owner,
        &1_000,
        &0,
        &String::from_str(&ctx.env, "Test Funding"),
        &String::from_str(&ctx.env, "TEST"),
        &ctx.usdx,
        &ctx.usdx,
    );
    // The pool's own InvalidConfig code comes back untouched
    assert_eq!(result, Err(Err(InvokeError::Contract(3))));
    assert_eq!(registry.pool_count(), 0);
}

#[test]
fn test_created_pool_runs_sale_and_claim() {
    let ctx = setup();
    let pool_id = ctx.create_pool(&ctx.owner, 300_000, 500);
    let pool = funding_pool::Client::new(&ctx.env, &pool_id);
    let usdx = token::Client::new(&ctx.env, &ctx.usdx);
    let user = Address::generate(&ctx.env);

    let minter = token::StellarAssetClient::new(&ctx.env, &ctx.usdx);
    minter.mint(&user, &12_000);
    minter.mint(&ctx.owner, &400_000);

    usdx.approve(&user, &pool_id, &12_000, &EXPIRATION);
    pool.init_sale_usdt(&user, &12_000, &ctx.usdx);

    usdx.approve(&ctx.owner, &pool_id, &400_000, &EXPIRATION);
    pool.deposit_funds(&ctx.owner, &ctx.usdx, &400_000);

    assert_eq!(pool.claim(&user), 16_000);
    assert_eq!(usdx.balance(&user), 16_000);
    assert_eq!(pool.total_supply(), 288_000);
}
