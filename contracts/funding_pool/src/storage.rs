use crate::error::Error;
use soroban_sdk::{contracttype, Address, Env, String};

// Constants
pub const PERCENT_SCALE: i128 = 1_000_000; // parts per million

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    /// Principal allowed to deposit, withdraw and shrink supply
    pub owner: Address,
    /// Smallest amount accepted by a single sale
    pub min_investment: i128,
    /// Primary payment asset, also the asset rewards are paid in
    pub payment_asset: Address,
    /// Secondary payment asset (may equal the primary one)
    pub alt_asset: Address,
    pub name: String,
    pub symbol: String,
    /// Allocation decimals, taken from the payment asset
    pub decimals: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolState {
    /// Allocation units in existence
    pub total_supply: i128,
    /// Allocation units sold, never decreases
    pub tokens_sold: i128,
    /// Reward funds deposited so far, never decreases
    pub rewards_total: i128,
}

/// Read-only snapshot returned by `get_pool_info`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolInfo {
    pub owner: Address,
    pub total_supply: i128,
    pub tokens_sold: i128,
    pub remaining: i128,
    pub min_investment: i128,
    pub rewards_total: i128,
    pub payment_asset: Address,
    pub alt_asset: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    State,
    Balance(Address),
    Allowance(Address, Address),  // (from, spender)
    Investment(Address, Address), // (contributor, asset)
}

pub struct Storage;

impl Storage {
    // Config
    pub fn has_config(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Config)
    }

    pub fn get_config(env: &Env) -> Result<PoolConfig, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_config(env: &Env, config: &PoolConfig) {
        env.storage().instance().set(&DataKey::Config, config);
    }

    // Supply / sale / reward counters
    pub fn get_state(env: &Env) -> Result<PoolState, Error> {
        env.storage()
            .instance()
            .get(&DataKey::State)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_state(env: &Env, state: &PoolState) {
        env.storage().instance().set(&DataKey::State, state);
    }

    // Allocation balances
    pub fn get_balance(env: &Env, holder: &Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::Balance(holder.clone()))
            .unwrap_or(0)
    }

    pub fn set_balance(env: &Env, holder: &Address, amount: i128) {
        let key = DataKey::Balance(holder.clone());
        if amount == 0 {
            env.storage().persistent().remove(&key);
        } else {
            env.storage().persistent().set(&key, &amount);
        }
    }

    // Allocation allowances
    pub fn get_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
        let key = DataKey::Allowance(from.clone(), spender.clone());
        match env.storage().temporary().get::<DataKey, AllowanceValue>(&key) {
            Some(allowance) if allowance.expiration_ledger >= env.ledger().sequence() => allowance,
            Some(allowance) => AllowanceValue {
                amount: 0,
                expiration_ledger: allowance.expiration_ledger,
            },
            None => AllowanceValue {
                amount: 0,
                expiration_ledger: 0,
            },
        }
    }

    pub fn set_allowance(env: &Env, from: &Address, spender: &Address, allowance: &AllowanceValue) {
        let key = DataKey::Allowance(from.clone(), spender.clone());
        env.storage().temporary().set(&key, allowance);

        if allowance.amount > 0 {
            let live_for = allowance
                .expiration_ledger
                .saturating_sub(env.ledger().sequence());
            env.storage().temporary().extend_ttl(&key, live_for, live_for);
        }
    }

    // Investments
    pub fn get_investment(env: &Env, contributor: &Address, asset: &Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::Investment(contributor.clone(), asset.clone()))
            .unwrap_or(0)
    }

    pub fn set_investment(env: &Env, contributor: &Address, asset: &Address, amount: i128) {
        env.storage().persistent().set(
            &DataKey::Investment(contributor.clone(), asset.clone()),
            &amount,
        );
    }
}
