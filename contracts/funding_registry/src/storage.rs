use crate::error::Error;
use soroban_sdk::{contracttype, Address, BytesN, Env};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    PoolWasmHash,
    Operator(Address),
    PoolCount,
    Pool(u32), // deployment index
}

pub struct Storage;

impl Storage {
    // Owner
    pub fn has_owner(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Owner)
    }

    pub fn get_owner(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_owner(env: &Env, owner: &Address) {
        env.storage().instance().set(&DataKey::Owner, owner);
    }

    // Pool code
    pub fn get_pool_wasm_hash(env: &Env) -> Result<BytesN<32>, Error> {
        env.storage()
            .instance()
            .get(&DataKey::PoolWasmHash)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_pool_wasm_hash(env: &Env, hash: &BytesN<32>) {
        env.storage().instance().set(&DataKey::PoolWasmHash, hash);
    }

    // Operators
    pub fn is_operator(env: &Env, address: &Address) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::Operator(address.clone()))
            .unwrap_or(false)
    }

    pub fn set_operator(env: &Env, address: &Address, enabled: bool) {
        let key = DataKey::Operator(address.clone());
        if enabled {
            env.storage().persistent().set(&key, &true);
        } else {
            env.storage().persistent().remove(&key);
        }
    }

    // Deployed pools
    pub fn pool_count(env: &Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::PoolCount)
            .unwrap_or(0)
    }

    pub fn get_pool(env: &Env, index: u32) -> Option<Address> {
        env.storage().persistent().get(&DataKey::Pool(index))
    }

    /// Record a pool under the next index and return that index
    pub fn add_pool(env: &Env, pool: &Address) -> u32 {
        let index = Self::pool_count(env);
        env.storage().persistent().set(&DataKey::Pool(index), pool);
        env.storage()
            .instance()
            .set(&DataKey::PoolCount, &(index + 1));
        index
    }
}
