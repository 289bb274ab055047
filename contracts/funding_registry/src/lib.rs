#![no_std]

mod error;
mod events;
mod storage;

#[cfg(all(test, pool_wasm))]
mod test_deploy;

pub use error::Error;
pub use events::{FundingCreatedEvent, OperatorEvent, OwnerChangedEvent};

use storage::Storage;

use soroban_sdk::{
    contract, contractimpl, log, vec, Address, BytesN, Env, IntoVal, String, Symbol, Vec,
};

#[contract]
pub struct FundingRegistry;

#[contractimpl]
impl FundingRegistry {
    // ============================================
    // INITIALIZATION & ADMIN
    // ============================================

    /// Initialize the registry; the owner becomes the first operator
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Registry already initialized
    pub fn initialize(env: Env, owner: Address, pool_wasm_hash: BytesN<32>) -> Result<(), Error> {
        if Storage::has_owner(&env) {
            return Err(Error::AlreadyInitialized);
        }

        owner.require_auth();

        Storage::set_owner(&env, &owner);
        Storage::set_pool_wasm_hash(&env, &pool_wasm_hash);
        Storage::set_operator(&env, &owner, true);

        env.events().publish(
            (Symbol::new(&env, "operator_added"), owner.clone()),
            OperatorEvent { operator: owner },
        );

        Ok(())
    }

    /// Authorize an operator to create pools
    ///
    /// # Errors
    /// - `NotInitialized`: Registry not initialized
    /// - `NotTheOwner`: Caller is not the owner
    pub fn add_operator(env: Env, caller: Address, operator: Address) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;

        Storage::set_operator(&env, &operator, true);

        env.events().publish(
            (Symbol::new(&env, "operator_added"), operator.clone()),
            OperatorEvent { operator },
        );

        Ok(())
    }

    /// Revoke an operator
    ///
    /// # Errors
    /// - `NotInitialized`: Registry not initialized
    /// - `NotTheOwner`: Caller is not the owner
    pub fn remove_operator(env: Env, caller: Address, operator: Address) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;

        Storage::set_operator(&env, &operator, false);

        env.events().publish(
            (Symbol::new(&env, "operator_removed"), operator.clone()),
            OperatorEvent { operator },
        );

        Ok(())
    }

    /// Hand the registry to a new owner, who is also made an operator
    ///
    /// # Errors
    /// - `NotInitialized`: Registry not initialized
    /// - `NotTheOwner`: Caller is not the owner
    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;

        Storage::set_owner(&env, &new_owner);
        Storage::set_operator(&env, &new_owner, true);

        env.events().publish(
            (Symbol::new(&env, "owner_changed"), new_owner.clone()),
            OwnerChangedEvent {
                previous: caller,
                owner: new_owner,
            },
        );

        Ok(())
    }

    /// Replace the pool code used by later deployments
    ///
    /// # Errors
    /// - `NotInitialized`: Registry not initialized
    /// - `NotTheOwner`: Caller is not the owner
    pub fn set_pool_wasm_hash(env: Env, caller: Address, hash: BytesN<32>) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        Storage::set_pool_wasm_hash(&env, &hash);
        Ok(())
    }

    // ============================================
    // POOL CREATION
    // ============================================

    /// Deploy and initialize a new funding pool owned by `caller`
    ///
    /// Pool initialization errors abort the whole call unchanged.
    ///
    /// # Errors
    /// - `NotInitialized`: Registry not initialized
    /// - `NotAnOperator`: Caller is not an operator
    pub fn create_funding_contract(
        env: Env,
        caller: Address,
        total_supply: i128,
        min_amount: i128,
        name: String,
        symbol: String,
        payment_asset: Address,
        alt_asset: Address,
    ) -> Result<Address, Error> {
        caller.require_auth();

        let wasm_hash = Storage::get_pool_wasm_hash(&env)?;

        if !Storage::is_operator(&env, &caller) {
            log!(&env, "pool creation refused for {}", caller.clone());
            return Err(Error::NotAnOperator);
        }

        let index = Storage::pool_count(&env);

        let pool = env
            .deployer()
            .with_current_contract(Self::pool_salt(&env, index))
            .deploy_v2(wasm_hash, ());

        env.invoke_contract::<()>(
            &pool,
            &Symbol::new(&env, "initialize"),
            vec![
                &env,
                caller.into_val(&env),
                total_supply.into_val(&env),
                min_amount.into_val(&env),
                name.into_val(&env),
                symbol.into_val(&env),
                payment_asset.into_val(&env),
                alt_asset.into_val(&env),
            ],
        );

        Storage::add_pool(&env, &pool);

        env.events().publish(
            (Symbol::new(&env, "funding_created"), caller.clone()),
            FundingCreatedEvent {
                index,
                pool: pool.clone(),
                creator: caller,
                total_supply,
                min_amount,
                name,
                symbol,
                payment_asset,
                alt_asset,
            },
        );

        Ok(pool)
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    pub fn owner(env: Env) -> Result<Address, Error> {
        Storage::get_owner(&env)
    }

    pub fn is_operator(env: Env, address: Address) -> bool {
        Storage::is_operator(&env, &address)
    }

    /// Every pool created so far, in creation order
    pub fn get_pools(env: Env) -> Vec<Address> {
        let mut pools = Vec::new(&env);
        for index in 0..Storage::pool_count(&env) {
            if let Some(pool) = Storage::get_pool(&env, index) {
                pools.push_back(pool);
            }
        }
        pools
    }

    pub fn pool_count(env: Env) -> u32 {
        Storage::pool_count(&env)
    }

    pub fn get_pool(env: Env, index: u32) -> Result<Address, Error> {
        Storage::get_pool(&env, index).ok_or(Error::PoolNotFound)
    }

    pub fn get_pool_wasm_hash(env: Env) -> Result<BytesN<32>, Error> {
        Storage::get_pool_wasm_hash(&env)
    }

    // ============================================
    // INTERNAL HELPERS
    // ============================================

    fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();

        let owner = Storage::get_owner(env)?;
        if *caller != owner {
            log!(env, "owner check failed for {}", caller.clone());
            return Err(Error::NotTheOwner);
        }
        Ok(())
    }

    /// Deterministic deployment salt: big-endian pool index in the first four bytes
    fn pool_salt(env: &Env, index: u32) -> BytesN<32> {
        let mut salt = [0u8; 32];
        salt[..4].copy_from_slice(&index.to_be_bytes());
        BytesN::from_array(env, &salt)
    }
}
