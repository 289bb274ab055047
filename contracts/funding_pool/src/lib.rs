#![no_std]

mod allocation;
mod error;
mod events;
mod math;
mod payment;
mod storage;


pub use error::Error;
pub use storage::{PoolConfig, PoolInfo, PoolState};

use allocation::Allocation;
use events::*;
use math::{calculate_percentage, calculate_remaining, calculate_reward};
use payment::PaymentLedger;
use storage::Storage;

use soroban_sdk::{contract, contractimpl, log, vec, Address, Env, String, Symbol, Vec};

#[contract]
pub struct FundingPool;

#[contractimpl]
impl FundingPool {
    // ============================================
    // INITIALIZATION
    // ============================================

    /// Initialize the pool and mint the whole allocation into the pool itself
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Pool already initialized
    /// - `InvalidConfig`: Supply not positive, or min_amount outside (0, total_supply]
    /// - `DecimalsMismatch`: Payment assets use different precision
    /// - `LedgerFailure`: A payment asset did not answer the decimals query
    pub fn initialize(
        env: Env,
        owner: Address,
        total_supply: i128,
        min_amount: i128,
        name: String,
        symbol: String,
        payment_asset: Address,
        alt_asset: Address,
    ) -> Result<(), Error> {
        if Storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }

        owner.require_auth();

        if total_supply <= 0 || min_amount <= 0 || min_amount > total_supply {
            return Err(Error::InvalidConfig);
        }

        let decimals = PaymentLedger::new(&env, &payment_asset).decimals()?;
        if alt_asset != payment_asset
            && PaymentLedger::new(&env, &alt_asset).decimals()? != decimals
        {
            return Err(Error::DecimalsMismatch);
        }

        Storage::set_config(
            &env,
            &PoolConfig {
                owner,
                min_investment: min_amount,
                payment_asset,
                alt_asset,
                name,
                symbol,
                decimals,
            },
        );
        Storage::set_state(
            &env,
            &PoolState {
                total_supply,
                tokens_sold: 0,
                rewards_total: 0,
            },
        );

        Allocation::mint(&env, &env.current_contract_address(), total_supply)
    }

    // ============================================
    // SALE
    // ============================================

    /// Buy allocation units 1:1 with an accepted payment asset
    ///
    /// The contributor must have approved the pool for `amount` on `asset`.
    ///
    /// # Errors
    /// - `NotInitialized`: Pool not initialized
    /// - `AssetNotAccepted`: `asset` is not a payment asset of this pool
    /// - `AmountBelowMin`: `amount` under the minimum investment
    /// - `AmountExceedsAvailable`: `amount` over the unsold allocation
    /// - `LedgerFailure`: Payment ledger refused the pull (balance or allowance)
    pub fn init_sale_usdt(
        env: Env,
        contributor: Address,
        amount: i128,
        asset: Address,
    ) -> Result<(), Error> {
        contributor.require_auth();

        let config = Storage::get_config(&env)?;
        let mut state = Storage::get_state(&env)?;

        if asset != config.payment_asset && asset != config.alt_asset {
            return Err(Error::AssetNotAccepted);
        }

        if amount < config.min_investment {
            return Err(Error::AmountBelowMin);
        }

        if amount > calculate_remaining(state.total_supply, state.tokens_sold) {
            return Err(Error::AmountExceedsAvailable);
        }

        PaymentLedger::new(&env, &asset).pull(&contributor, amount)?;

        Allocation::transfer(&env, &env.current_contract_address(), &contributor, amount)?;

        state.tokens_sold = state
            .tokens_sold
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        Storage::set_state(&env, &state);

        let invested = Storage::get_investment(&env, &contributor, &asset)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        Storage::set_investment(&env, &contributor, &asset, invested);

        env.events().publish(
            (Symbol::new(&env, "sale"), contributor.clone()),
            SaleEvent {
                contributor,
                asset,
                amount,
                tokens_sold: state.tokens_sold,
            },
        );

        Ok(())
    }

    // ============================================
    // OWNER OPERATIONS
    // ============================================

    /// Deposit reward funds (owner only)
    ///
    /// # Errors
    /// - `NotTheOwner`: Caller is not the owner
    /// - `InvalidAmount`: Amount must be positive
    /// - `AssetNotAccepted`: Rewards are paid in the primary payment asset only
    /// - `LedgerFailure`: Payment ledger refused the pull
    pub fn deposit_funds(
        env: Env,
        caller: Address,
        asset: Address,
        amount: i128,
    ) -> Result<(), Error> {
        let config = Self::require_owner(&env, &caller)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        if asset != config.payment_asset {
            return Err(Error::AssetNotAccepted);
        }

        PaymentLedger::new(&env, &asset).pull(&caller, amount)?;

        let mut state = Storage::get_state(&env)?;
        state.rewards_total = state
            .rewards_total
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        Storage::set_state(&env, &state);

        env.events().publish(
            (Symbol::new(&env, "deposit"), caller),
            DepositEvent {
                asset,
                amount,
                rewards_total: state.rewards_total,
            },
        );

        Ok(())
    }

    /// Shrink the allocation by burning unsold units (owner only)
    ///
    /// # Errors
    /// - `NotTheOwner`: Caller is not the owner
    /// - `InvalidAmount`: Amount must be positive
    /// - `NewTotalSupplyBelowSold`: Supply would drop below tokens sold
    pub fn decrease_tokens_total(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let mut state = Storage::get_state(&env)?;
        let new_supply = state
            .total_supply
            .checked_sub(amount)
            .ok_or(Error::Overflow)?;
        if new_supply < state.tokens_sold {
            return Err(Error::NewTotalSupplyBelowSold);
        }

        Allocation::burn(&env, &env.current_contract_address(), amount)?;

        state.total_supply = new_supply;
        Storage::set_state(&env, &state);

        env.events().publish(
            (Symbol::new(&env, "supply_decreased"), caller),
            SupplyDecreasedEvent {
                amount,
                total_supply: new_supply,
            },
        );

        Ok(())
    }

    /// Sweep a held asset to the owner (owner only)
    ///
    /// # Errors
    /// - `NotTheOwner`: Caller is not the owner
    /// - `InvalidAmount`: Amount must be positive
    /// - `LedgerFailure`: Pool doesn't hold enough of `asset`
    pub fn withdraw(env: Env, caller: Address, asset: Address, amount: i128) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        PaymentLedger::new(&env, &asset).push(&caller, amount)?;

        env.events().publish(
            (Symbol::new(&env, "withdraw"), caller.clone()),
            WithdrawEvent {
                asset,
                to: caller,
                amount,
            },
        );

        Ok(())
    }

    // ============================================
    // REWARDS
    // ============================================

    /// Share of the current supply held by `contributor`, in parts per million
    ///
    /// # Errors
    /// - `NotInitialized`: Pool not initialized
    /// - `InvalidState`: Supply or contributor balance is zero
    pub fn get_percentage(env: Env, contributor: Address) -> Result<i128, Error> {
        let state = Storage::get_state(&env)?;
        calculate_percentage(Storage::get_balance(&env, &contributor), state.total_supply)
    }

    /// Burn the contributor's whole balance for a share of all deposited rewards
    ///
    /// The share is taken against the supply at claim time, so a claim
    /// shrinks the denominator for every later claimant.
    ///
    /// # Errors
    /// - `NotInitialized`: Pool not initialized
    /// - `ClaimIsNotAvailable`: No rewards deposited yet
    /// - `UserZeroBalance`: Contributor holds no allocation
    /// - `LedgerFailure`: Pool can't pay the reward
    pub fn claim(env: Env, contributor: Address) -> Result<i128, Error> {
        contributor.require_auth();

        let config = Storage::get_config(&env)?;
        let mut state = Storage::get_state(&env)?;

        if state.rewards_total == 0 {
            return Err(Error::ClaimIsNotAvailable);
        }

        let balance = Storage::get_balance(&env, &contributor);
        if balance <= 0 {
            return Err(Error::UserZeroBalance);
        }

        let percentage = calculate_percentage(balance, state.total_supply)?;
        let reward = calculate_reward(state.rewards_total, percentage)?;

        Allocation::burn(&env, &contributor, balance)?;
        state.total_supply = state
            .total_supply
            .checked_sub(balance)
            .ok_or(Error::Overflow)?;
        Storage::set_state(&env, &state);

        if reward > 0 {
            PaymentLedger::new(&env, &config.payment_asset).push(&contributor, reward)?;
        }

        env.events().publish(
            (Symbol::new(&env, "claim"), contributor.clone()),
            ClaimEvent {
                contributor,
                burned: balance,
                percentage,
                reward,
            },
        );

        Ok(reward)
    }

    // ============================================
    // ALLOCATION LEDGER
    // ============================================

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        Storage::get_allowance(&env, &from, &spender).amount
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), Error> {
        from.require_auth();
        Allocation::approve(&env, &from, &spender, amount, expiration_ledger)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        Storage::get_balance(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        Allocation::transfer(&env, &from, &to, amount)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        spender.require_auth();
        Allocation::spend_allowance(&env, &from, &spender, amount)?;
        Allocation::transfer(&env, &from, &to, amount)
    }

    pub fn decimals(env: Env) -> Result<u32, Error> {
        Ok(Storage::get_config(&env)?.decimals)
    }

    pub fn name(env: Env) -> Result<String, Error> {
        Ok(Storage::get_config(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, Error> {
        Ok(Storage::get_config(&env)?.symbol)
    }

    pub fn total_supply(env: Env) -> Result<i128, Error> {
        Ok(Storage::get_state(&env)?.total_supply)
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    /// Unsold allocation (`total_supply - tokens_sold`, never negative)
    pub fn get_remain_tokens_amount(env: Env) -> Result<i128, Error> {
        let state = Storage::get_state(&env)?;
        Ok(calculate_remaining(state.total_supply, state.tokens_sold))
    }

    pub fn get_tokens_sold(env: Env) -> Result<i128, Error> {
        Ok(Storage::get_state(&env)?.tokens_sold)
    }

    pub fn get_rewards_total(env: Env) -> Result<i128, Error> {
        Ok(Storage::get_state(&env)?.rewards_total)
    }

    pub fn get_min_investment(env: Env) -> Result<i128, Error> {
        Ok(Storage::get_config(&env)?.min_investment)
    }

    pub fn get_accepted_assets(env: Env) -> Result<Vec<Address>, Error> {
        let config = Storage::get_config(&env)?;
        Ok(vec![&env, config.payment_asset, config.alt_asset])
    }

    /// Cumulative amount `contributor` paid in `asset`
    pub fn get_investment(env: Env, contributor: Address, asset: Address) -> i128 {
        Storage::get_investment(&env, &contributor, &asset)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        Ok(Storage::get_config(&env)?.owner)
    }

    pub fn get_pool_info(env: Env) -> Result<PoolInfo, Error> {
        let config = Storage::get_config(&env)?;
        let state = Storage::get_state(&env)?;
        Ok(PoolInfo {
            owner: config.owner,
            total_supply: state.total_supply,
            tokens_sold: state.tokens_sold,
            remaining: calculate_remaining(state.total_supply, state.tokens_sold),
            min_investment: config.min_investment,
            rewards_total: state.rewards_total,
            payment_asset: config.payment_asset,
            alt_asset: config.alt_asset,
        })
    }

    // ============================================
    // INTERNAL HELPERS
    // ============================================

    fn require_owner(env: &Env, caller: &Address) -> Result<PoolConfig, Error> {
        caller.require_auth();

        let config = Storage::get_config(env)?;
        if *caller != config.owner {
            log!(env, "owner check failed for {}", caller.clone());
            return Err(Error::NotTheOwner);
        }
        Ok(config)
    }
}
