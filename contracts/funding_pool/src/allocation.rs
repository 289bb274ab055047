//! Ledger of the allocation unit sold by the pool.
//!
//! The pool is the only minter and burner; holders move units with the
//! usual transfer / allowance calls exposed on the contract.

use crate::error::Error;
use crate::events::{ApproveEvent, BurnEvent, MintEvent, TransferEvent};
use crate::storage::{AllowanceValue, Storage};
use soroban_sdk::{Address, Env, Symbol};

pub struct Allocation;

impl Allocation {
    /// Credit freshly created units to `to`
    pub fn mint(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
        let new_balance = Storage::get_balance(env, to)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        Storage::set_balance(env, to, new_balance);

        env.events().publish(
            (Symbol::new(env, "mint"), to.clone()),
            MintEvent {
                to: to.clone(),
                amount,
            },
        );
        Ok(())
    }

    /// Destroy `amount` units held by `from`
    pub fn burn(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
        let balance = Storage::get_balance(env, from);
        if balance < amount {
            return Err(Error::InsufficientBalance);
        }
        Storage::set_balance(env, from, balance - amount);

        env.events().publish(
            (Symbol::new(env, "burn"), from.clone()),
            BurnEvent {
                from: from.clone(),
                amount,
            },
        );
        Ok(())
    }

    pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }

        let from_balance = Storage::get_balance(env, from);
        if from_balance < amount {
            return Err(Error::InsufficientBalance);
        }

        if from != to {
            let to_balance = Storage::get_balance(env, to)
                .checked_add(amount)
                .ok_or(Error::Overflow)?;
            Storage::set_balance(env, from, from_balance - amount);
            Storage::set_balance(env, to, to_balance);
        }

        env.events().publish(
            (Symbol::new(env, "transfer"), from.clone(), to.clone()),
            TransferEvent {
                from: from.clone(),
                to: to.clone(),
                amount,
            },
        );
        Ok(())
    }

    pub fn approve(
        env: &Env,
        from: &Address,
        spender: &Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), Error> {
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }
        if amount > 0 && expiration_ledger < env.ledger().sequence() {
            return Err(Error::InvalidExpiration);
        }

        Storage::set_allowance(
            env,
            from,
            spender,
            &AllowanceValue {
                amount,
                expiration_ledger,
            },
        );

        env.events().publish(
            (Symbol::new(env, "approve"), from.clone(), spender.clone()),
            ApproveEvent {
                from: from.clone(),
                spender: spender.clone(),
                amount,
                expiration_ledger,
            },
        );
        Ok(())
    }

    /// Consume `amount` of the allowance `from` granted to `spender`
    pub fn spend_allowance(
        env: &Env,
        from: &Address,
        spender: &Address,
        amount: i128,
    ) -> Result<(), Error> {
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }

        let allowance = Storage::get_allowance(env, from, spender);
        if allowance.amount < amount {
            return Err(Error::InsufficientAllowance);
        }

        if amount > 0 {
            Storage::set_allowance(
                env,
                from,
                spender,
                &AllowanceValue {
                    amount: allowance.amount - amount,
                    expiration_ledger: allowance.expiration_ledger,
                },
            );
        }
        Ok(())
    }
}
