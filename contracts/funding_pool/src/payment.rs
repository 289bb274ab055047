use crate::error::Error;
use soroban_sdk::{log, token, Address, Env};

/// Payment-asset ledger as seen from the pool.
///
/// Every rejected ledger call is reported as `Error::LedgerFailure`, which
/// aborts the surrounding invocation.
pub struct PaymentLedger<'a> {
    env: &'a Env,
    asset: &'a Address,
    client: token::Client<'a>,
}

impl<'a> PaymentLedger<'a> {
    pub fn new(env: &'a Env, asset: &'a Address) -> Self {
        Self {
            env,
            asset,
            client: token::Client::new(env, asset),
        }
    }

    pub fn decimals(&self) -> Result<u32, Error> {
        match self.client.try_decimals() {
            Ok(Ok(decimals)) => Ok(decimals),
            _ => {
                log!(self.env, "decimals query rejected by {}", self.asset.clone());
                Err(Error::LedgerFailure)
            }
        }
    }

    /// Pull `amount` from `from` into the pool using the allowance granted to the pool
    pub fn pull(&self, from: &Address, amount: i128) -> Result<(), Error> {
        let pool = self.env.current_contract_address();
        match self.client.try_transfer_from(&pool, from, &pool, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(self.env, "transfer_from rejected: from={} amount={}", from.clone(), amount);
                Err(Error::LedgerFailure)
            }
        }
    }

    /// Pay `amount` from the pool's own holdings to `to`
    pub fn push(&self, to: &Address, amount: i128) -> Result<(), Error> {
        let pool = self.env.current_contract_address();
        match self.client.try_transfer(&pool, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(self.env, "transfer rejected: to={} amount={}", to.clone(), amount);
                Err(Error::LedgerFailure)
            }
        }
    }
}
