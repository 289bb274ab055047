use crate::error::Error;
use crate::storage::PERCENT_SCALE;

/// Share of `supply` held by `balance`, in parts per million (rounded down)
///
/// Formula: percentage = balance × 1,000,000 / supply
///
/// Example:
/// - balance: 500, supply: 39,500
/// - percentage: 500,000,000 / 39,500 = 12,658 (1.2658%)
pub fn calculate_percentage(balance: i128, supply: i128) -> Result<i128, Error> {
    if supply <= 0 || balance <= 0 {
        return Err(Error::InvalidState);
    }

    balance
        .checked_mul(PERCENT_SCALE)
        .ok_or(Error::Overflow)?
        .checked_div(supply)
        .ok_or(Error::InvalidState)
}

/// Reward owed for a parts-per-million share of all deposited rewards
///
/// Formula: reward = rewards_total × percentage / 1,000,000
///
/// Example:
/// - rewards_total: 400,000, percentage: 40,000 (4%)
/// - reward: 16,000
pub fn calculate_reward(rewards_total: i128, percentage: i128) -> Result<i128, Error> {
    rewards_total
        .checked_mul(percentage)
        .ok_or(Error::Overflow)?
        .checked_div(PERCENT_SCALE)
        .ok_or(Error::Overflow)
}

/// Unsold allocation; reads zero once claims have burned supply below the sold mark
pub fn calculate_remaining(total_supply: i128, tokens_sold: i128) -> i128 {
    total_supply.saturating_sub(tokens_sold).max(0)
}
