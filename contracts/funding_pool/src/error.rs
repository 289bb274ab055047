use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-9)
    // ============================================
    /// Pool already initialized
    AlreadyInitialized = 1,
    /// Pool not initialized
    NotInitialized = 2,
    /// Supply must be positive and 0 < min_amount <= supply
    InvalidConfig = 3,
    /// Accepted payment assets report different decimals
    DecimalsMismatch = 4,

    // ============================================
    // AUTHORIZATION ERRORS (10-19)
    // ============================================
    /// Caller is not the pool owner
    NotTheOwner = 10,

    // ============================================
    // SALE ERRORS (20-29)
    // ============================================
    /// Sale amount is under the configured minimum investment
    AmountBelowMin = 20,
    /// Sale amount exceeds the unsold allocation
    AmountExceedsAvailable = 21,
    /// Asset is not one of the pool's payment assets
    AssetNotAccepted = 22,

    // ============================================
    // REWARD ERRORS (30-39)
    // ============================================
    /// Percentage queried against zero supply or zero balance
    InvalidState = 30,
    /// No rewards have been deposited yet
    ClaimIsNotAvailable = 31,
    /// Claimant holds no allocation units
    UserZeroBalance = 32,

    // ============================================
    // SUPPLY ERRORS (40-49)
    // ============================================
    /// Supply reduction would drop total supply below tokens sold
    NewTotalSupplyBelowSold = 40,

    // ============================================
    // AMOUNT/BALANCE ERRORS (50-59)
    // ============================================
    /// Amount must be positive (non-negative for approvals)
    InvalidAmount = 50,
    /// Holder doesn't have enough allocation units
    InsufficientBalance = 51,
    /// Spender allowance is missing, expired or too small
    InsufficientAllowance = 52,
    /// Allowance expiration ledger is already in the past
    InvalidExpiration = 53,
    /// Checked arithmetic overflowed
    Overflow = 54,

    // ============================================
    // LEDGER ERRORS (60-69)
    // ============================================
    /// Payment asset ledger rejected a transfer
    LedgerFailure = 60,
}
