use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-5)
    // ============================================
    /// Registry already initialized
    AlreadyInitialized = 1,
    /// Registry not initialized
    NotInitialized = 2,

    // ============================================
    // AUTHORIZATION ERRORS (10-15)
    // ============================================
    /// Caller is not the registry owner
    NotTheOwner = 10,
    /// Caller is not a registered operator
    NotAnOperator = 11,

    // ============================================
    // POOL ERRORS (20-29)
    // ============================================
    /// No pool recorded at this index
    PoolNotFound = 20,
}
