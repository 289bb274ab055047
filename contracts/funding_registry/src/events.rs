use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundingCreatedEvent {
    pub index: u32,
    pub pool: Address,
    pub creator: Address,
    pub total_supply: i128,
    pub min_amount: i128,
    pub name: String,
    pub symbol: String,
    pub payment_asset: Address,
    pub alt_asset: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OperatorEvent {
    pub operator: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerChangedEvent {
    pub previous: Address,
    pub owner: Address,
}
