use soroban_sdk::{ contracttype, Address };

use crate::storage::Config;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigResponse {
    pub config: Config,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleResponse {
    pub auction_id: u64,
    pub final_price: i128,
    pub buyer: Address,
    /// Excess payment returned to the buyer
    pub refund: i128,
    pub seller_proceeds: i128,
    /// Retained by the registry owner
    pub fee: i128,
}
