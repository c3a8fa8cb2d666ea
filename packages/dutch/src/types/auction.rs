use soroban_sdk::{contracttype, Address, String};

/// Lifecycle phase of an auction at a given ledger time
#[contracttype]
#[derive(Clone, Copy, PartialEq, Debug, Eq)]
pub enum AuctionStatus {
    /// open for purchase at the current decaying price
    Active,
    /// settled by a buyer, `final_price` and `buyer` are set
    Sold,
    /// `ends_at` has passed without a purchase
    Expired,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    /// Sequential index in the registry, starting at 0
    pub id: u64,
    /// Receives the sale proceeds minus the platform fee
    pub seller: Address,
    pub item: String,
    pub starting_price: i128,
    /// Price decrease per second
    pub discount_rate: i128,
    /// Seconds
    pub duration: u64,
    pub start_at: u64,
    pub ends_at: u64,
    /// Platform fee taken at settlement, fixed when the auction is listed
    pub fee_rate_bps: i64,
    /// 0 until the auction is sold
    pub final_price: i128,
    pub buyer: Option<Address>,
    pub stopped: bool,
}

impl Auction {
    pub fn is_expired(&self, now: u64) -> bool {
        now > self.ends_at
    }

    pub fn status(&self, now: u64) -> AuctionStatus {
        if self.stopped {
            AuctionStatus::Sold
        } else if self.is_expired(now) {
            AuctionStatus::Expired
        } else {
            AuctionStatus::Active
        }
    }
}
