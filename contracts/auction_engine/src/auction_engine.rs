use dutch::{ error::ErrorCode, types::{ Auction, AuctionStatus } };
use soroban_sdk::{ Address, Env, String, Vec };

use crate::{ msg::{ ConfigResponse, SaleResponse }, storage::RegistryState };

pub trait AuctionEngineTrait {
    // ################################################################
    //                             ADMIN
    // ################################################################

    fn initialize(
        env: Env,
        owner: Address,
        payment_token: Address,
        fee_rate_bps: i64,
        default_duration: u64,
        max_duration: u64
    );

    // Allows the owner to change the fee and duration parameters. The owner itself is fixed.
    fn update_config(
        env: Env,
        sender: Address,
        fee_rate_bps: Option<i64>,
        default_duration: Option<u64>,
        max_duration: Option<u64>
    ) -> Result<(), ErrorCode>;

    fn collect_fees(env: Env, sender: Address, to: Address) -> Result<i128, ErrorCode>;

    // ################################################################
    //                             SELLER
    // ################################################################

    fn create_auction(
        env: Env,
        seller: Address,
        starting_price: i128,
        discount_rate: i128,
        item: String,
        duration: u64
    ) -> Result<u64, ErrorCode>;

    // ################################################################
    //                             BUYER
    // ################################################################

    fn buy(
        env: Env,
        buyer: Address,
        auction_id: u64,
        paid_amount: i128
    ) -> Result<SaleResponse, ErrorCode>;

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn get_price_for(env: Env, auction_id: u64) -> Result<i128, ErrorCode>;

    fn query_config(env: Env) -> ConfigResponse;

    fn query_owner(env: Env) -> Address;

    fn query_state(env: Env) -> RegistryState;

    fn query_auction(env: Env, auction_id: u64) -> Result<Auction, ErrorCode>;

    fn query_auction_count(env: Env) -> u64;

    fn query_auctions(env: Env, start: u64, limit: u32) -> Vec<Auction>;

    fn query_auction_status(env: Env, auction_id: u64) -> Result<AuctionStatus, ErrorCode>;
}
