use dutch::constants::{ DEFAULT_AUCTION_DURATION, DEFAULT_FEE_RATE_BPS, MAX_AUCTION_DURATION };
use soroban_sdk::{ testutils::{ Address as _, Ledger }, token, Address, Env, String };

use crate::contract::{ AuctionEngine, AuctionEngineClient };

pub use dutch::constants::ONE_DAY;

pub const MAX_DURATION: u64 = MAX_AUCTION_DURATION;
pub const FEE_RATE_BPS: i64 = DEFAULT_FEE_RATE_BPS;
pub const START_TIME: u64 = 1_000;

// 0.03 of an 18 decimal token
pub const STARTING_PRICE: i128 = 30_000_000_000_000_000;
pub const DISCOUNT_RATE: i128 = 3;
pub const DURATION: u64 = 60;

pub fn deploy_token_contract<'a>(
    env: &Env,
    admin: &Address
) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
    let token_address = env.register_stellar_asset_contract_v2(admin.clone()).address();

    (token::Client::new(env, &token_address), token::StellarAssetClient::new(env, &token_address))
}

pub fn deploy_auction_engine_contract<'a>(
    env: &Env,
    owner: &Address,
    payment_token: &Address
) -> AuctionEngineClient<'a> {
    let engine = AuctionEngineClient::new(env, &env.register(AuctionEngine, ()));

    engine.initialize(
        owner,
        payment_token,
        &FEE_RATE_BPS,
        &DEFAULT_AUCTION_DURATION,
        &MAX_DURATION
    );

    engine
}

pub fn set_timestamp(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp = timestamp;
    });
}

pub struct Suite<'a> {
    pub env: Env,
    pub owner: Address,
    pub seller: Address,
    pub buyer: Address,
    pub token: token::Client<'a>,
    pub token_admin: token::StellarAssetClient<'a>,
    pub engine: AuctionEngineClient<'a>,
}

impl<'a> Suite<'a> {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        set_timestamp(&env, START_TIME);

        let admin = Address::generate(&env);
        let owner = Address::generate(&env);
        let seller = Address::generate(&env);
        let buyer = Address::generate(&env);

        let (token, token_admin) = deploy_token_contract(&env, &admin);
        let engine = deploy_auction_engine_contract(&env, &owner, &token.address);

        Suite {
            env,
            owner,
            seller,
            buyer,
            token,
            token_admin,
            engine,
        }
    }

    pub fn create_auction(&self, starting_price: i128, discount_rate: i128, duration: u64) -> u64 {
        self.engine.create_auction(
            &self.seller,
            &starting_price,
            &discount_rate,
            &String::from_str(&self.env, "fake item"),
            &duration
        )
    }

    pub fn advance(&self, seconds: u64) {
        let now = self.env.ledger().timestamp();
        set_timestamp(&self.env, now + seconds);
    }
}
