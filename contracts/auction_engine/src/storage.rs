use dutch::{
    constants::{
        INSTANCE_BUMP_AMOUNT,
        INSTANCE_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
        PERSISTENT_LIFETIME_THRESHOLD,
    },
    error::{ DutchResult, ErrorCode },
    math::auction::resolve_duration,
    types::Auction,
};
use soroban_sdk::{ contracttype, log, panic_with_error, Address, Env };

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    State,
    Initialized,
    Auction(u64),
}

// ################################################################
//                             Config
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Recipient of the platform fees, fixed at initialization
    pub owner: Address,
    /// Token every auction is paid in
    pub payment_token: Address,
    pub fee_rate_bps: i64,
    /// Applied when an auction is created with a zero duration
    pub default_duration: u64,
    pub max_duration: u64,
}

impl Config {
    pub fn resolve_duration(&self, duration: u64) -> u64 {
        resolve_duration(duration, self.default_duration)
    }
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_config(env: &Env) -> Config {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| {
            log!(env, "Auction Engine: Config not set");
            panic_with_error!(env, ErrorCode::NotInitialized)
        })
}

// ################################################################
//                             State
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RegistryState {
    /// Number of auctions ever created, also the next auction id
    pub auction_count: u64,
    /// Platform fees retained from sales and not yet collected by the owner
    pub fees_to_collect: i128,
    pub total_fees_collected: i128,
    /// Sum of all final prices
    pub total_volume: i128,
}

pub fn save_state(env: &Env, state: &RegistryState) {
    env.storage().instance().set(&DataKey::State, state);
}

pub fn get_state(env: &Env) -> RegistryState {
    env.storage().instance().get(&DataKey::State).unwrap_or_default()
}

// ################################################################
//                             Auction
// ################################################################

pub fn save_auction(env: &Env, auction: &Auction) {
    let key = DataKey::Auction(auction.id);
    env.storage().persistent().set(&key, auction);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_auction(env: &Env, auction_id: u64) -> DutchResult<Auction> {
    let key = DataKey::Auction(auction_id);
    let auction = env
        .storage()
        .persistent()
        .get::<_, Auction>(&key)
        .ok_or_else(|| {
            log!(env, "Auction Engine: Auction {} not found", auction_id);
            ErrorCode::NotFound
        })?;

    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);

    Ok(auction)
}

// ################################################################
//                             Utils
// ################################################################

pub mod utils {
    use super::*;

    pub fn bump_instance(env: &Env) {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }

    pub fn is_initialized(env: &Env) -> bool {
        env.storage().instance().get(&DataKey::Initialized).unwrap_or(false)
    }

    pub fn set_initialized(env: &Env) {
        env.storage().instance().set(&DataKey::Initialized, &true);
        bump_instance(env);
    }
}
