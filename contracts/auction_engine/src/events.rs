use soroban_sdk::{ Address, Env, String, Symbol };

pub struct AuctionEvents {}

impl AuctionEvents {
    // Registry Events

    /// Emitted when the registry is initialized
    ///
    /// - topics - `["initialize", owner: Address]`
    /// - data - `[payment_token: Address, fee_rate_bps: i64, default_duration: u64, max_duration: u64]`
    pub fn initialize(
        env: &Env,
        owner: Address,
        payment_token: Address,
        fee_rate_bps: i64,
        default_duration: u64,
        max_duration: u64
    ) {
        let topics = (Symbol::new(env, "initialize"), owner);
        env.events().publish(topics, (payment_token, fee_rate_bps, default_duration, max_duration));
    }

    /// Emitted when the owner updates the fee or duration parameters
    ///
    /// - topics - `["config_updated", owner: Address]`
    /// - data - `[fee_rate_bps: i64, default_duration: u64, max_duration: u64]`
    pub fn config_updated(
        env: &Env,
        owner: Address,
        fee_rate_bps: i64,
        default_duration: u64,
        max_duration: u64
    ) {
        let topics = (Symbol::new(env, "config_updated"), owner);
        env.events().publish(topics, (fee_rate_bps, default_duration, max_duration));
    }

    /// Emitted when the owner withdraws accumulated platform fees
    ///
    /// - topics - `["fees_collected", owner: Address]`
    /// - data - `[to: Address, amount: i128]`
    pub fn fees_collected(env: &Env, owner: Address, to: Address, amount: i128) {
        let topics = (Symbol::new(env, "fees_collected"), owner);
        env.events().publish(topics, (to, amount));
    }

    // Auction Events

    /// Emitted when a seller lists a new auction
    ///
    /// - topics - `["auction_created", auction_id: u64, seller: Address]`
    /// - data - `[item: String, starting_price: i128, discount_rate: i128, duration: u64, ends_at: u64]`
    #[allow(clippy::too_many_arguments)]
    pub fn auction_created(
        env: &Env,
        auction_id: u64,
        seller: Address,
        item: String,
        starting_price: i128,
        discount_rate: i128,
        duration: u64,
        ends_at: u64
    ) {
        let topics = (Symbol::new(env, "auction_created"), auction_id, seller);
        env.events().publish(topics, (item, starting_price, discount_rate, duration, ends_at));
    }

    /// Emitted when a buyer settles an auction
    ///
    /// - topics - `["auction_ended", auction_id: u64]`
    /// - data - `[final_price: i128, buyer: Address]`
    pub fn auction_ended(env: &Env, auction_id: u64, final_price: i128, buyer: Address) {
        let topics = (Symbol::new(env, "auction_ended"), auction_id);
        env.events().publish(topics, (final_price, buyer));
    }
}
