use soroban_sdk::{
    contract,
    contractimpl,
    contractmeta,
    log,
    panic_with_error,
    Address,
    Env,
    String,
    Vec,
};

use crate::{
    auction_engine::AuctionEngineTrait,
    events::AuctionEvents,
    msg::{ ConfigResponse, SaleResponse },
    payment,
    storage::{
        get_auction,
        get_config,
        get_state,
        save_auction,
        save_config,
        save_state,
        utils::{ bump_instance, is_initialized, set_initialized },
        Config,
        RegistryState,
    },
};

use dutch::{
    constants::MAX_QUERY_PAGE,
    error::{ DutchResult, ErrorCode },
    math::{
        auction::{ calculate_auction_price, calculate_ends_at, validate_auction_params },
        fees::{ calculate_settlement, validate_fee_rate_bps },
    },
    safe_increment,
    types::{ Auction, AuctionStatus },
    validate,
};

contractmeta!(
    key = "Description",
    val = "Registry of descending price auctions settled in a single payment token"
);

#[contract]
pub struct AuctionEngine;

#[contractimpl]
impl AuctionEngineTrait for AuctionEngine {
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
    ) {
        if is_initialized(&env) {
            log!(&env, "Auction Engine: Initialize: initializing contract twice is not allowed");
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }

        if let Err(error_code) = validate_config(&env, fee_rate_bps, default_duration, max_duration) {
            log!(&env, "Auction Engine: Initialize: invalid configuration");
            panic_with_error!(&env, error_code);
        }

        set_initialized(&env);

        save_config(&env, &Config {
            owner: owner.clone(),
            payment_token: payment_token.clone(),
            fee_rate_bps,
            default_duration,
            max_duration,
        });
        save_state(&env, &RegistryState::default());

        AuctionEvents::initialize(
            &env,
            owner,
            payment_token,
            fee_rate_bps,
            default_duration,
            max_duration
        );
    }

    fn update_config(
        env: Env,
        sender: Address,
        fee_rate_bps: Option<i64>,
        default_duration: Option<u64>,
        max_duration: Option<u64>
    ) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        let mut config = get_config(&env);
        is_owner(&env, &config, &sender)?;

        if let Some(fee_rate_bps) = fee_rate_bps {
            config.fee_rate_bps = fee_rate_bps;
        }
        if let Some(default_duration) = default_duration {
            config.default_duration = default_duration;
        }
        if let Some(max_duration) = max_duration {
            config.max_duration = max_duration;
        }

        validate_config(&env, config.fee_rate_bps, config.default_duration, config.max_duration)?;

        save_config(&env, &config);

        AuctionEvents::config_updated(
            &env,
            sender,
            config.fee_rate_bps,
            config.default_duration,
            config.max_duration
        );

        Ok(())
    }

    fn collect_fees(env: Env, sender: Address, to: Address) -> Result<i128, ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        let config = get_config(&env);
        is_owner(&env, &config, &sender)?;

        let mut state = get_state(&env);
        let amount = state.fees_to_collect;

        state.fees_to_collect = 0;
        safe_increment!(&env, state.total_fees_collected, amount);
        save_state(&env, &state);

        payment::disburse(&env, &config.payment_token, &to, amount)?;

        AuctionEvents::fees_collected(&env, sender, to, amount);

        Ok(amount)
    }

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
    ) -> Result<u64, ErrorCode> {
        seller.require_auth();
        bump_instance(&env);

        let config = get_config(&env);

        validate!(&env, item.len() > 0, ErrorCode::InvalidItem, "item description is empty")?;

        let duration = config.resolve_duration(duration);
        validate_auction_params(&env, starting_price, discount_rate, duration, config.max_duration)?;

        let now = env.ledger().timestamp();
        let ends_at = calculate_ends_at(&env, now, duration)?;

        let mut state = get_state(&env);
        let auction_id = state.auction_count;

        let auction = Auction {
            id: auction_id,
            seller: seller.clone(),
            item: item.clone(),
            starting_price,
            discount_rate,
            duration,
            start_at: now,
            ends_at,
            fee_rate_bps: config.fee_rate_bps,
            final_price: 0,
            buyer: None,
            stopped: false,
        };
        save_auction(&env, &auction);

        safe_increment!(&env, state.auction_count, 1);
        save_state(&env, &state);

        AuctionEvents::auction_created(
            &env,
            auction_id,
            seller,
            item,
            starting_price,
            discount_rate,
            duration,
            ends_at
        );

        Ok(auction_id)
    }

    // ################################################################
    //                             BUYER
    // ################################################################

    fn buy(
        env: Env,
        buyer: Address,
        auction_id: u64,
        paid_amount: i128
    ) -> Result<SaleResponse, ErrorCode> {
        buyer.require_auth();
        bump_instance(&env);

        let config = get_config(&env);
        let mut auction = get_auction(&env, auction_id)?;
        let now = env.ledger().timestamp();

        validate!(
            &env,
            !auction.stopped,
            ErrorCode::AuctionStopped,
            "auction {} is already sold",
            auction_id
        )?;
        validate!(
            &env,
            !auction.is_expired(now),
            ErrorCode::AuctionEnded,
            "auction {} ended at {}",
            auction_id,
            auction.ends_at
        )?;

        let price = calculate_auction_price(&env, &auction, now)?;

        validate!(
            &env,
            paid_amount >= price,
            ErrorCode::InsufficientFunds,
            "paid amount ({}) is below the current price ({})",
            paid_amount,
            price
        )?;

        let settlement = calculate_settlement(&env, price, paid_amount, auction.fee_rate_bps)?;

        // the sale is committed before any tokens move
        auction.stopped = true;
        auction.final_price = price;
        auction.buyer = Some(buyer.clone());
        save_auction(&env, &auction);

        let mut state = get_state(&env);
        safe_increment!(&env, state.fees_to_collect, settlement.fee);
        safe_increment!(&env, state.total_volume, price);
        save_state(&env, &state);

        payment::capture(&env, &config.payment_token, &buyer, paid_amount)?;
        payment::disburse(&env, &config.payment_token, &buyer, settlement.refund)?;
        payment::disburse(
            &env,
            &config.payment_token,
            &auction.seller,
            settlement.seller_proceeds
        )?;

        AuctionEvents::auction_ended(&env, auction_id, price, buyer.clone());

        Ok(SaleResponse {
            auction_id,
            final_price: price,
            buyer,
            refund: settlement.refund,
            seller_proceeds: settlement.seller_proceeds,
            fee: settlement.fee,
        })
    }

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn get_price_for(env: Env, auction_id: u64) -> Result<i128, ErrorCode> {
        bump_instance(&env);

        let auction = get_auction(&env, auction_id)?;

        validate!(
            &env,
            !auction.stopped,
            ErrorCode::AuctionStopped,
            "auction {} is already sold",
            auction_id
        )?;

        calculate_auction_price(&env, &auction, env.ledger().timestamp())
    }

    fn query_config(env: Env) -> ConfigResponse {
        bump_instance(&env);

        ConfigResponse {
            config: get_config(&env),
        }
    }

    fn query_owner(env: Env) -> Address {
        bump_instance(&env);

        get_config(&env).owner
    }

    fn query_state(env: Env) -> RegistryState {
        bump_instance(&env);

        get_state(&env)
    }

    fn query_auction(env: Env, auction_id: u64) -> Result<Auction, ErrorCode> {
        bump_instance(&env);

        get_auction(&env, auction_id)
    }

    fn query_auction_count(env: Env) -> u64 {
        bump_instance(&env);

        get_state(&env).auction_count
    }

    fn query_auctions(env: Env, start: u64, limit: u32) -> Vec<Auction> {
        bump_instance(&env);

        let count = get_state(&env).auction_count;
        let limit = u64::from(limit.min(MAX_QUERY_PAGE));
        let end = start.saturating_add(limit).min(count);

        let mut auctions = Vec::new(&env);
        for auction_id in start..end {
            // archived records are left out of the page
            match get_auction(&env, auction_id) {
                Ok(auction) => auctions.push_back(auction),
                Err(_) => {
                    log!(&env, "Auction Engine: Query Auctions: skipping auction {}", auction_id);
                }
            }
        }
        auctions
    }

    fn query_auction_status(env: Env, auction_id: u64) -> Result<AuctionStatus, ErrorCode> {
        bump_instance(&env);

        let auction = get_auction(&env, auction_id)?;

        Ok(auction.status(env.ledger().timestamp()))
    }
}

fn is_owner(env: &Env, config: &Config, sender: &Address) -> DutchResult {
    validate!(
        env,
        config.owner == *sender,
        ErrorCode::NotAuthorized,
        "Auction Engine: only the owner can perform this action"
    )
}

fn validate_config(
    env: &Env,
    fee_rate_bps: i64,
    default_duration: u64,
    max_duration: u64
) -> DutchResult {
    validate_fee_rate_bps(env, fee_rate_bps)?;

    validate!(
        env,
        default_duration > 0 && default_duration <= max_duration,
        ErrorCode::InvalidDuration,
        "default duration ({}) must be within (0, {}]",
        default_duration,
        max_duration
    )
}
