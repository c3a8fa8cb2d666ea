use soroban_sdk::Env;

use crate::{
    error::{DutchResult, ErrorCode},
    types::Auction,
    validate,
};

use super::safe_math::SafeMath;

/// Total discount accrued over the whole duration, the lowest starting price the
/// auction can be listed at.
pub fn calculate_min_starting_price(
    env: &Env,
    discount_rate: i128,
    duration: u64
) -> DutchResult<i128> {
    discount_rate.safe_mul(i128::from(duration), env)
}

pub fn resolve_duration(duration: u64, default_duration: u64) -> u64 {
    if duration == 0 { default_duration } else { duration }
}

pub fn validate_auction_params(
    env: &Env,
    starting_price: i128,
    discount_rate: i128,
    duration: u64,
    max_duration: u64
) -> DutchResult {
    validate!(
        env,
        starting_price >= 0 && discount_rate >= 0,
        ErrorCode::InvalidPrice,
        "starting price ({}) and discount rate ({}) must not be negative",
        starting_price,
        discount_rate
    )?;

    validate!(
        env,
        duration > 0 && duration <= max_duration,
        ErrorCode::InvalidDuration,
        "duration ({}) must be within (0, {}]",
        duration,
        max_duration
    )?;

    let min_starting_price = calculate_min_starting_price(env, discount_rate, duration)?;

    validate!(
        env,
        starting_price >= min_starting_price,
        ErrorCode::InvalidPrice,
        "starting price ({}) is below the total discount ({})",
        starting_price,
        min_starting_price
    )
}

pub fn calculate_ends_at(env: &Env, start_at: u64, duration: u64) -> DutchResult<u64> {
    start_at.safe_add(duration, env)
}

/// Linear price at `now`, saturating at zero once the discount passes the starting price.
///
/// Within `[start_at, ends_at]` the listing invariant keeps the price non-negative, so the
/// floor only shows up for queries made after the auction expired.
pub fn calculate_auction_price(env: &Env, auction: &Auction, now: u64) -> DutchResult<i128> {
    let elapsed = now.safe_sub(auction.start_at, env)?;

    // an overflowing discount is past any starting price
    let price = match auction.discount_rate.checked_mul(i128::from(elapsed)) {
        Some(discount) if discount < auction.starting_price => {
            auction.starting_price.safe_sub(discount, env)?
        }
        _ => 0,
    };

    Ok(price)
}
