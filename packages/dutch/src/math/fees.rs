use soroban_sdk::Env;

use crate::{
    constants::{ FEE_DENOMINATOR, MAX_BPS },
    error::{ DutchResult, ErrorCode },
    validate,
};

use super::safe_math::SafeMath;

/// How a sale's payment is split between the buyer, the seller and the registry owner
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Settlement {
    pub price: i128,
    /// Excess payment returned to the buyer
    pub refund: i128,
    /// Retained by the registry owner
    pub fee: i128,
    pub seller_proceeds: i128,
}

pub fn validate_fee_rate_bps(env: &Env, fee_rate_bps: i64) -> DutchResult {
    validate!(
        env,
        (0..=MAX_BPS).contains(&fee_rate_bps),
        ErrorCode::InvalidFee,
        "fee rate ({}) must be within [0, {}] bps",
        fee_rate_bps,
        MAX_BPS
    )
}

/// floor(amount * fee_rate_bps / 10_000)
pub fn calculate_fee(env: &Env, amount: i128, fee_rate_bps: i64) -> DutchResult<i128> {
    amount.safe_mul(i128::from(fee_rate_bps), env)?.safe_div(FEE_DENOMINATOR, env)
}

pub fn calculate_settlement(
    env: &Env,
    price: i128,
    paid_amount: i128,
    fee_rate_bps: i64
) -> DutchResult<Settlement> {
    let refund = paid_amount.safe_sub(price, env)?;
    let fee = calculate_fee(env, price, fee_rate_bps)?;
    let seller_proceeds = price.safe_sub(fee, env)?;

    Ok(Settlement {
        price,
        refund,
        fee,
        seller_proceeds,
    })
}
