use dutch::error::{ DutchResult, ErrorCode };
use soroban_sdk::{ log, token, Address, Env };

/// Moves `amount` of the payment token. A failure inside the token contract is caught and
/// reported as `TransferFailed`, the caller returns it and the host rolls back the invocation.
pub fn transfer(env: &Env, token: &Address, from: &Address, to: &Address, amount: i128) -> DutchResult {
    if amount == 0 {
        return Ok(());
    }

    match token::Client::new(env, token).try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "Auction Engine: Transfer: moving {} of the payment token failed", amount);
            Err(ErrorCode::TransferFailed)
        }
    }
}

/// Escrows a buyer's payment in the registry.
pub fn capture(env: &Env, token: &Address, from: &Address, amount: i128) -> DutchResult {
    transfer(env, token, from, &env.current_contract_address(), amount)
}

/// Pays out of the registry's escrow.
pub fn disburse(env: &Env, token: &Address, to: &Address, amount: i128) -> DutchResult {
    transfer(env, token, &env.current_contract_address(), to, amount)
}
