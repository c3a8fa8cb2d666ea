use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    #[doc = "Starting price cannot cover the full discount over the duration"]
    InvalidPrice = 4,
    NotFound = 5,
    AuctionStopped = 6,
    AuctionEnded = 7,
    InsufficientFunds = 8,
    TransferFailed = 9,
    InvalidFee = 10,
    InvalidDuration = 11,
    InvalidItem = 12,
    MathError = 13,
}

pub type DutchResult<T = ()> = Result<T, ErrorCode>;

impl ErrorCode {
    pub fn reason(&self) -> &'static str {
        match self {
            ErrorCode::AlreadyInitialized => "contract is already initialized",
            ErrorCode::NotInitialized => "contract is not initialized",
            ErrorCode::NotAuthorized => "sender is not the registry owner",
            ErrorCode::InvalidPrice => "starting price is too low for the discount rate and duration",
            ErrorCode::NotFound => "auction does not exist",
            ErrorCode::AuctionStopped => "auction is stopped",
            ErrorCode::AuctionEnded => "auction has ended",
            ErrorCode::InsufficientFunds => "paid amount is below the current price",
            ErrorCode::TransferFailed => "payment token transfer failed",
            ErrorCode::InvalidFee => "fee rate must be between 0 and 10000 bps",
            ErrorCode::InvalidDuration => "duration is zero or exceeds the maximum duration",
            ErrorCode::InvalidItem => "item description is empty",
            ErrorCode::MathError => "arithmetic overflow",
        }
    }
}
