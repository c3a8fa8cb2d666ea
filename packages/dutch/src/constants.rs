// ################################################################
//                             TTL
// ################################################################

pub const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

// ################################################################
//                             Time
// ################################################################

pub const ONE_MINUTE: u64 = 60;
pub const ONE_HOUR: u64 = 60 * ONE_MINUTE;
pub const ONE_DAY: u64 = 24 * ONE_HOUR;

// ################################################################
//                             Fees
// ################################################################

pub const MAX_BPS: i64 = 10_000;
/// precision: bps
pub const FEE_DENOMINATOR: i128 = 10_000;
/// 10% of every sale is retained by the registry owner
pub const DEFAULT_FEE_RATE_BPS: i64 = 1_000;

// ################################################################
//                             Auctions
// ################################################################

/// Used when an auction is created with a zero duration
pub const DEFAULT_AUCTION_DURATION: u64 = ONE_DAY;
pub const MAX_AUCTION_DURATION: u64 = 1_000 * ONE_DAY;

pub const MAX_QUERY_PAGE: u32 = 100;
