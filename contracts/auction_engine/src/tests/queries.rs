use dutch::{ constants::MAX_QUERY_PAGE, error::ErrorCode, types::AuctionStatus };
use pretty_assertions::assert_eq;

use super::setup::{ Suite, DISCOUNT_RATE, DURATION, STARTING_PRICE };

#[test]
fn get_price_for_unknown_auction_fails() {
    let suite = Suite::new();

    assert_eq!(suite.engine.try_get_price_for(&0), Err(Ok(ErrorCode::NotFound)));
    assert_eq!(suite.engine.try_query_auction(&0), Err(Ok(ErrorCode::NotFound)));
    assert_eq!(suite.engine.try_query_auction_status(&0), Err(Ok(ErrorCode::NotFound)));
}

#[test]
fn get_price_for_sold_auction_fails() {
    let suite = Suite::new();
    let auction_id = suite.create_auction(STARTING_PRICE, DISCOUNT_RATE, DURATION);
    suite.token_admin.mint(&suite.buyer, &STARTING_PRICE);
    suite.engine.buy(&suite.buyer, &auction_id, &STARTING_PRICE);

    assert_eq!(suite.engine.try_get_price_for(&auction_id), Err(Ok(ErrorCode::AuctionStopped)));
}

#[test]
fn price_clamps_at_zero_after_expiry() {
    let suite = Suite::new();
    let auction_id = suite.create_auction(180, DISCOUNT_RATE, DURATION);

    suite.advance(DURATION);
    assert_eq!(suite.engine.get_price_for(&auction_id), 0);

    suite.advance(1_000);
    assert_eq!(suite.engine.get_price_for(&auction_id), 0);
}

#[test]
fn status_follows_auction_lifecycle() {
    let suite = Suite::new();
    let sold = suite.create_auction(STARTING_PRICE, DISCOUNT_RATE, DURATION);
    let unsold = suite.create_auction(STARTING_PRICE, DISCOUNT_RATE, DURATION);

    assert_eq!(suite.engine.query_auction_status(&sold), AuctionStatus::Active);
    assert_eq!(suite.engine.query_auction_status(&unsold), AuctionStatus::Active);

    suite.token_admin.mint(&suite.buyer, &STARTING_PRICE);
    suite.engine.buy(&suite.buyer, &sold, &STARTING_PRICE);
    assert_eq!(suite.engine.query_auction_status(&sold), AuctionStatus::Sold);

    suite.advance(DURATION);
    assert_eq!(suite.engine.query_auction_status(&unsold), AuctionStatus::Active);

    suite.advance(1);
    assert_eq!(suite.engine.query_auction_status(&unsold), AuctionStatus::Expired);
    assert_eq!(suite.engine.query_auction_status(&sold), AuctionStatus::Sold);
}

#[test]
fn query_auctions_pages_through_registry() {
    let suite = Suite::new();
    for _ in 0..5 {
        suite.create_auction(STARTING_PRICE, DISCOUNT_RATE, DURATION);
    }

    let page = suite.engine.query_auctions(&1, &3);
    assert_eq!(page.len(), 3);
    assert_eq!(page.get(0).unwrap().id, 1);
    assert_eq!(page.get(2).unwrap().id, 3);

    let tail = suite.engine.query_auctions(&3, &10);
    assert_eq!(tail.len(), 2);
    assert_eq!(tail.get(1).unwrap().id, 4);

    assert_eq!(suite.engine.query_auctions(&5, &10).len(), 0);
    assert_eq!(suite.engine.query_auctions(&u64::MAX, &10).len(), 0);
    assert_eq!(suite.engine.query_auctions(&0, &0).len(), 0);
}

#[test]
fn query_auctions_caps_page_size() {
    let suite = Suite::new();
    suite.env.budget().reset_unlimited();

    let total = u64::from(MAX_QUERY_PAGE) + 1;
    for _ in 0..total {
        suite.create_auction(STARTING_PRICE, DISCOUNT_RATE, DURATION);
    }

    assert_eq!(suite.engine.query_auction_count(), total);
    assert_eq!(suite.engine.query_auctions(&0, &u32::MAX).len(), MAX_QUERY_PAGE);
}
