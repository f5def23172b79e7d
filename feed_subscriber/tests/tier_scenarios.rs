//! End-to-end scenarios exercising the publisher/subscriber contract through
//! shared handles, the way the demonstration driver does.

use feed_publisher::{BondPublisher, EquityPublisher, Publisher, SharedPublisher, into_shared};
use feed_subscriber::{FREE_TIER_REQUEST_LIMIT, FreeSubscriber, PaidSubscriber, Subscriber};

fn make_equity_feed() -> SharedPublisher {
    let mut publisher = EquityPublisher::new();
    publisher.update_data(100, 123.45, 10000.0);
    into_shared(publisher)
}

fn make_bond_feed() -> SharedPublisher {
    let mut publisher = BondPublisher::new();
    publisher.update_data(1100, 98.76, 3.5);
    into_shared(publisher)
}

#[test]
fn free_subscriber_reads_equity_snapshot() {
    let feed = make_equity_feed();
    let mut subscriber = FreeSubscriber::new(1);
    subscriber.subscribe(&feed, 100).unwrap();

    assert_eq!(
        subscriber.get_data(&feed, 100).unwrap(),
        "100, 123.450000, 10000"
    );
}

#[test]
fn paid_subscriber_reads_bond_snapshot() {
    let feed = make_bond_feed();
    let mut subscriber = PaidSubscriber::new(2);
    subscriber.subscribe(&feed, 1100).unwrap();

    assert_eq!(
        subscriber.get_data(&feed, 1100).unwrap(),
        "1100, 98.760000, 3.500000"
    );
}

#[test]
fn free_subscriber_exhausts_quota_on_call_101() {
    let feed = make_equity_feed();
    let mut subscriber = FreeSubscriber::new(1);
    subscriber.subscribe(&feed, 100).unwrap();

    for _ in 0..FREE_TIER_REQUEST_LIMIT {
        assert_eq!(
            subscriber.get_data(&feed, 100).unwrap(),
            "100, 123.450000, 10000"
        );
    }
    assert_eq!(
        subscriber.get_data(&feed, 100).unwrap(),
        "1, 100, invalid_request"
    );
}

#[test]
fn fresh_subscriber_is_rejected_despite_existing_data() {
    let feed = make_equity_feed();
    let mut free = FreeSubscriber::new(10);
    let mut paid = PaidSubscriber::new(11);

    assert_eq!(free.get_data(&feed, 100).unwrap(), "invalid_request");
    assert_eq!(paid.get_data(&feed, 100).unwrap(), "invalid_request");
}

#[test]
fn subscriptions_are_tracked_per_publisher() {
    let equities = make_equity_feed();
    let bonds = make_bond_feed();
    let mut subscriber = PaidSubscriber::new(3);

    // Registered on the equity feed only; ids are scoped per publisher, so
    // the bond feed still rejects everything.
    subscriber.subscribe(&equities, 100).unwrap();

    assert_eq!(
        subscriber.get_data(&equities, 100).unwrap(),
        "100, 123.450000, 10000"
    );
    assert_eq!(subscriber.get_data(&bonds, 1100).unwrap(), "invalid_request");
}

#[test]
fn one_publisher_serves_many_subscribers() {
    let feed = make_equity_feed();
    let mut free = FreeSubscriber::new(1);
    let mut paid = PaidSubscriber::new(2);
    free.subscribe(&feed, 100).unwrap();
    paid.subscribe(&feed, 100).unwrap();

    assert_eq!(free.get_data(&feed, 100).unwrap(), "100, 123.450000, 10000");
    assert_eq!(paid.get_data(&feed, 100).unwrap(), "100, 123.450000, 10000");
}

#[test]
fn later_update_replaces_earlier_snapshot() {
    let feed = make_equity_feed();
    let mut subscriber = PaidSubscriber::new(2);
    subscriber.subscribe(&feed, 100).unwrap();
    assert_eq!(
        subscriber.get_data(&feed, 100).unwrap(),
        "100, 123.450000, 10000"
    );

    feed.lock().unwrap().update_data(100, 124.0, 11000.9);
    assert_eq!(
        subscriber.get_data(&feed, 100).unwrap(),
        "100, 124.000000, 11000"
    );
}
