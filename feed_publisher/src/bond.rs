//! Bond market data publisher.
//!
//! Bonds store the last traded price and the yield; both are kept as floats
//! and the incoming metric is stored unmodified.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use feed_common::{INVALID_REQUEST, InstrumentId, SubscriberId};

use crate::publisher::Publisher;
use crate::registry::SubscriptionRegistry;
use crate::store::InstrumentStore;

/// Latest recorded values for one bond instrument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondSnapshot {
    /// Last traded price.
    pub last_traded_price: f64,
    /// Yield, stored exactly as received.
    pub bond_yield: f64,
}

/// Publisher serving bond instruments.
#[derive(Debug, Default)]
pub struct BondPublisher {
    store: InstrumentStore<BondSnapshot>,
    registry: SubscriptionRegistry,
}

impl BondPublisher {
    /// Create a publisher with no instruments and no subscriptions.
    pub fn new() -> Self {
        Self {
            store: InstrumentStore::new(),
            registry: SubscriptionRegistry::new(),
        }
    }
}

impl Publisher for BondPublisher {
    fn update_data(&mut self, instrument: InstrumentId, last_traded_price: f64, metric: f64) {
        let snapshot = BondSnapshot {
            last_traded_price,
            bond_yield: metric,
        };
        debug!(
            "bond update: instrument={} price={} yield={}",
            instrument, snapshot.last_traded_price, snapshot.bond_yield
        );
        self.store.insert(instrument, snapshot);
    }

    fn subscribe(&mut self, subscriber: SubscriberId, instrument: InstrumentId) {
        self.registry.subscribe(subscriber, instrument);
        info!(
            "bond subscribe: subscriber={} instrument={}",
            subscriber, instrument
        );
    }

    fn get_data(&self, subscriber: SubscriberId, instrument: InstrumentId) -> String {
        if !self.registry.is_subscribed(subscriber, instrument) {
            return INVALID_REQUEST.to_string();
        }
        match self.store.get(instrument) {
            Some(snapshot) => format!(
                "{}, {:.6}, {:.6}",
                instrument, snapshot.last_traded_price, snapshot.bond_yield
            ),
            None => INVALID_REQUEST.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_publisher() -> BondPublisher {
        let mut publisher = BondPublisher::new();
        publisher.update_data(1100, 98.76, 3.5);
        publisher.subscribe(2, 1100);
        publisher
    }

    #[test]
    fn formats_subscribed_instrument() {
        let publisher = make_publisher();
        assert_eq!(publisher.get_data(2, 1100), "1100, 98.760000, 3.500000");
    }

    #[test]
    fn yield_is_stored_unmodified() {
        let mut publisher = BondPublisher::new();
        publisher.update_data(1100, 100.0, 3.777777);
        publisher.subscribe(2, 1100);

        assert_eq!(publisher.get_data(2, 1100), "1100, 100.000000, 3.777777");
    }

    #[test]
    fn unsubscribed_requester_is_rejected() {
        let publisher = make_publisher();
        assert_eq!(publisher.get_data(7, 1100), "invalid_request");
    }

    #[test]
    fn missing_snapshot_is_rejected() {
        let mut publisher = BondPublisher::new();
        publisher.subscribe(2, 1200);

        assert_eq!(publisher.get_data(2, 1200), "invalid_request");
    }

    #[test]
    fn update_is_last_write_wins() {
        let mut publisher = make_publisher();
        publisher.update_data(1100, 99.0, 3.25);

        assert_eq!(publisher.get_data(2, 1100), "1100, 99.000000, 3.250000");
    }
}
