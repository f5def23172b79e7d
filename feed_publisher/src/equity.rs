//! Equity market data publisher.
//!
//! An `EquitySnapshot` is the payload stored per equity instrument: the last
//! traded price and the last-day volume. Volume arrives on the wire as a
//! float and is truncated toward zero into an unsigned integer on storage.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use feed_common::{INVALID_REQUEST, InstrumentId, SubscriberId};

use crate::publisher::Publisher;
use crate::registry::SubscriptionRegistry;
use crate::store::InstrumentStore;

/// Latest recorded values for one equity instrument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquitySnapshot {
    /// Last traded price.
    pub last_traded_price: f64,
    /// Last-day traded volume, truncated toward zero from the incoming float.
    pub last_day_volume: u64,
}

/// Publisher serving equity instruments.
#[derive(Debug, Default)]
pub struct EquityPublisher {
    store: InstrumentStore<EquitySnapshot>,
    registry: SubscriptionRegistry,
}

impl EquityPublisher {
    /// Create a publisher with no instruments and no subscriptions.
    pub fn new() -> Self {
        Self {
            store: InstrumentStore::new(),
            registry: SubscriptionRegistry::new(),
        }
    }
}

impl Publisher for EquityPublisher {
    fn update_data(&mut self, instrument: InstrumentId, last_traded_price: f64, metric: f64) {
        // Truncation toward zero; negative inputs clamp to 0 under `as`.
        let snapshot = EquitySnapshot {
            last_traded_price,
            last_day_volume: metric as u64,
        };
        debug!(
            "equity update: instrument={} price={} volume={}",
            instrument, snapshot.last_traded_price, snapshot.last_day_volume
        );
        self.store.insert(instrument, snapshot);
    }

    fn subscribe(&mut self, subscriber: SubscriberId, instrument: InstrumentId) {
        self.registry.subscribe(subscriber, instrument);
        info!(
            "equity subscribe: subscriber={} instrument={}",
            subscriber, instrument
        );
    }

    fn get_data(&self, subscriber: SubscriberId, instrument: InstrumentId) -> String {
        if !self.registry.is_subscribed(subscriber, instrument) {
            return INVALID_REQUEST.to_string();
        }
        match self.store.get(instrument) {
            Some(snapshot) => format!(
                "{}, {:.6}, {}",
                instrument, snapshot.last_traded_price, snapshot.last_day_volume
            ),
            None => INVALID_REQUEST.to_string(),
        }
    }
}
