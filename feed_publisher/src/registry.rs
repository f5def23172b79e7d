//! Subscription registry tracking which subscribers may read which
//! instruments.
//!
//! This is a lightweight, in-memory membership map with a narrow API:
//!
//! - `SubscriptionRegistry::subscribe(subscriber, instrument)` — grant
//!   `subscriber` read access to `instrument`; repeated grants are no-ops.
//! - `SubscriptionRegistry::is_subscribed(subscriber, instrument)` —
//!   read-only membership check; instruments nobody ever subscribed to
//!   simply report `false`.
//!
//! The registry is not synchronized; publishers that are shared across
//! threads wrap it together with their store behind one lock.

use std::collections::{HashMap, HashSet};

use feed_common::{InstrumentId, SubscriberId};

/// Membership map from instrument to the set of subscribers allowed to read
/// it. Membership only: no ordering, no multiplicity.
#[derive(Debug, Default)]
pub struct SubscriptionRegistry {
    subscriptions: HashMap<InstrumentId, HashSet<SubscriberId>>,
}

impl SubscriptionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `subscriber` into the subscriber set for `instrument`.
    /// Inserting an existing pair leaves the registry unchanged.
    pub fn subscribe(&mut self, subscriber: SubscriberId, instrument: InstrumentId) {
        self.subscriptions
            .entry(instrument)
            .or_default()
            .insert(subscriber);
    }

    /// Check whether `subscriber` may read `instrument`.
    pub fn is_subscribed(&self, subscriber: SubscriberId, instrument: InstrumentId) -> bool {
        self.subscriptions
            .get(&instrument)
            .map(|set| set.contains(&subscriber))
            .unwrap_or(false)
    }

    /// Number of subscribers registered for `instrument`.
    pub fn subscriber_count(&self, instrument: InstrumentId) -> usize {
        self.subscriptions
            .get(&instrument)
            .map(HashSet::len)
            .unwrap_or(0)
    }
}
