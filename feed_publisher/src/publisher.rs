//! Publisher capability contract and the shared handle type.
//!
//! The trait covers the full capability set {`update_data`, `subscribe`,
//! `get_data`}. Publishers know nothing about subscriber tiers; tiering is
//! layered on top of this contract by the subscriber crate. The variant set
//! is closed: `EquityPublisher` and `BondPublisher` are the only
//! implementations the system exercises.

use std::sync::{Arc, Mutex};

use feed_common::{InstrumentId, SubscriberId};

/// Capability contract implemented by every publisher.
pub trait Publisher {
    /// Records the latest snapshot for `instrument`, unconditionally
    /// overwriting any previous one. No numeric validation is performed;
    /// out-of-range values are stored as-is. `metric` is interpreted per
    /// publisher: last-day volume (truncated toward zero) for equities,
    /// yield (stored unmodified) for bonds.
    fn update_data(&mut self, instrument: InstrumentId, last_traded_price: f64, metric: f64);

    /// Grants `subscriber` read access to `instrument`. Idempotent; there is
    /// no bound on subscribers per instrument or instruments per subscriber.
    fn subscribe(&mut self, subscriber: SubscriberId, instrument: InstrumentId);

    /// Returns the formatted snapshot line for `instrument`, or the
    /// `invalid_request` sentinel when `subscriber` is not subscribed to
    /// `instrument` or no snapshot has ever been recorded for it. Never
    /// mutates publisher state.
    fn get_data(&self, subscriber: SubscriberId, instrument: InstrumentId) -> String;
}

/// Reference-counted handle sharing one publisher across many subscribers.
///
/// The mutex is the publisher's single lock, guarding its store and registry
/// together; every operation takes it for the duration of one call.
pub type SharedPublisher = Arc<Mutex<dyn Publisher + Send>>;

/// Wraps a publisher into a [`SharedPublisher`] handle.
pub fn into_shared<P: Publisher + Send + 'static>(publisher: P) -> SharedPublisher {
    Arc::new(Mutex::new(publisher))
}
