//! Subscriber capability contract.
//!
//! The trait covers {`subscribe`, `get_data`} over a publisher handle
//! supplied per call. Tier policy lives entirely on this side: publishers
//! are consulted through the uniform [`Publisher`] contract and never learn
//! whether the caller is free or paid.
//!
//! [`Publisher`]: feed_publisher::Publisher

use feed_common::{InstrumentId, Result, SubscriberId};
use feed_publisher::SharedPublisher;

/// Capability contract implemented by every subscriber tier.
///
/// The `Err` branch of these methods carries ambient failures only (a
/// poisoned publisher lock); contract-level rejections travel as sentinel
/// strings inside `Ok` values.
pub trait Subscriber {
    /// Identity this subscriber was constructed with.
    fn id(&self) -> SubscriberId;

    /// Registers interest in `instrument` on `publisher`. Pure delegation,
    /// identical for every tier.
    fn subscribe(&self, publisher: &SharedPublisher, instrument: InstrumentId) -> Result<()> {
        let mut publisher = publisher.lock()?;
        publisher.subscribe(self.id(), instrument);
        Ok(())
    }

    /// Pulls the formatted snapshot line for `instrument` from `publisher`,
    /// subject to the tier's access policy.
    fn get_data(
        &mut self,
        publisher: &SharedPublisher,
        instrument: InstrumentId,
    ) -> Result<String>;
}
