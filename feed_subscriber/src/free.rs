//! Free-tier subscriber with a lifetime request quota.
//!
//! A `FreeSubscriber` runs a two-state machine over a single counter:
//! under quota it delegates to the publisher, counting every attempt; once
//! the counter reaches [`FREE_TIER_REQUEST_LIMIT`] it is exhausted for good
//! and answers out of its own pocket without consulting any publisher.
//!
//! Quota bookkeeping details that are observable contract:
//! - the counter burns on every delegating call, including ones the
//!   publisher itself rejects as `invalid_request`;
//! - the counter is global to the subscriber, not partitioned per publisher;
//! - exhaustion is terminal, nothing in scope resets the counter.

use log::debug;

use feed_common::{INVALID_REQUEST, InstrumentId, Result, SubscriberId};
use feed_publisher::SharedPublisher;

use crate::subscriber::Subscriber;

/// Number of publisher-delegating `get_data` calls a free subscriber gets
/// over its lifetime.
pub const FREE_TIER_REQUEST_LIMIT: u32 = 100;

/// Quota-limited subscriber tier.
#[derive(Debug)]
pub struct FreeSubscriber {
    id: SubscriberId,
    request_count: u32,
}

impl FreeSubscriber {
    /// Create a free subscriber with a fresh quota.
    pub fn new(id: SubscriberId) -> Self {
        Self {
            id,
            request_count: 0,
        }
    }

    /// Whether the quota has been used up.
    pub fn is_exhausted(&self) -> bool {
        self.request_count >= FREE_TIER_REQUEST_LIMIT
    }

    /// Delegating calls still available before exhaustion.
    pub fn remaining_requests(&self) -> u32 {
        FREE_TIER_REQUEST_LIMIT.saturating_sub(self.request_count)
    }

    fn quota_sentinel(&self, instrument: InstrumentId) -> String {
        format!("{}, {}, {}", self.id, instrument, INVALID_REQUEST)
    }
}

impl Subscriber for FreeSubscriber {
    fn id(&self) -> SubscriberId {
        self.id
    }

    fn get_data(
        &mut self,
        publisher: &SharedPublisher,
        instrument: InstrumentId,
    ) -> Result<String> {
        if self.is_exhausted() {
            return Ok(self.quota_sentinel(instrument));
        }
        // Burns quota even when the publisher rejects the request.
        self.request_count += 1;
        if self.is_exhausted() {
            debug!("subscriber {} exhausted its free-tier quota", self.id);
        }
        let publisher = publisher.lock()?;
        Ok(publisher.get_data(self.id, instrument))
    }
}
