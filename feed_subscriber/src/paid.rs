//! Paid-tier subscriber with unlimited access.

use feed_common::{InstrumentId, Result, SubscriberId};
use feed_publisher::SharedPublisher;

use crate::subscriber::Subscriber;

/// Unlimited subscriber tier. Every `get_data` call is delegated to the
/// publisher and returned verbatim; nothing is counted.
#[derive(Debug)]
pub struct PaidSubscriber {
    id: SubscriberId,
}

impl PaidSubscriber {
    /// Create a paid subscriber.
    pub fn new(id: SubscriberId) -> Self {
        Self { id }
    }
}

impl Subscriber for PaidSubscriber {
    fn id(&self) -> SubscriberId {
        self.id
    }

    fn get_data(
        &mut self,
        publisher: &SharedPublisher,
        instrument: InstrumentId,
    ) -> Result<String> {
        let publisher = publisher.lock()?;
        Ok(publisher.get_data(self.id, instrument))
    }
}

#[cfg(test)]
mod tests {
    use feed_publisher::{BondPublisher, Publisher, into_shared};

    use super::*;

    #[test]
    fn delegates_verbatim() {
        let mut publisher = BondPublisher::new();
        publisher.update_data(1100, 98.76, 3.5);
        let handle = into_shared(publisher);

        let mut subscriber = PaidSubscriber::new(2);
        subscriber.subscribe(&handle, 1100).unwrap();

        assert_eq!(
            subscriber.get_data(&handle, 1100).unwrap(),
            "1100, 98.760000, 3.500000"
        );
    }

    #[test]
    fn never_returns_the_quota_sentinel() {
        let mut publisher = BondPublisher::new();
        publisher.update_data(1100, 98.76, 3.5);
        let handle = into_shared(publisher);

        let mut subscriber = PaidSubscriber::new(2);
        subscriber.subscribe(&handle, 1100).unwrap();

        // Well past the free-tier ceiling.
        for _ in 0..250 {
            let answer = subscriber.get_data(&handle, 1100).unwrap();
            assert_eq!(answer, "1100, 98.760000, 3.500000");
        }
    }

    #[test]
    fn publisher_rejections_pass_through_unchanged() {
        let handle = into_shared(BondPublisher::new());
        let mut subscriber = PaidSubscriber::new(2);

        assert_eq!(subscriber.get_data(&handle, 1100).unwrap(), "invalid_request");
    }
}
