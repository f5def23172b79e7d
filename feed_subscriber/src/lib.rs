//! Subscriber side of the market-data feed.
//!
//! Subscribers hold an identity and an access-tier policy; they own no
//! publisher state and are handed a `SharedPublisher` on every call, so one
//! subscriber may talk to any number of publishers. Two tiers exist:
//! - `free` — `FreeSubscriber`, limited to a fixed number of data requests.
//! - `paid` — `PaidSubscriber`, unlimited.
pub mod free;
pub mod paid;
pub mod subscriber;

pub use free::{FREE_TIER_REQUEST_LIMIT, FreeSubscriber};
pub use paid::PaidSubscriber;
pub use subscriber::Subscriber;
