//! Publisher side of the market-data feed.
//!
//! A publisher owns the latest snapshot per instrument and the registry of
//! subscribers allowed to read each instrument. Two concrete publishers are
//! provided, differing only in the shape of the stored data:
//! - `equity` — `EquityPublisher`, price + last-day volume.
//! - `bond` — `BondPublisher`, price + yield.
//!
//! The `publisher` module holds the capability trait all of them implement
//! and the shared `Arc<Mutex<..>>` handle type used to hand one publisher to
//! many subscribers.
pub mod bond;
pub mod equity;
pub mod publisher;
pub mod registry;
pub mod store;

pub use bond::BondPublisher;
pub use equity::EquityPublisher;
pub use publisher::{Publisher, SharedPublisher, into_shared};
