//!
//! Common types and utilities shared by the feed publishers, subscribers and
//! the demonstration driver.
//!
//! This crate aggregates:
//! - `error` — unified error type `FeedError` used across the workspace.
//! - `result` — handy `Result<T, FeedError>` alias.
//! - `types` — id aliases and the shared `invalid_request` sentinel.
//! - `asset` — asset classes served by the feed and parsing helpers.
//! - `update` — market tick payloads applied to publishers by the driver.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod types;
pub mod asset;
pub mod update;

pub use error::FeedError;
pub use result::Result;
pub use asset::AssetClass;
pub use update::MarketUpdate;
pub use types::{InstrumentId, SubscriberId, INVALID_REQUEST};
