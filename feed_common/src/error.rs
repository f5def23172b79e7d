//! Error types shared across the workspace.
//!
//! The `FeedError` enum unifies the ambient failure cases for I/O, parsing,
//! serialization and lock handling, allowing crates to propagate a single
//! error type. The publisher/subscriber data contract itself never travels
//! through this channel: missing subscriptions, missing snapshots and
//! exhausted quotas are reported as sentinel strings inside successful
//! return values.
use std::io;
use std::sync::PoisonError;

use thiserror::Error;

/// Unified error type shared by publishers, subscribers and the driver.
#[derive(Error, Debug)]
pub enum FeedError {
    /// I/O error originating from the standard library (files, stdio).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Error while parsing the updates file into `MarketUpdate` values.
    #[error("Parse updates file error: {0}")]
    ParseUpdatesFile(String),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Error indicating a poisoned publisher lock was encountered.
    #[error("Mutex Lock Poisoned: {0}")]
    MutexLock(String),
}

impl<T> From<PoisonError<T>> for FeedError {
    fn from(err: PoisonError<T>) -> Self {
        FeedError::MutexLock(err.to_string())
    }
}
