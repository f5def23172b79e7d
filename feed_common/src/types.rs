//! Shared id aliases and contract constants.

/// Identifier of an instrument. Opaque, and local to one publisher instance:
/// the same id on two different publishers refers to unrelated instruments.
pub type InstrumentId = u64;

/// Identifier of a subscriber, assigned externally at construction.
pub type SubscriberId = u64;

/// Sentinel returned in place of a payload when a request cannot be served.
///
/// Publishers return it bare; a quota-exhausted free subscriber prefixes it
/// with its own id and the requested instrument id. Both exact shapes are
/// observable contract for downstream display layers.
pub const INVALID_REQUEST: &str = "invalid_request";
