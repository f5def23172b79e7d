//! Asset classes served by the feed and parsing helpers.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Asset class of a publisher and of the ticks addressed to it.
///
/// The secondary metric of a tick is interpreted per class: last-day volume
/// for equities, yield for bonds.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
)]
#[clap(rename_all = "lower")]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    /// Listed stock; secondary metric is last-day volume.
    Equity,
    /// Fixed-income instrument; secondary metric is yield.
    Bond,
}
