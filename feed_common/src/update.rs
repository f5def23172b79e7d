//! Market tick payloads applied to publishers by the demonstration driver.
//!
//! A `MarketUpdate` carries everything `update_data` needs: the target asset
//! class, the instrument id, the last traded price and the class-dependent
//! secondary metric (volume for equities, yield for bonds), plus a
//! millisecond UTC timestamp recording when the tick was produced. Publishers
//! never see the timestamp; it exists for driver-side logging.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::io::BufRead;

use crate::asset::AssetClass;
use crate::error::FeedError;
use crate::types::InstrumentId;

/// One tick feeding a publisher's `update_data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketUpdate {
    /// Asset class selecting the target publisher.
    pub asset: AssetClass,
    /// Instrument the tick refers to, scoped to that publisher.
    pub instrument: InstrumentId,
    /// Last traded price.
    pub last_traded_price: f64,
    /// Class-dependent secondary metric (volume or yield).
    pub metric: f64,
    /// UTC timestamp in milliseconds since Unix epoch.
    pub timestamp: u64,
}

impl MarketUpdate {
    /// Creates a tick stamped with the current UTC time.
    pub fn new(
        asset: AssetClass,
        instrument: InstrumentId,
        last_traded_price: f64,
        metric: f64,
    ) -> Self {
        MarketUpdate {
            asset,
            instrument,
            last_traded_price,
            metric,
            timestamp: Utc::now().timestamp_millis() as u64,
        }
    }

    /// Encode the tick to JSON bytes.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, FeedError> {
        let json = serde_json::to_vec(self)?;
        Ok(json)
    }
}

/// Trait providing file parsing for market ticks.
pub trait UpdateParser {
    /// Parses ticks from a buffered reader.
    ///
    /// Each non-empty, non-`#` line must hold four comma-separated fields:
    /// `asset, instrument, price, metric`. Returns an error if any line
    /// cannot be parsed.
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<MarketUpdate>, FeedError>;
}

impl UpdateParser for MarketUpdate {
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<Self>, FeedError> {
        let mut updates = Vec::new();

        for line_result in reader.lines() {
            let line = line_result.map_err(FeedError::Io)?;
            let trimmed_line = line.trim();
            if trimmed_line.is_empty() || trimmed_line.starts_with('#') {
                continue;
            }

            updates.push(parse_line(trimmed_line)?);
        }
        Ok(updates)
    }
}

fn parse_line(line: &str) -> Result<MarketUpdate, FeedError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != 4 {
        return Err(FeedError::ParseUpdatesFile(format!(
            "expected 4 fields, got {}: {}",
            fields.len(),
            line
        )));
    }

    let asset = fields[0]
        .parse::<AssetClass>()
        .map_err(|e| FeedError::ParseUpdatesFile(format!("{}: {}", e, fields[0])))?;
    let instrument = fields[1]
        .parse::<InstrumentId>()
        .map_err(|e| FeedError::ParseUpdatesFile(format!("{}: {}", e, fields[1])))?;
    let last_traded_price = fields[2]
        .parse::<f64>()
        .map_err(|e| FeedError::ParseUpdatesFile(format!("{}: {}", e, fields[2])))?;
    let metric = fields[3]
        .parse::<f64>()
        .map_err(|e| FeedError::ParseUpdatesFile(format!("{}: {}", e, fields[3])))?;

    Ok(MarketUpdate::new(asset, instrument, last_traded_price, metric))
}
