//! Synthetic tick generator for the streaming demo mode.
//!
//! The `FeedGenerator` maintains last prices for a fixed demo universe and
//! produces one `MarketUpdate` per instrument per round using a small random
//! walk, so repeated rounds show believable price movement.
//!
//! Design notes:
//! - The walk samples a change uniformly from `[-1%, +1%]` and clamps the
//!   result to a minimum positive value to avoid zero/negative prices.
//! - Volumes and yields are resampled each round rather than walked.

use rand::Rng;
use std::collections::HashMap;

use feed_common::{AssetClass, InstrumentId, MarketUpdate};

/// Demo equity instruments and their starting prices.
const EQUITY_UNIVERSE: [(InstrumentId, f64); 3] = [(100, 123.45), (101, 54.10), (102, 310.00)];
/// Demo bond instruments and their starting prices.
const BOND_UNIVERSE: [(InstrumentId, f64); 2] = [(1100, 98.76), (1101, 101.20)];

/// Random-walk tick source over the fixed demo universe.
pub struct FeedGenerator {
    current_prices: HashMap<(AssetClass, InstrumentId), f64>,
}

impl FeedGenerator {
    /// Create a generator positioned at the universe's starting prices.
    pub fn new() -> Self {
        let mut current_prices = HashMap::new();
        for (instrument, price) in EQUITY_UNIVERSE {
            current_prices.insert((AssetClass::Equity, instrument), price);
        }
        for (instrument, price) in BOND_UNIVERSE {
            current_prices.insert((AssetClass::Bond, instrument), price);
        }
        Self { current_prices }
    }

    /// Calculate the next synthetic price using a small random walk around
    /// `current_price`.
    pub fn next_price(current_price: f64) -> f64 {
        let mut rng = rand::rng();
        let change: f64 = rng.random_range(-0.01..0.01);
        let new_price = current_price * (1.0 + change);
        new_price.max(0.01)
    }

    /// Instruments the generator covers, for wiring up subscriptions.
    pub fn universe(&self) -> Vec<(AssetClass, InstrumentId)> {
        let mut instruments: Vec<_> = self.current_prices.keys().copied().collect();
        instruments.sort();
        instruments
    }

    /// Produce one tick per instrument, advancing the price walk.
    pub fn generate_round(&mut self) -> Vec<MarketUpdate> {
        let mut rng = rand::rng();
        let mut round = Vec::with_capacity(self.current_prices.len());

        for (key, price) in self.current_prices.iter_mut() {
            *price = Self::next_price(*price);
            let (asset, instrument) = *key;
            let metric = match asset {
                AssetClass::Equity => rng.random_range(100..10000) as f64,
                AssetClass::Bond => rng.random_range(1.0..5.0),
            };
            round.push(MarketUpdate::new(asset, instrument, *price, metric));
        }
        round
    }
}

impl Default for FeedGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_the_whole_universe_each_round() {
        let mut generator = FeedGenerator::new();
        let round = generator.generate_round();

        assert_eq!(round.len(), EQUITY_UNIVERSE.len() + BOND_UNIVERSE.len());
        assert!(round.iter().any(|u| u.asset == AssetClass::Equity));
        assert!(round.iter().any(|u| u.asset == AssetClass::Bond));
    }

    #[test]
    fn prices_stay_positive() {
        let mut generator = FeedGenerator::new();
        for _ in 0..1000 {
            for update in generator.generate_round() {
                assert!(update.last_traded_price >= 0.01);
            }
        }
    }

    #[test]
    fn next_price_moves_at_most_one_percent() {
        let price = 100.0;
        for _ in 0..1000 {
            let next = FeedGenerator::next_price(price);
            assert!(next > 98.9 && next < 101.1);
        }
    }
}
