//! Feed demonstration driver.
//!
//! This binary wires the publisher/subscriber contract together end to end:
//!
//! - Two publishers (`EquityPublisher`, `BondPublisher`) are created behind
//!   `SharedPublisher` handles so both subscribers read the same instances.
//! - A free-tier and a paid-tier subscriber register interest in every
//!   seeded instrument and then pull formatted snapshots round by round,
//!   printing each returned line. Runs of more than 100 rounds show the free
//!   subscriber crossing its quota: the publisher keeps answering the paid
//!   subscriber while the free one starts answering out of its own pocket
//!   with the `"{id}, {instrument}, invalid_request"` sentinel.
//! - Seed ticks come from `--path` (one `asset, instrument, price, metric`
//!   line each) or from a small built-in set matching the canonical demo.
//! - `--stream` keeps generating synthetic ticks and pulling until Ctrl+C.
//!
//! Usage example (CLI):
//! ```bash
//! feed_demo --pulls 105
//! feed_demo --path ./ticks.txt --stream --interval-ms 250
//! ```
#![warn(missing_docs)]
mod args;
mod generator;

use crate::args::Args;
use crate::generator::FeedGenerator;
use clap::Parser;
use log::{debug, info};
use feed_common::update::UpdateParser;
use feed_common::{AssetClass, FeedError, InstrumentId, MarketUpdate, Result};
use feed_publisher::{BondPublisher, EquityPublisher, SharedPublisher, into_shared};
use feed_subscriber::{FreeSubscriber, PaidSubscriber, Subscriber};
use std::fs::File;
use std::io::BufReader;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::thread;
use std::time::Duration;

/// Both publisher handles, addressed by asset class.
struct Feeds {
    equities: SharedPublisher,
    bonds: SharedPublisher,
}

impl Feeds {
    fn new() -> Self {
        Self {
            equities: into_shared(EquityPublisher::new()),
            bonds: into_shared(BondPublisher::new()),
        }
    }

    fn handle(&self, asset: AssetClass) -> &SharedPublisher {
        match asset {
            AssetClass::Equity => &self.equities,
            AssetClass::Bond => &self.bonds,
        }
    }

    /// Apply a tick to the matching publisher, logging it as JSON.
    fn apply(&self, update: &MarketUpdate) -> Result<()> {
        debug!("applying tick: {}", serde_json::to_string(update)?);
        let mut publisher = self.handle(update.asset).lock()?;
        publisher.update_data(update.instrument, update.last_traded_price, update.metric);
        Ok(())
    }
}

/// Built-in seed ticks used when no `--path` is given.
fn default_seed() -> Vec<MarketUpdate> {
    vec![
        MarketUpdate::new(AssetClass::Equity, 100, 123.45, 10000.0),
        MarketUpdate::new(AssetClass::Bond, 1100, 98.76, 3.5),
    ]
}

fn load_seed(args: &Args) -> Result<Vec<MarketUpdate>> {
    match &args.path {
        Some(path) => {
            let file = File::open(path).map_err(FeedError::Io)?;
            let updates = MarketUpdate::parse_from_file(BufReader::new(file))?;
            if updates.is_empty() {
                return Err(FeedError::Format(format!(
                    "no ticks found in {}",
                    path.display()
                )));
            }
            info!("loaded {} seed ticks from {}", updates.len(), path.display());
            Ok(updates)
        }
        None => Ok(default_seed()),
    }
}

/// One pull round: every subscriber pulls every instrument and the returned
/// lines are printed verbatim. The printed strings are the contract surface;
/// everything else goes through the logger.
fn pull_round(
    feeds: &Feeds,
    free: &mut FreeSubscriber,
    paid: &mut PaidSubscriber,
    instruments: &[(AssetClass, InstrumentId)],
) -> Result<()> {
    for &(asset, instrument) in instruments {
        let handle = feeds.handle(asset);
        println!("{}", free.get_data(handle, instrument)?);
        println!("{}", paid.get_data(handle, instrument)?);
    }
    Ok(())
}

fn run_stream(
    feeds: &Feeds,
    free: &mut FreeSubscriber,
    paid: &mut PaidSubscriber,
    interval: Duration,
) -> Result<()> {
    let shutdown = Arc::new(AtomicBool::new(false));
    {
        let shutdown = shutdown.clone();
        ctrlc::set_handler(move || {
            info!("Ctrl+C received. Shutting down demo...");
            shutdown.store(true, Ordering::SeqCst);
        })
        .map_err(|e| FeedError::Format(format!("Failed to set Ctrl+C handler: {}", e)))?;
    }

    let mut generator = FeedGenerator::new();
    let instruments = generator.universe();
    for &(asset, instrument) in &instruments {
        let handle = feeds.handle(asset);
        free.subscribe(handle, instrument)?;
        paid.subscribe(handle, instrument)?;
    }

    while !shutdown.load(Ordering::Relaxed) {
        for update in generator.generate_round() {
            feeds.apply(&update)?;
        }
        pull_round(feeds, free, paid, &instruments)?;
        if free.is_exhausted() {
            debug!("free subscriber {} is exhausted", free.id());
        }
        thread::sleep(interval);
    }
    info!("Stream demo stopping...");
    Ok(())
}

fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();

    let feeds = Feeds::new();
    let mut free = FreeSubscriber::new(args.free_id);
    let mut paid = PaidSubscriber::new(args.paid_id);
    info!(
        "feed demo starting: free subscriber {}, paid subscriber {}",
        free.id(),
        paid.id()
    );

    if args.stream {
        return run_stream(
            &feeds,
            &mut free,
            &mut paid,
            Duration::from_millis(args.interval_ms),
        );
    }

    let seed = load_seed(&args)?;
    for update in &seed {
        feeds.apply(update)?;
    }

    let instruments: Vec<(AssetClass, InstrumentId)> =
        seed.iter().map(|u| (u.asset, u.instrument)).collect();
    for &(asset, instrument) in &instruments {
        let handle = feeds.handle(asset);
        free.subscribe(handle, instrument)?;
        paid.subscribe(handle, instrument)?;
    }

    for round in 0..args.pulls {
        debug!("pull round {}", round + 1);
        pull_round(&feeds, &mut free, &mut paid, &instruments)?;
    }
    info!(
        "done: {} rounds, free subscriber has {} requests left",
        args.pulls,
        free.remaining_requests()
    );
    Ok(())
}

fn init_logger() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
