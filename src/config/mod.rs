//! Configuration loading for mileage rate schedules.
//!
//! The built-in [`RateTable::standard`](crate::rates::RateTable::standard)
//! covers the IRS rates; this module loads an equivalent or extended table
//! from YAML so new years can be added without a rebuild.
//!
//! # Example
//!
//! ```no_run
//! use mileage_ledger::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/irs").unwrap();
//! println!("Loaded rates from: {}", config.source().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CutoffConfig, RateSource, RatesFile, YearScheduleConfig};
