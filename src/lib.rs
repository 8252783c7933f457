//! Mileage ledger for rideshare and delivery drivers
//!
//! This crate looks up IRS standard mileage deduction rates by date and
//! folds daily work entries into monthly and yearly earnings reports,
//! deriving net hourly pay after the mileage deduction.

#![warn(missing_docs)]

pub mod aggregation;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod rates;
