//! Standard mileage deduction rates.
//!
//! This module maps calendar dates to the per-mile deduction rate in effect,
//! including years where the rate changed part-way through.

mod standard;
mod table;

pub use table::{RateCutoff, RateTable, YearSchedule};
