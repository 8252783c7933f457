//! Configuration types for rate schedules.
//!
//! These structures are deserialized from `rates.yaml`.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::TrackerResult;
use crate::rates::{RateCutoff, RateTable, YearSchedule};

/// Where a rate file's figures come from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RateSource {
    /// The publishing authority (e.g., "IRS").
    pub name: String,
    /// URL of the published rates.
    pub url: String,
    /// The revision of the data in this file.
    pub version: String,
}

/// A single cutoff entry in the rate file.
#[derive(Debug, Clone, Deserialize)]
pub struct CutoffConfig {
    /// The last month (inclusive) the rate applies to.
    pub through_month: u32,
    /// The per-mile rate.
    pub rate: Decimal,
}

/// One year's schedule in the rate file.
#[derive(Debug, Clone, Deserialize)]
pub struct YearScheduleConfig {
    /// The calendar year.
    pub year: i32,
    /// Cutoffs in any order.
    pub cutoffs: Vec<CutoffConfig>,
}

/// The complete `rates.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesFile {
    /// Provenance of the rates.
    pub source: RateSource,
    /// Schedules by year.
    pub schedules: Vec<YearScheduleConfig>,
}

impl RatesFile {
    /// Validates the schedules and builds a [`RateTable`].
    pub fn into_table(self) -> TrackerResult<RateTable> {
        let schedules = self
            .schedules
            .into_iter()
            .map(|s| {
                let cutoffs = s
                    .cutoffs
                    .into_iter()
                    .map(|c| RateCutoff {
                        through_month: c.through_month,
                        rate: c.rate,
                    })
                    .collect();
                YearSchedule::new(s.year, cutoffs)
            })
            .collect::<TrackerResult<Vec<_>>>()?;

        RateTable::from_schedules(schedules)
    }
}
