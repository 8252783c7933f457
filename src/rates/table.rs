//! Year-keyed mileage rate schedules.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{TrackerError, TrackerResult};

/// A rate that applies up to and including `through_month`.
///
/// Within a year the rate covers the months after the previous cutoff
/// through this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateCutoff {
    /// The last month (1-12, inclusive) this rate applies to.
    pub through_month: u32,
    /// The per-mile deduction rate in dollars.
    pub rate: Decimal,
}

/// The ordered cutoff schedule for a single year.
///
/// Cutoff months are unique and sorted ascending. A schedule whose last
/// cutoff is before December leaves the remaining months without a rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearSchedule {
    year: i32,
    cutoffs: Vec<RateCutoff>,
}

impl YearSchedule {
    /// Creates a validated schedule.
    ///
    /// Cutoffs may be given in any order; they are sorted by month.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidSchedule`] if the schedule is empty,
    /// a cutoff month falls outside 1..=12, a month appears twice, or a
    /// rate is negative.
    ///
    /// # Example
    ///
    /// ```
    /// use mileage_ledger::rates::{RateCutoff, YearSchedule};
    /// use rust_decimal::Decimal;
    ///
    /// let schedule = YearSchedule::new(2022, vec![
    ///     RateCutoff { through_month: 12, rate: Decimal::new(625, 3) },
    ///     RateCutoff { through_month: 6, rate: Decimal::new(585, 3) },
    /// ]).unwrap();
    ///
    /// assert_eq!(schedule.rate_for_month(3), Some(Decimal::new(585, 3)));
    /// assert_eq!(schedule.rate_for_month(7), Some(Decimal::new(625, 3)));
    /// ```
    pub fn new(year: i32, mut cutoffs: Vec<RateCutoff>) -> TrackerResult<Self> {
        if cutoffs.is_empty() {
            return Err(TrackerError::InvalidSchedule {
                year,
                message: "schedule has no cutoffs".to_string(),
            });
        }

        if let Some(bad) = cutoffs.iter().find(|c| !(1..=12).contains(&c.through_month)) {
            return Err(TrackerError::InvalidSchedule {
                year,
                message: format!("cutoff month {} is outside 1-12", bad.through_month),
            });
        }

        if let Some(bad) = cutoffs.iter().find(|c| c.rate.is_sign_negative()) {
            return Err(TrackerError::InvalidSchedule {
                year,
                message: format!("negative rate {} for month {}", bad.rate, bad.through_month),
            });
        }

        cutoffs.sort_by_key(|c| c.through_month);

        if let Some(pair) = cutoffs
            .windows(2)
            .find(|pair| pair[0].through_month == pair[1].through_month)
        {
            return Err(TrackerError::InvalidSchedule {
                year,
                message: format!("duplicate cutoff month {}", pair[0].through_month),
            });
        }

        Ok(Self { year, cutoffs })
    }

    /// Builds a schedule from data already known to be sorted and valid.
    pub(crate) fn trusted(year: i32, cutoffs: &[(u32, Decimal)]) -> Self {
        Self {
            year,
            cutoffs: cutoffs
                .iter()
                .map(|&(through_month, rate)| RateCutoff {
                    through_month,
                    rate,
                })
                .collect(),
        }
    }

    /// Returns the year this schedule covers.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the cutoffs in ascending month order.
    pub fn cutoffs(&self) -> &[RateCutoff] {
        &self.cutoffs
    }

    /// Returns true if the schedule defines a rate through December.
    pub fn is_complete(&self) -> bool {
        self.cutoffs.last().is_some_and(|c| c.through_month == 12)
    }

    /// Returns the rate for `month`: the first cutoff at or after it.
    pub fn rate_for_month(&self, month: u32) -> Option<Decimal> {
        let index = self.cutoffs.partition_point(|c| c.through_month < month);
        self.cutoffs.get(index).map(|c| c.rate)
    }
}

/// Immutable lookup table from calendar dates to mileage deduction rates.
///
/// Built once and then only read, so it can be shared across threads
/// without synchronization.
///
/// # Example
///
/// ```
/// use mileage_ledger::rates::RateTable;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let table = RateTable::standard();
/// let date = NaiveDate::from_ymd_opt(2022, 7, 1).unwrap();
/// assert_eq!(table.rate_for_date(date), Decimal::new(625, 3));
///
/// // Unknown years yield zero rather than an error.
/// let old = NaiveDate::from_ymd_opt(1999, 7, 1).unwrap();
/// assert_eq!(table.rate_for_date(old), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    schedules: Vec<YearSchedule>,
}

impl RateTable {
    /// Creates a table from per-year schedules.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidSchedule`] if two schedules share a year.
    pub fn from_schedules(mut schedules: Vec<YearSchedule>) -> TrackerResult<Self> {
        schedules.sort_by_key(|s| s.year);

        if let Some(pair) = schedules.windows(2).find(|pair| pair[0].year == pair[1].year) {
            return Err(TrackerError::InvalidSchedule {
                year: pair[0].year,
                message: "year is defined more than once".to_string(),
            });
        }

        Ok(Self { schedules })
    }

    pub(crate) fn from_sorted(schedules: Vec<YearSchedule>) -> Self {
        Self { schedules }
    }

    /// Returns the schedule for `year`, or `None` if the year is not on record.
    pub fn schedule_for_year(&self, year: i32) -> Option<&YearSchedule> {
        self.schedules
            .binary_search_by_key(&year, |s| s.year)
            .ok()
            .map(|index| &self.schedules[index])
    }

    /// Returns the rate for a year and month (1-12).
    ///
    /// Yields [`Decimal::ZERO`] when the year is absent or the month lies
    /// beyond the year's last cutoff. Zero means "rate unknown".
    pub fn rate_for_month(&self, year: i32, month: u32) -> Decimal {
        match self
            .schedule_for_year(year)
            .and_then(|s| s.rate_for_month(month))
        {
            Some(rate) => rate,
            None => {
                debug!(year, month, "No mileage rate on record");
                Decimal::ZERO
            }
        }
    }

    /// Returns the rate in effect on `date`, or zero if unknown.
    pub fn rate_for_date(&self, date: NaiveDate) -> Decimal {
        self.rate_for_month(date.year(), date.month())
    }

    /// Iterates the schedules in ascending year order.
    pub fn schedules(&self) -> impl Iterator<Item = &YearSchedule> {
        self.schedules.iter()
    }

    /// Iterates the years on record in ascending order.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.schedules.iter().map(|s| s.year)
    }
}
