//! Monthly accumulator.

use serde::{Deserialize, Serialize};

use crate::models::{WorkEntry, or_zero};

/// Running totals for one calendar month.
///
/// All fields start at zero and only grow through [`Monthly::add_entry`] or
/// [`Monthly::merge`]. Derived figures are recomputed on every call.
///
/// Hourly figures divide by `hours` with plain floating-point semantics: a
/// month with no recorded hours yields infinity or NaN. Callers rendering
/// these values must check [`f64::is_finite`].
///
/// # Example
///
/// ```
/// use mileage_ledger::aggregation::Monthly;
/// use mileage_ledger::models::WorkEntry;
/// use chrono::NaiveDate;
///
/// let mut month = Monthly::default();
/// month.add_entry(&WorkEntry {
///     day_hours: Some(4.0),
///     mileage: Some(50.0),
///     pay: Some(80.0),
///     cash_tips: Some(20.0),
///     ..WorkEntry::new(NaiveDate::from_ymd_opt(2022, 3, 1).unwrap())
/// });
///
/// assert_eq!(month.total_pay(), 100.0);
/// assert_eq!(month.hourly(), 25.0);
/// assert_eq!(month.net_hourly(0.5), 18.75);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Monthly {
    /// Business miles driven.
    pub mileage: f64,
    /// Base pay reported by the platform.
    pub pay: f64,
    /// Other reported pay.
    pub other_pay: f64,
    /// Tips received in cash.
    pub cash_tips: f64,
    /// Day plus night hours worked.
    pub hours: f64,
}

impl Monthly {
    /// Adds an entry's amounts to the running totals.
    ///
    /// Absent fields contribute zero.
    pub fn add_entry(&mut self, entry: &WorkEntry) {
        self.mileage += or_zero(entry.mileage);
        self.pay += or_zero(entry.pay);
        self.other_pay += or_zero(entry.other_pay);
        self.cash_tips += or_zero(entry.cash_tips);
        self.hours += entry.total_hours();
    }

    /// Adds another month's totals into this one.
    pub fn merge(&mut self, other: &Monthly) {
        self.mileage += other.mileage;
        self.pay += other.pay;
        self.other_pay += other.other_pay;
        self.cash_tips += other.cash_tips;
        self.hours += other.hours;
    }

    /// Returns true if nothing has been accumulated.
    pub fn is_empty(&self) -> bool {
        *self == Monthly::default()
    }

    /// Pay as reported to the platform: base plus other pay.
    pub fn reported_pay(&self) -> f64 {
        self.pay + self.other_pay
    }

    /// Reported pay plus cash tips.
    pub fn total_pay(&self) -> f64 {
        self.reported_pay() + self.cash_tips
    }

    /// Total pay per hour worked.
    pub fn hourly(&self) -> f64 {
        self.total_pay() / self.hours
    }

    /// Total pay less the mileage deduction at `cost_per_mile`.
    pub fn net_pay(&self, cost_per_mile: f64) -> f64 {
        self.total_pay() - self.mileage * cost_per_mile
    }

    /// Net pay per hour worked, after deducting mileage at `cost_per_mile`.
    pub fn net_hourly(&self, cost_per_mile: f64) -> f64 {
        self.net_pay(cost_per_mile) / self.hours
    }
}
