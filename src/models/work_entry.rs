//! Work entry model.
//!
//! A [`WorkEntry`] is one recorded shift as stored by the persistence layer.
//! The ledger only reads entries; it never mutates them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Treats an absent amount as zero.
///
/// Every numeric field of a [`WorkEntry`] is optional because drivers often
/// leave parts of a shift unrecorded. Aggregation folds those fields through
/// this function so that a missing value contributes nothing to a total.
///
/// # Example
///
/// ```
/// use mileage_ledger::models::or_zero;
///
/// assert_eq!(or_zero(Some(12.5)), 12.5);
/// assert_eq!(or_zero(None), 0.0);
/// ```
pub fn or_zero(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}

/// A single day's recorded shift.
///
/// # Example
///
/// ```
/// use mileage_ledger::models::WorkEntry;
/// use chrono::NaiveDate;
///
/// let entry = WorkEntry {
///     day_hours: Some(5.0),
///     night_hours: Some(2.5),
///     pay: Some(120.0),
///     ..WorkEntry::new(NaiveDate::from_ymd_opt(2022, 3, 14).unwrap())
/// };
/// assert_eq!(entry.total_hours(), 7.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkEntry {
    /// The date the shift was worked.
    pub date: NaiveDate,
    /// Hours worked during the day.
    #[serde(default)]
    pub day_hours: Option<f64>,
    /// Hours worked at night.
    #[serde(default)]
    pub night_hours: Option<f64>,
    /// Business miles driven.
    #[serde(default)]
    pub mileage: Option<f64>,
    /// Base pay reported by the platform.
    #[serde(default)]
    pub pay: Option<f64>,
    /// Other reported pay (promotions, in-app tips).
    #[serde(default)]
    pub other_pay: Option<f64>,
    /// Tips received in cash.
    #[serde(default)]
    pub cash_tips: Option<f64>,
    /// Odometer reading at the start of the shift.
    #[serde(default)]
    pub start_odometer: Option<f64>,
    /// Odometer reading at the end of the shift.
    #[serde(default)]
    pub end_odometer: Option<f64>,
}

impl WorkEntry {
    /// Creates an entry for `date` with every amount absent.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            day_hours: None,
            night_hours: None,
            mileage: None,
            pay: None,
            other_pay: None,
            cash_tips: None,
            start_odometer: None,
            end_odometer: None,
        }
    }

    /// Returns day plus night hours.
    pub fn total_hours(&self) -> f64 {
        or_zero(self.day_hours) + or_zero(self.night_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_new_entry_has_no_amounts() {
        let entry = WorkEntry::new(make_date("2022-01-05"));
        assert_eq!(entry.mileage, None);
        assert_eq!(entry.pay, None);
        assert_eq!(entry.start_odometer, None);
        assert_eq!(entry.total_hours(), 0.0);
    }

    #[test]
    fn test_total_hours_sums_day_and_night() {
        let entry = WorkEntry {
            day_hours: Some(4.0),
            night_hours: Some(3.25),
            ..WorkEntry::new(make_date("2022-01-05"))
        };
        assert_eq!(entry.total_hours(), 7.25);
    }

    #[test]
    fn test_total_hours_with_only_night_hours() {
        let entry = WorkEntry {
            night_hours: Some(6.0),
            ..WorkEntry::new(make_date("2022-01-05"))
        };
        assert_eq!(entry.total_hours(), 6.0);
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let json = r#"{
            "date": "2022-07-04",
            "day_hours": 6.5,
            "pay": 140.25
        }"#;

        let entry: WorkEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.date, make_date("2022-07-04"));
        assert_eq!(entry.day_hours, Some(6.5));
        assert_eq!(entry.pay, Some(140.25));
        assert_eq!(entry.night_hours, None);
        assert_eq!(entry.cash_tips, None);
    }

    #[test]
    fn test_deserialize_explicit_nulls() {
        let json = r#"{
            "date": "2022-07-04",
            "mileage": null,
            "start_odometer": 1200.0,
            "end_odometer": null
        }"#;

        let entry: WorkEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.mileage, None);
        assert_eq!(entry.start_odometer, Some(1200.0));
        assert_eq!(entry.end_odometer, None);
    }

    #[test]
    fn test_serialization_uses_iso_date() {
        let entry = WorkEntry::new(make_date("2023-11-30"));
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"date\":\"2023-11-30\""));
    }
}
