//! Base pay adjustment model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A correction to reported base pay that is not tied to a single shift.
///
/// Platforms occasionally pay out guarantees or claw back amounts after the
/// fact. Adjustments are added into a year's reported pay, never into a
/// month's.
///
/// # Example
///
/// ```
/// use mileage_ledger::models::BasePayAdjustment;
/// use chrono::NaiveDate;
///
/// let adjustment = BasePayAdjustment {
///     date: NaiveDate::from_ymd_opt(2022, 2, 1).unwrap(),
///     amount: -15.0,
/// };
/// assert_eq!(adjustment.amount, -15.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasePayAdjustment {
    /// The date the adjustment was recorded.
    pub date: NaiveDate,
    /// The signed adjustment amount.
    pub amount: f64,
}
