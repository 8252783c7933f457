//! Year-partitioned report building.

use std::collections::BTreeMap;

use chrono::Datelike;
use tracing::debug;

use crate::models::{BasePayAdjustment, WorkEntry};

use super::Yearly;

/// Builds one [`Yearly`] report per calendar year present in the input.
///
/// Entries and adjustments are routed by the year of their date, so each
/// report only ever sees its own year's records.
///
/// # Example
///
/// ```
/// use mileage_ledger::aggregation::summarize;
/// use mileage_ledger::models::WorkEntry;
/// use chrono::NaiveDate;
///
/// let entries = vec![
///     WorkEntry { pay: Some(10.0), ..WorkEntry::new(NaiveDate::from_ymd_opt(2021, 12, 31).unwrap()) },
///     WorkEntry { pay: Some(20.0), ..WorkEntry::new(NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()) },
/// ];
///
/// let years = summarize(&entries, &[]);
/// assert_eq!(years.len(), 2);
/// assert_eq!(years[&2021].reported_pay(), 10.0);
/// assert_eq!(years[&2022].reported_pay(), 20.0);
/// ```
pub fn summarize(
    entries: &[WorkEntry],
    adjustments: &[BasePayAdjustment],
) -> BTreeMap<i32, Yearly> {
    let mut years: BTreeMap<i32, Yearly> = BTreeMap::new();

    for entry in entries {
        let year = entry.date.year();
        years
            .entry(year)
            .or_insert_with(|| Yearly::new(year))
            .add_entry(entry);
    }

    for adjustment in adjustments {
        let year = adjustment.date.year();
        years
            .entry(year)
            .or_insert_with(|| Yearly::new(year))
            .add_adjustment(adjustment);
    }

    debug!(
        entries = entries.len(),
        adjustments = adjustments.len(),
        years = years.len(),
        "Summarized work entries"
    );

    years
}
