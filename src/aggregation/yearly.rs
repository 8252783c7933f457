//! Yearly accumulator.

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use chrono::{Datelike, Month};
use rust_decimal::prelude::ToPrimitive;

use crate::models::{BasePayAdjustment, WorkEntry};
use crate::rates::RateTable;

use super::Monthly;

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Twelve monthly accumulators plus year-level figures.
///
/// A `Yearly` is identified by its year alone: two instances for the same
/// year compare equal and hash identically whatever they have accumulated.
/// This lets collections de-duplicate reports by year. Compare
/// [`Yearly::month`] values when content equality matters.
///
/// Ratios divide with plain floating-point semantics. With no hours
/// recorded, [`Yearly::hourly`] is non-finite, and with no odometer readings
/// [`Yearly::business_mileage_percent`] is non-finite.
///
/// # Example
///
/// ```
/// use mileage_ledger::aggregation::Yearly;
/// use mileage_ledger::models::WorkEntry;
/// use chrono::{Month, NaiveDate};
///
/// let mut year = Yearly::new(2022);
/// year.add_entry(&WorkEntry {
///     day_hours: Some(5.0),
///     pay: Some(100.0),
///     start_odometer: Some(1000.0),
///     end_odometer: Some(1080.0),
///     mileage: Some(60.0),
///     ..WorkEntry::new(NaiveDate::from_ymd_opt(2022, 3, 9).unwrap())
/// });
///
/// assert_eq!(year.month(Month::March).pay, 100.0);
/// assert_eq!(year.total_miles(), 80.0);
/// assert_eq!(year.business_mileage_percent(), 0.75);
/// ```
#[derive(Debug, Clone)]
pub struct Yearly {
    /// The calendar year this report covers.
    pub year: i32,
    months: [Monthly; 12],
    /// Adjustments added into reported pay.
    pub base_pay_adjustment: f64,
    /// Lowest non-zero starting odometer reading seen.
    pub start_odometer: Option<f64>,
    /// Highest non-zero ending odometer reading seen.
    pub end_odometer: Option<f64>,
    expenses: BTreeMap<String, f64>,
}

impl Yearly {
    /// Creates an empty report for `year`.
    pub fn new(year: i32) -> Self {
        Self {
            year,
            months: [Monthly::default(); 12],
            base_pay_adjustment: 0.0,
            start_odometer: None,
            end_odometer: None,
            expenses: BTreeMap::new(),
        }
    }

    /// Folds an entry into the month of its date and widens the odometer
    /// bounds.
    ///
    /// The entry's year is not checked against [`Yearly::year`]; routing
    /// entries to the right report is the caller's job.
    pub fn add_entry(&mut self, entry: &WorkEntry) {
        self.months[entry.date.month0() as usize].add_entry(entry);

        if let Some(start) = entry.start_odometer.filter(|v| *v != 0.0) {
            self.start_odometer = Some(self.start_odometer.map_or(start, |s| s.min(start)));
        }
        if let Some(end) = entry.end_odometer.filter(|v| *v != 0.0) {
            self.end_odometer = Some(self.end_odometer.map_or(end, |e| e.max(end)));
        }
    }

    /// Adds an adjustment into [`Yearly::base_pay_adjustment`].
    ///
    /// Like [`Yearly::add_entry`], the adjustment's year is not checked.
    pub fn add_adjustment(&mut self, adjustment: &BasePayAdjustment) {
        self.base_pay_adjustment += adjustment.amount;
    }

    /// Adds `amount` to the expense breakdown under `category`.
    pub fn add_expense(&mut self, category: impl Into<String>, amount: f64) {
        *self.expenses.entry(category.into()).or_insert(0.0) += amount;
    }

    /// Returns the expense breakdown by category.
    pub fn expenses(&self) -> &BTreeMap<String, f64> {
        &self.expenses
    }

    /// Returns the sum of all recorded expenses.
    pub fn total_expenses(&self) -> f64 {
        self.expenses.values().sum()
    }

    /// Returns the accumulator for `month`.
    pub fn month(&self, month: Month) -> &Monthly {
        &self.months[month.number_from_month() as usize - 1]
    }

    /// Iterates the months in calendar order.
    pub fn months(&self) -> impl Iterator<Item = (Month, &Monthly)> {
        MONTHS.into_iter().zip(self.months.iter())
    }

    /// Combines another partial report into this one.
    ///
    /// Monthly totals, adjustments and expenses are summed; odometer bounds
    /// take the outermost readings of both.
    pub fn merge(&mut self, other: &Yearly) {
        for (mine, theirs) in self.months.iter_mut().zip(other.months.iter()) {
            mine.merge(theirs);
        }
        self.base_pay_adjustment += other.base_pay_adjustment;
        self.start_odometer = match (self.start_odometer, other.start_odometer) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        self.end_odometer = match (self.end_odometer, other.end_odometer) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        for (category, amount) in &other.expenses {
            self.add_expense(category.clone(), *amount);
        }
    }

    /// Monthly reported pay plus the base pay adjustment.
    pub fn reported_pay(&self) -> f64 {
        self.months.iter().map(Monthly::reported_pay).sum::<f64>() + self.base_pay_adjustment
    }

    /// Cash tips across all months.
    pub fn cash_tips(&self) -> f64 {
        self.months.iter().map(|m| m.cash_tips).sum()
    }

    /// Hours across all months.
    pub fn hours(&self) -> f64 {
        self.months.iter().map(|m| m.hours).sum()
    }

    /// Business miles across all months.
    pub fn mileage(&self) -> f64 {
        self.months.iter().map(|m| m.mileage).sum()
    }

    /// Reported pay plus cash tips.
    pub fn total_pay(&self) -> f64 {
        self.reported_pay() + self.cash_tips()
    }

    /// Total pay per hour worked.
    pub fn hourly(&self) -> f64 {
        self.total_pay() / self.hours()
    }

    /// Distance between the odometer bounds, or zero if either is unset.
    pub fn total_miles(&self) -> f64 {
        match (self.start_odometer, self.end_odometer) {
            (Some(start), Some(end)) => end - start,
            _ => 0.0,
        }
    }

    /// Odometer miles not logged as business mileage.
    pub fn non_business_miles(&self) -> f64 {
        self.total_miles() - self.mileage()
    }

    /// Business mileage as a fraction of odometer miles.
    pub fn business_mileage_percent(&self) -> f64 {
        self.mileage() / self.total_miles()
    }

    /// Mileage deduction using each month's rate from `rates`.
    ///
    /// Months whose rate is unknown deduct nothing.
    pub fn mileage_deduction(&self, rates: &RateTable) -> f64 {
        self.months()
            .map(|(month, totals)| {
                let rate = rates
                    .rate_for_month(self.year, month.number_from_month())
                    .to_f64()
                    .unwrap_or(0.0);
                totals.mileage * rate
            })
            .sum()
    }

    /// Total pay less the mileage deduction.
    pub fn net_pay(&self, rates: &RateTable) -> f64 {
        self.total_pay() - self.mileage_deduction(rates)
    }

    /// Net pay per hour worked.
    pub fn net_hourly(&self, rates: &RateTable) -> f64 {
        self.net_pay(rates) / self.hours()
    }
}

impl PartialEq for Yearly {
    fn eq(&self, other: &Self) -> bool {
        self.year == other.year
    }
}

impl Eq for Yearly {}

impl Hash for Yearly {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.year.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashSet;
    use std::collections::hash_map::DefaultHasher;

    fn entry_on(date_str: &str) -> WorkEntry {
        WorkEntry::new(NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap())
    }

    fn odometer_entry(date_str: &str, start: f64, end: f64) -> WorkEntry {
        WorkEntry {
            start_odometer: Some(start),
            end_odometer: Some(end),
            ..entry_on(date_str)
        }
    }

    fn hash_of(yearly: &Yearly) -> u64 {
        let mut hasher = DefaultHasher::new();
        yearly.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_new_year_has_twelve_empty_months() {
        let year = Yearly::new(2022);
        assert_eq!(year.months().count(), 12);
        assert!(year.months().all(|(_, m)| m.is_empty()));
        assert_eq!(year.start_odometer, None);
        assert_eq!(year.end_odometer, None);
    }

    #[test]
    fn test_entry_routes_to_its_month_only() {
        let mut year = Yearly::new(2022);
        year.add_entry(&WorkEntry {
            pay: Some(75.0),
            day_hours: Some(3.0),
            ..entry_on("2022-08-15")
        });

        assert_eq!(year.month(Month::August).pay, 75.0);
        assert_eq!(year.month(Month::August).hours, 3.0);
        for (month, totals) in year.months() {
            if month != Month::August {
                assert!(totals.is_empty(), "{:?} should be empty", month);
            }
        }
    }

    #[test]
    fn test_entry_from_other_year_is_not_filtered() {
        let mut year = Yearly::new(2022);
        year.add_entry(&WorkEntry {
            pay: Some(10.0),
            ..entry_on("2019-02-01")
        });
        assert_eq!(year.month(Month::February).pay, 10.0);
    }

    #[test]
    fn test_odometer_bounds_widen() {
        let mut year = Yearly::new(2022);
        year.add_entry(&odometer_entry("2022-01-03", 100.0, 150.0));
        year.add_entry(&odometer_entry("2022-01-04", 80.0, 140.0));
        year.add_entry(&odometer_entry("2022-01-05", 120.0, 200.0));

        assert_eq!(year.start_odometer, Some(80.0));
        assert_eq!(year.end_odometer, Some(200.0));
        assert_eq!(year.total_miles(), 120.0);
    }

    #[test]
    fn test_zero_odometer_readings_are_ignored() {
        let mut year = Yearly::new(2022);
        year.add_entry(&odometer_entry("2022-01-03", 0.0, 0.0));
        assert_eq!(year.start_odometer, None);
        assert_eq!(year.end_odometer, None);

        year.add_entry(&odometer_entry("2022-01-04", 500.0, 0.0));
        assert_eq!(year.start_odometer, Some(500.0));
        assert_eq!(year.end_odometer, None);
        assert_eq!(year.total_miles(), 0.0);
    }

    #[test]
    fn test_year_totals_sum_months() {
        let mut year = Yearly::new(2022);
        year.add_entry(&WorkEntry {
            day_hours: Some(4.0),
            mileage: Some(40.0),
            pay: Some(60.0),
            other_pay: Some(10.0),
            cash_tips: Some(10.0),
            ..entry_on("2022-01-10")
        });
        year.add_entry(&WorkEntry {
            night_hours: Some(4.0),
            mileage: Some(60.0),
            pay: Some(90.0),
            cash_tips: Some(30.0),
            ..entry_on("2022-09-10")
        });

        assert_eq!(year.reported_pay(), 160.0);
        assert_eq!(year.cash_tips(), 40.0);
        assert_eq!(year.total_pay(), 200.0);
        assert_eq!(year.hours(), 8.0);
        assert_eq!(year.mileage(), 100.0);
        assert_eq!(year.hourly(), 25.0);
    }

    #[test]
    fn test_adjustments_feed_reported_pay() {
        let mut year = Yearly::new(2022);
        year.add_entry(&WorkEntry {
            pay: Some(100.0),
            ..entry_on("2022-04-01")
        });
        year.add_adjustment(&BasePayAdjustment {
            date: NaiveDate::from_ymd_opt(2022, 4, 30).unwrap(),
            amount: 25.0,
        });
        year.add_adjustment(&BasePayAdjustment {
            date: NaiveDate::from_ymd_opt(2022, 5, 30).unwrap(),
            amount: -5.0,
        });

        assert_eq!(year.base_pay_adjustment, 20.0);
        assert_eq!(year.reported_pay(), 120.0);
        assert_eq!(year.month(Month::April).reported_pay(), 100.0);
    }

    #[test]
    fn test_business_mileage_percent() {
        let mut year = Yearly::new(2022);
        year.add_entry(&WorkEntry {
            mileage: Some(150.0),
            ..odometer_entry("2022-06-01", 1000.0, 1200.0)
        });

        assert_eq!(year.non_business_miles(), 50.0);
        assert_eq!(year.business_mileage_percent(), 0.75);
    }

    #[test]
    fn test_business_mileage_percent_without_odometer_is_non_finite() {
        let mut year = Yearly::new(2022);
        year.add_entry(&WorkEntry {
            mileage: Some(30.0),
            ..entry_on("2022-06-01")
        });

        assert_eq!(year.total_miles(), 0.0);
        assert_eq!(year.business_mileage_percent(), f64::INFINITY);
        assert!(Yearly::new(2022).business_mileage_percent().is_nan());
    }

    #[test]
    fn test_hourly_without_hours_is_non_finite() {
        let year = Yearly::new(2022);
        assert!(year.hourly().is_nan());
    }

    #[test]
    fn test_equality_ignores_contents() {
        let empty = Yearly::new(2022);
        let mut busy = Yearly::new(2022);
        busy.add_entry(&WorkEntry {
            pay: Some(500.0),
            ..entry_on("2022-03-03")
        });

        assert_eq!(empty, busy);
        assert_eq!(hash_of(&empty), hash_of(&busy));
        assert_ne!(empty, Yearly::new(2021));
    }

    #[test]
    fn test_set_deduplicates_by_year() {
        let mut set = HashSet::new();
        set.insert(Yearly::new(2021));
        set.insert(Yearly::new(2022));
        let mut duplicate = Yearly::new(2022);
        duplicate.add_adjustment(&BasePayAdjustment {
            date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            amount: 1.0,
        });

        assert!(!set.insert(duplicate));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_mileage_deduction_uses_monthly_rates() {
        let rates = RateTable::standard();
        let mut year = Yearly::new(2022);
        year.add_entry(&WorkEntry {
            mileage: Some(100.0),
            day_hours: Some(10.0),
            pay: Some(300.0),
            ..entry_on("2022-03-01")
        });
        year.add_entry(&WorkEntry {
            mileage: Some(100.0),
            day_hours: Some(10.0),
            pay: Some(300.0),
            ..entry_on("2022-10-01")
        });

        // 100 * 0.585 + 100 * 0.625
        let deduction = year.mileage_deduction(&rates);
        assert!((deduction - 121.0).abs() < 1e-9);
        assert!((year.net_pay(&rates) - 479.0).abs() < 1e-9);
        assert!((year.net_hourly(&rates) - 23.95).abs() < 1e-9);
    }

    #[test]
    fn test_mileage_deduction_for_unknown_year_is_zero() {
        let rates = RateTable::standard();
        let mut year = Yearly::new(1999);
        year.add_entry(&WorkEntry {
            mileage: Some(100.0),
            ..entry_on("1999-03-01")
        });
        assert_eq!(year.mileage_deduction(&rates), 0.0);
    }

    #[test]
    fn test_expense_breakdown() {
        let mut year = Yearly::new(2022);
        year.add_expense("fuel", 40.0);
        year.add_expense("maintenance", 120.0);
        year.add_expense("fuel", 35.5);

        assert_eq!(year.expenses().get("fuel"), Some(&75.5));
        assert_eq!(year.total_expenses(), 195.5);
    }

    #[test]
    fn test_merge_combines_partial_reports() {
        let mut first = Yearly::new(2022);
        first.add_entry(&WorkEntry {
            pay: Some(50.0),
            ..odometer_entry("2022-02-01", 100.0, 150.0)
        });
        first.add_expense("fuel", 10.0);

        let mut second = Yearly::new(2022);
        second.add_entry(&WorkEntry {
            pay: Some(70.0),
            ..odometer_entry("2022-02-02", 90.0, 140.0)
        });
        second.add_entry(&WorkEntry {
            pay: Some(5.0),
            ..entry_on("2022-11-02")
        });
        second.add_adjustment(&BasePayAdjustment {
            date: NaiveDate::from_ymd_opt(2022, 11, 3).unwrap(),
            amount: 12.0,
        });
        second.add_expense("fuel", 15.0);

        first.merge(&second);

        assert_eq!(first.month(Month::February).pay, 120.0);
        assert_eq!(first.month(Month::November).pay, 5.0);
        assert_eq!(first.base_pay_adjustment, 12.0);
        assert_eq!(first.start_odometer, Some(90.0));
        assert_eq!(first.end_odometer, Some(150.0));
        assert_eq!(first.expenses().get("fuel"), Some(&25.0));
    }

    #[test]
    fn test_merge_with_unset_bounds_keeps_existing() {
        let mut first = Yearly::new(2022);
        first.add_entry(&odometer_entry("2022-02-01", 100.0, 150.0));
        first.merge(&Yearly::new(2022));

        assert_eq!(first.start_odometer, Some(100.0));
        assert_eq!(first.end_odometer, Some(150.0));
    }
}
