//! Built-in IRS standard mileage rates.

use rust_decimal::Decimal;

use super::table::{RateTable, YearSchedule};

/// IRS business standard mileage rates in mills (thousandths of a dollar),
/// keyed by year, as `(through_month, rate)` cutoffs.
const IRS_STANDARD_RATES: &[(i32, &[(u32, i64)])] = &[
    (2011, &[(6, 510), (12, 555)]),
    (2012, &[(12, 555)]),
    (2013, &[(12, 565)]),
    (2014, &[(12, 560)]),
    (2015, &[(12, 575)]),
    (2016, &[(12, 540)]),
    (2017, &[(12, 535)]),
    (2018, &[(12, 545)]),
    (2019, &[(12, 580)]),
    (2020, &[(12, 575)]),
    (2021, &[(12, 560)]),
    (2022, &[(6, 585), (12, 625)]),
    (2023, &[(12, 655)]),
];

impl RateTable {
    /// Returns the built-in IRS standard mileage rate table (2011-2023).
    pub fn standard() -> Self {
        let schedules = IRS_STANDARD_RATES
            .iter()
            .map(|&(year, cutoffs)| {
                let cutoffs: Vec<(u32, Decimal)> = cutoffs
                    .iter()
                    .map(|&(month, mills)| (month, Decimal::new(mills, 3)))
                    .collect();
                YearSchedule::trusted(year, &cutoffs)
            })
            .collect();

        RateTable::from_sorted(schedules)
    }
}
