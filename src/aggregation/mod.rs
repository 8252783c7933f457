//! Period aggregation of work entries.
//!
//! This module folds individual [`WorkEntry`](crate::models::WorkEntry)
//! records into monthly and yearly totals and derives pay, mileage and net
//! hourly figures from them. Accumulators are built fresh for each report
//! and are not meant to be shared between threads while being filled;
//! aggregate partitions separately and combine them with `merge`.

mod monthly;
mod summary;
mod yearly;

pub use monthly::Monthly;
pub use summary::summarize;
pub use yearly::Yearly;
