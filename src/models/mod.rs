//! Plain data records consumed by the ledger.
//!
//! These are owned by the persistence layer; the ledger reads them and
//! never mutates them.

mod adjustment;
mod work_entry;

pub use adjustment::BasePayAdjustment;
pub use work_entry::{WorkEntry, or_zero};
