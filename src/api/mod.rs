//! HTTP API module for the mileage ledger.
//!
//! This module exposes rate lookups and year summaries over HTTP for
//! report views. It holds no state beyond the shared rate table.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::SummaryRequest;
pub use response::{
    ApiError, MonthlySummary, RateResponse, ScheduleResponse, SummaryResponse, YearlySummary,
};
pub use state::AppState;
