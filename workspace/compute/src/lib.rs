//! Forecasting logic: prior-period resolution, availability checking, the
//! three-month-average predictor, and trend-series preparation for charting.

pub mod availability;
pub mod calendar;
pub mod error;
pub mod forecast;
pub mod trend;

pub use calendar::{LOOKBACK_MONTHS, MonthRef, lookback};
pub use error::{ComputeError, Result};
