//! Service layer: pure business-logic helpers.

pub mod alarm_period;

pub use alarm_period::{closest_supported_period, validate_run_interval, PeriodError};
