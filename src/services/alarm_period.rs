//! Alarm evaluation period selection.
//!
//! The monitoring backend only aggregates metrics at native resolution for a
//! fixed set of periods. The alarm watching the drifted-stacks metric must
//! evaluate over one of those periods, so the configured run cadence is
//! rounded up to the closest supported value. Rounding down would make the
//! alarm window look more reactive than the schedule actually is.

use std::time::Duration;
use thiserror::Error;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

/// Supported aggregation periods, ascending. First entry at or above the
/// requested interval wins; anything beyond seven days maps to thirty.
const SUPPORTED_PERIODS: [u64; 7] = [
    MINUTE,
    5 * MINUTE,
    15 * MINUTE,
    HOUR,
    6 * HOUR,
    DAY,
    7 * DAY,
];

const FALLBACK_PERIOD: u64 = 30 * DAY;

/// Error type for run-cadence validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PeriodError {
    #[error("Run interval of {0} seconds is below the 1 minute minimum")]
    IntervalTooShort(u64),
}

/// Round a run interval up to the closest natively supported
/// metric-aggregation period.
///
/// Pure and total; monotonic non-decreasing in its input and never shorter
/// than the interval it was given (up to the 30 day ceiling).
pub fn closest_supported_period(interval: Duration) -> Duration {
    let secs = interval.as_secs();
    let period = SUPPORTED_PERIODS
        .iter()
        .copied()
        .find(|&period| secs <= period)
        .unwrap_or(FALLBACK_PERIOD);
    Duration::from_secs(period)
}

/// Validate a scheduling cadence before it is handed to the trigger.
///
/// Policy of the scheduling collaborator, not the orchestrator: anything of
/// at least one minute is accepted.
pub fn validate_run_interval(interval: Duration) -> Result<(), PeriodError> {
    if interval.as_secs() < MINUTE {
        return Err(PeriodError::IntervalTooShort(interval.as_secs()));
    }
    Ok(())
}
