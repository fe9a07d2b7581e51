//! Calculation logic for the attendance engine.
//!
//! This module contains the pure derivation pipeline: the late-night
//! overlap calculation, the daily classification of worked time into the
//! seven duration buckets, and the monthly aggregation of daily summaries
//! into totals and day counts. Every function here is total and side-effect
//! free; incomplete input degrades to zero durations rather than errors.

mod daily;
mod late_night;
mod monthly;

pub use daily::compute_daily_summary;
pub use late_night::late_night_overlap;
pub use monthly::compute_monthly_summary;
