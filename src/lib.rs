//! Attendance time-calculation and report workflow engine.
//!
//! This crate derives the legally distinct labor-time buckets (scheduled work,
//! statutory overtime, late-night work, holiday work) from raw daily time
//! records, aggregates them into monthly totals, and drives the monthly
//! report through its submit/approve/finalize lifecycle.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod workflow;
