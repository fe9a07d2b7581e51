//! Work-policy configuration for the attendance engine.
//!
//! This module loads the daily thresholds and the late-night window from a
//! YAML file and exposes them as an explicit [`WorkPolicy`] value passed
//! into the calculators.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded policy: {}", loader.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{LateNightConfig, PolicyFile, PolicyMetadata, ThresholdConfig, WorkPolicy};
