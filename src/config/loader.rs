//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the work
//! policy from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{PolicyFile, PolicyMetadata, WorkPolicy};

/// Loads and provides access to the work-policy configuration.
///
/// # Directory Structure
///
/// The configuration directory contains a single file:
/// ```text
/// config/default/
/// └── policy.yaml   # thresholds and late-night window
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Policy: {} ({})", loader.metadata().name, loader.metadata().version);
/// let policy = loader.work_policy();
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    file: PolicyFile,
    policy: WorkPolicy,
}

impl ConfigLoader {
    /// Loads the policy from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g. "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if the file is
    /// missing or contains invalid YAML. Unlike the lenient decoding of
    /// timesheet fields, a malformed threshold here is an error: running
    /// with a half-read policy would silently misclassify every day.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join("policy.yaml");
        let file = Self::load_yaml::<PolicyFile>(&policy_path)?;
        let policy = WorkPolicy::from(&file);

        Ok(Self { file, policy })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        &self.file.policy
    }

    /// Returns the work-policy values the calculators operate under.
    pub fn work_policy(&self) -> &WorkPolicy {
        &self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkDuration;

    fn config_path() -> &'static str {
        "./config/default"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.metadata().name, "Standard employment policy");
        assert_eq!(loader.metadata().version, "2025-04-01");
    }

    #[test]
    fn test_loaded_policy_values() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let policy = loader.work_policy();

        assert_eq!(policy.standard_daily, WorkDuration::from_hm(8, 0));
        assert_eq!(policy.legal_daily, WorkDuration::from_hm(8, 0));
        assert_eq!(policy.late_night_start, WorkDuration::from_hm(22, 0));
        assert_eq!(policy.late_night_end, WorkDuration::from_hm(5, 0));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }
}
