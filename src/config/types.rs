//! Configuration types for the work policy.
//!
//! This module contains the strongly-typed structures deserialized from the
//! policy YAML file, and the [`WorkPolicy`] value object that the
//! calculators receive. Thresholds are configuration, not constants: a
//! change in company policy or labor law must never require recompilation.

use serde::Deserialize;

use crate::models::WorkDuration;

/// Metadata about the policy file.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyMetadata {
    /// The human-readable name of the policy.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
}

/// Daily work thresholds.
#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdConfig {
    /// The contractually scheduled daily work duration.
    pub standard_daily: WorkDuration,
    /// The statutory daily duration above which overtime premium law
    /// applies; at least the standard threshold in practice.
    pub legal_daily: WorkDuration,
}

/// The late-night premium window, as offsets from midnight.
#[derive(Debug, Clone, Deserialize)]
pub struct LateNightConfig {
    /// Start of the late-night band (e.g. `"22:00"`).
    pub start: WorkDuration,
    /// End of the late-night band on the following morning (e.g. `"5:00"`).
    pub end: WorkDuration,
}

/// The complete policy file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyFile {
    /// Policy metadata.
    pub policy: PolicyMetadata,
    /// Daily work thresholds.
    pub thresholds: ThresholdConfig,
    /// Late-night window bounds.
    pub late_night: LateNightConfig,
}

/// The work-policy values the calculators operate under.
///
/// Passed explicitly into every calculation so tests can exercise
/// alternative thresholds and policy changes take effect without code
/// changes.
///
/// # Example
///
/// ```
/// use attendance_engine::config::WorkPolicy;
/// use attendance_engine::models::WorkDuration;
///
/// let policy = WorkPolicy::default();
/// assert_eq!(policy.standard_daily, WorkDuration::from_hm(8, 0));
/// assert_eq!(policy.inner_overtime_cap(), WorkDuration::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkPolicy {
    /// The contractually scheduled daily work duration.
    pub standard_daily: WorkDuration,
    /// The statutory daily work duration.
    pub legal_daily: WorkDuration,
    /// Start of the late-night band, as an offset from midnight.
    pub late_night_start: WorkDuration,
    /// End of the late-night band on the following morning.
    pub late_night_end: WorkDuration,
}

impl WorkPolicy {
    /// The room between the standard and legal thresholds.
    ///
    /// Overtime inside this cap is "inner" (within the legal threshold);
    /// the cap is zero when the thresholds coincide, making all overtime
    /// "outer".
    pub fn inner_overtime_cap(&self) -> WorkDuration {
        self.legal_daily.saturating_sub(self.standard_daily)
    }

    /// The three late-night windows on the midnight-extended timeline.
    ///
    /// A shift interval is laid out as offsets from its day's 00:00, with
    /// the end extended past 24h when the shift crosses midnight. The
    /// windows cover the tail of the previous night (`[0, end)`), tonight's
    /// band (`[start, 24h)`), and tomorrow's early morning
    /// (`[24h, 24h + end)`), so no midnight special-casing is needed.
    pub fn late_night_windows(&self) -> [(WorkDuration, WorkDuration); 3] {
        [
            (WorkDuration::ZERO, self.late_night_end),
            (self.late_night_start, WorkDuration::DAY),
            (WorkDuration::DAY, WorkDuration::DAY + self.late_night_end),
        ]
    }
}

impl Default for WorkPolicy {
    fn default() -> Self {
        Self {
            standard_daily: WorkDuration::from_hm(8, 0),
            legal_daily: WorkDuration::from_hm(8, 0),
            late_night_start: WorkDuration::from_hm(22, 0),
            late_night_end: WorkDuration::from_hm(5, 0),
        }
    }
}

impl From<&PolicyFile> for WorkPolicy {
    fn from(file: &PolicyFile) -> Self {
        Self {
            standard_daily: file.thresholds.standard_daily,
            legal_daily: file.thresholds.legal_daily,
            late_night_start: file.late_night.start,
            late_night_end: file.late_night.end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_values() {
        let policy = WorkPolicy::default();
        assert_eq!(policy.standard_daily.encode(), "8:00");
        assert_eq!(policy.legal_daily.encode(), "8:00");
        assert_eq!(policy.late_night_start.encode(), "22:00");
        assert_eq!(policy.late_night_end.encode(), "5:00");
    }

    #[test]
    fn test_inner_cap_zero_when_thresholds_equal() {
        assert_eq!(WorkPolicy::default().inner_overtime_cap(), WorkDuration::ZERO);
    }

    #[test]
    fn test_inner_cap_when_legal_exceeds_standard() {
        let policy = WorkPolicy {
            standard_daily: WorkDuration::from_hm(7, 30),
            legal_daily: WorkDuration::from_hm(8, 0),
            ..WorkPolicy::default()
        };
        assert_eq!(policy.inner_overtime_cap(), WorkDuration::from_minutes(30));
    }

    #[test]
    fn test_inner_cap_saturates_when_standard_exceeds_legal() {
        let policy = WorkPolicy {
            standard_daily: WorkDuration::from_hm(9, 0),
            legal_daily: WorkDuration::from_hm(8, 0),
            ..WorkPolicy::default()
        };
        assert_eq!(policy.inner_overtime_cap(), WorkDuration::ZERO);
    }

    #[test]
    fn test_late_night_windows_span_extended_timeline() {
        let windows = WorkPolicy::default().late_night_windows();
        assert_eq!(windows[0], (WorkDuration::ZERO, WorkDuration::from_hm(5, 0)));
        assert_eq!(windows[1], (WorkDuration::from_hm(22, 0), WorkDuration::DAY));
        assert_eq!(windows[2], (WorkDuration::DAY, WorkDuration::from_hm(29, 0)));
    }

    #[test]
    fn test_policy_file_deserializes_from_yaml() {
        let yaml = r#"
policy:
  name: Test policy
  version: "2025-04-01"
thresholds:
  standard_daily: "7:30"
  legal_daily: "8:00"
late_night:
  start: "22:00"
  end: "5:00"
"#;
        let file: PolicyFile = serde_yaml::from_str(yaml).unwrap();
        let policy = WorkPolicy::from(&file);
        assert_eq!(file.policy.name, "Test policy");
        assert_eq!(policy.standard_daily, WorkDuration::from_hm(7, 30));
        assert_eq!(policy.inner_overtime_cap(), WorkDuration::from_minutes(30));
    }

    #[test]
    fn test_policy_file_rejects_malformed_duration() {
        let yaml = r#"
policy:
  name: Test policy
  version: "2025-04-01"
thresholds:
  standard_daily: "eight hours"
  legal_daily: "8:00"
late_night:
  start: "22:00"
  end: "5:00"
"#;
        let result: Result<PolicyFile, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }
}
