//! Configuration system for Rota.
//!
//! Load scheduler configuration from TOML or YAML to control termination,
//! hard rules, heuristic weights and search behaviour without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use rota_config::{ProximityPreference, SchedulerConfig};
//! use std::time::Duration;
//!
//! let config = SchedulerConfig::from_toml_str(r#"
//!     random_seed = 7
//!     keep_top_count = 5
//!
//!     [termination]
//!     seconds_spent_limit = 10
//!
//!     [[rules.minimum_rest]]
//!     inconvenience_less_or_equal_than = 50.0
//!     minimum_rest_minutes = 480
//!
//!     [heuristics]
//!     slot_proximity_weight = 0.0
//!     proximity_preference = "cluster"
//! "#).unwrap();
//!
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(10)));
//! assert_eq!(config.keep_top_count, 5);
//! assert_eq!(config.rules.minimum_rest.len(), 1);
//! assert_eq!(config.heuristics.proximity_preference, ProximityPreference::Cluster);
//! assert_eq!(config.heuristics.slot_equality_weight, 50.0);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use rota_config::SchedulerConfig;
//!
//! let config = SchedulerConfig::load("rota.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;
use std::time::Duration;

use rota_core::{Minutes, RotaError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Time budget used when no termination is configured at all.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(30);

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for RotaError {
    fn from(err: ConfigError) -> Self {
        RotaError::Config(err.to_string())
    }
}

/// Main scheduler configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SchedulerConfig {
    /// Random seed for reproducible results.
    pub random_seed: Option<u64>,

    /// Number of best schedules kept in the result pool.
    pub keep_top_count: usize,

    /// Whether approved leave blocks assignments.
    pub respect_leave_schedule: bool,

    /// Termination configuration.
    pub termination: Option<TerminationConfig>,

    /// Optional hard rules.
    pub rules: RulesConfig,

    /// Soft objective weights.
    pub heuristics: HeuristicsConfig,

    /// Candidate generation tuning.
    pub search: SearchConfig,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            random_seed: None,
            keep_top_count: 10,
            respect_leave_schedule: true,
            termination: None,
            rules: RulesConfig::default(),
            heuristics: HeuristicsConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl SchedulerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the result pool size.
    pub fn with_keep_top_count(mut self, count: usize) -> Self {
        self.keep_top_count = count;
        self
    }

    pub fn with_respect_leave_schedule(mut self, respect: bool) -> Self {
        self.respect_leave_schedule = respect;
        self
    }

    /// Sets the termination time limit.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the termination time limit in milliseconds.
    pub fn with_termination_millis(mut self, millis: u64) -> Self {
        self.termination = Some(TerminationConfig {
            millis_spent_limit: Some(millis),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Stops after this many proposals.
    pub fn with_step_count_limit(mut self, steps: u64) -> Self {
        self.termination = Some(TerminationConfig {
            step_count_limit: Some(steps),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Stops after this many proposals without a pool improvement.
    pub fn with_unimproved_step_count_limit(mut self, steps: u64) -> Self {
        self.termination = Some(TerminationConfig {
            unimproved_step_count_limit: Some(steps),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Adds a minimum rest tier.
    pub fn with_rest_tier(
        mut self,
        inconvenience_less_or_equal_than: f64,
        minimum_rest_minutes: Minutes,
    ) -> Self {
        self.rules.minimum_rest.push(RestTier {
            inconvenience_less_or_equal_than,
            minimum_rest_minutes,
        });
        self
    }

    /// Limits the days a worker may go without a shift.
    pub fn with_max_interval_between_shifts(mut self, days: u32) -> Self {
        self.rules.max_interval_between_shifts_days = Some(days);
        self
    }

    pub fn with_minimum_shifts_per_week(mut self, rule: WeeklyMinimumRule) -> Self {
        self.rules.minimum_shifts_per_week = Some(rule);
        self
    }

    pub fn with_first_shift_after_extended_leave(mut self, rule: ExtendedLeaveRule) -> Self {
        self.rules.first_shift_after_extended_leave = Some(rule);
        self
    }

    pub fn with_heuristics(mut self, heuristics: HeuristicsConfig) -> Self {
        self.heuristics = heuristics;
        self
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Returns the termination time limit, if configured.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }

    /// Returns true if no termination condition is configured.
    ///
    /// Such runs fall back to [`DEFAULT_TIME_LIMIT`].
    pub fn is_unbounded(&self) -> bool {
        self.termination
            .as_ref()
            .map_or(true, TerminationConfig::is_empty)
    }

    /// Checks value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.keep_top_count == 0 {
            return Err(invalid("keep_top_count must be at least 1"));
        }
        self.rules.validate()?;
        self.heuristics.validate()?;
        self.search.validate()
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(message.into())
}

/// Termination configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds to spend solving.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum milliseconds to spend solving, added to the seconds limit.
    pub millis_spent_limit: Option<u64>,

    /// Maximum number of proposals.
    pub step_count_limit: Option<u64>,

    /// Maximum proposals without a pool improvement.
    pub unimproved_step_count_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        let millis = self
            .seconds_spent_limit
            .unwrap_or(0)
            .saturating_mul(1000)
            .saturating_add(self.millis_spent_limit.unwrap_or(0));
        if millis > 0 {
            Some(Duration::from_millis(millis))
        } else {
            None
        }
    }

    /// Returns true if no limit is set.
    pub fn is_empty(&self) -> bool {
        self.time_limit().is_none()
            && self.step_count_limit.is_none()
            && self.unimproved_step_count_limit.is_none()
    }
}

/// Optional hard rules. Unset rules are not checked.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct RulesConfig {
    /// Rest required after a shift, by shift inconvenience.
    pub minimum_rest: Vec<RestTier>,

    /// Maximum days a worker may go without a shift.
    pub max_interval_between_shifts_days: Option<u32>,

    pub minimum_shifts_per_week: Option<WeeklyMinimumRule>,

    pub first_shift_after_extended_leave: Option<ExtendedLeaveRule>,
}

impl RulesConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for tier in &self.minimum_rest {
            if tier.minimum_rest_minutes < 0 {
                return Err(invalid(format!(
                    "minimum_rest_minutes must not be negative, got {}",
                    tier.minimum_rest_minutes
                )));
            }
            if tier.inconvenience_less_or_equal_than.is_nan() {
                return Err(invalid("inconvenience_less_or_equal_than must be a number"));
            }
        }
        if self.max_interval_between_shifts_days == Some(0) {
            return Err(invalid("max_interval_between_shifts_days must be at least 1"));
        }
        if let Some(rule) = &self.first_shift_after_extended_leave {
            if rule.minimum_continuous_days == 0 {
                return Err(invalid("minimum_continuous_days must be at least 1"));
            }
        }
        Ok(())
    }
}

/// Minimum rest after shifts up to a given inconvenience.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RestTier {
    pub inconvenience_less_or_equal_than: f64,
    pub minimum_rest_minutes: Minutes,
}

/// Minimum number of standard-workday shifts per 7-day window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct WeeklyMinimumRule {
    pub min_shifts: u32,

    /// Day of the horizon on which the first window starts.
    #[serde(default)]
    pub week_start_offset_days: u32,
}

impl WeeklyMinimumRule {
    pub fn new(min_shifts: u32) -> Self {
        Self {
            min_shifts,
            week_start_offset_days: 0,
        }
    }

    pub fn with_week_start_offset(mut self, days: u32) -> Self {
        self.week_start_offset_days = days;
        self
    }
}

/// Assigns the first slot after a long leave to the returning worker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ExtendedLeaveRule {
    pub minimum_continuous_days: u32,

    /// Leave types that count. Empty means every type.
    #[serde(default)]
    pub applicable_leave_types: Vec<String>,
}

impl ExtendedLeaveRule {
    pub fn new(minimum_continuous_days: u32) -> Self {
        Self {
            minimum_continuous_days,
            applicable_leave_types: Vec::new(),
        }
    }

    pub fn with_leave_type(mut self, leave_type: impl Into<String>) -> Self {
        self.applicable_leave_types.push(leave_type.into());
        self
    }

    pub fn applies_to(&self, leave_type: &str) -> bool {
        self.applicable_leave_types.is_empty()
            || self.applicable_leave_types.iter().any(|t| t == leave_type)
    }
}

/// Heuristic weights. A weight of zero disables the heuristic.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct HeuristicsConfig {
    pub inconvenience_equality_weight: f64,
    pub slot_equality_weight: f64,
    pub slot_proximity_weight: f64,
    pub non_workday_first_shift_weight: f64,
    pub proximity_preference: ProximityPreference,
    /// Expected non-workdays in a week, in `[0, 7]`.
    pub non_workdays_per_week: f64,
}

impl Default for HeuristicsConfig {
    fn default() -> Self {
        Self {
            inconvenience_equality_weight: 50.0,
            slot_equality_weight: 50.0,
            slot_proximity_weight: 50.0,
            non_workday_first_shift_weight: 50.0,
            proximity_preference: ProximityPreference::default(),
            non_workdays_per_week: 2.0,
        }
    }
}

impl HeuristicsConfig {
    /// All heuristics disabled.
    pub fn disabled() -> Self {
        Self {
            inconvenience_equality_weight: 0.0,
            slot_equality_weight: 0.0,
            slot_proximity_weight: 0.0,
            non_workday_first_shift_weight: 0.0,
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            ("inconvenience_equality_weight", self.inconvenience_equality_weight),
            ("slot_equality_weight", self.slot_equality_weight),
            ("slot_proximity_weight", self.slot_proximity_weight),
            ("non_workday_first_shift_weight", self.non_workday_first_shift_weight),
        ];
        for (name, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(invalid(format!(
                    "{name} must be a finite non-negative number, got {weight}"
                )));
            }
        }
        if !(0.0..=7.0).contains(&self.non_workdays_per_week) {
            return Err(invalid(format!(
                "non_workdays_per_week must be within [0, 7], got {}",
                self.non_workdays_per_week
            )));
        }
        Ok(())
    }
}

/// How the slot proximity heuristic rates gaps between a worker's shifts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProximityPreference {
    /// Shifts evenly spread at the expected period.
    #[default]
    Spread,

    /// Shifts bunched together.
    Cluster,
}

/// Candidate generation tuning.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SearchConfig {
    /// Probability of mutating a pool member instead of constructing anew.
    pub mutation_rate: f64,

    /// Slots reassigned per mutation.
    pub mutation_size: usize,

    /// Publish progress every this many proposals.
    pub report_interval_cycles: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            mutation_rate: 0.5,
            mutation_size: 2,
            report_interval_cycles: 100,
        }
    }
}

impl SearchConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(invalid(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.mutation_size == 0 {
            return Err(invalid("mutation_size must be at least 1"));
        }
        if self.report_interval_cycles == 0 {
            return Err(invalid("report_interval_cycles must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
