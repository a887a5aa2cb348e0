//! Configuration system for Datemark.
//!
//! Load solver configuration from TOML or YAML to control the sweep budget,
//! parallelism, contradiction handling and the query date without code
//! changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use datemark_config::{SolverConfig, ThreadCount};
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     thread_count = "auto"
//!
//!     [termination]
//!     sweep_count_limit = 12
//!
//!     [query]
//!     target_date = "1999-12-31"
//! "#).unwrap();
//!
//! assert_eq!(config.sweep_limit(), 12);
//! assert_eq!(config.thread_count, ThreadCount::Auto);
//! assert_eq!(config.target_date().to_string(), "1999-12-31");
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use datemark_config::SolverConfig;
//!
//! let config = SolverConfig::load("datemark.toml").unwrap_or_default();
//! assert_eq!(config.sweep_limit(), 30);
//! ```

use std::path::Path;

use chrono::NaiveDate;
use datemark_core::DatemarkError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sweep budget used when none is configured.
pub const DEFAULT_SWEEP_COUNT_LIMIT: u64 = 30;

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

impl From<ConfigError> for DatemarkError {
    fn from(err: ConfigError) -> Self {
        DatemarkError::Config(err.to_string())
    }
}

/// Main solver configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Threads used to constrain distinct entities within one sweep.
    #[serde(default)]
    pub thread_count: ThreadCount,

    /// What to do when an entity's observations contradict each other.
    #[serde(default)]
    pub contradiction_policy: ContradictionPolicy,

    /// Termination configuration.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,

    /// Query configuration.
    #[serde(default)]
    pub query: QueryConfig,
}

impl SolverConfig {
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
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that deserialize fine but cannot drive a solve.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sweep_limit() == 0 {
            return Err(ConfigError::Invalid(
                "sweep_count_limit must be at least 1".to_string(),
            ));
        }
        if self.thread_count == ThreadCount::Count(0) {
            return Err(ConfigError::Invalid(
                "thread_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the maximum number of sweeps.
    pub fn with_sweep_limit(mut self, sweeps: u64) -> Self {
        self.termination = Some(TerminationConfig {
            sweep_count_limit: Some(sweeps),
        });
        self
    }

    /// Sets the thread count.
    pub fn with_thread_count(mut self, thread_count: ThreadCount) -> Self {
        self.thread_count = thread_count;
        self
    }

    /// Sets the contradiction policy.
    pub fn with_contradiction_policy(mut self, policy: ContradictionPolicy) -> Self {
        self.contradiction_policy = policy;
        self
    }

    /// Sets the date the query evaluator matches against.
    pub fn with_target_date(mut self, date: NaiveDate) -> Self {
        self.query.target_date = date;
        self
    }

    /// Returns the sweep budget, falling back to [`DEFAULT_SWEEP_COUNT_LIMIT`].
    pub fn sweep_limit(&self) -> u64 {
        self.termination
            .as_ref()
            .map(TerminationConfig::sweep_limit)
            .unwrap_or(DEFAULT_SWEEP_COUNT_LIMIT)
    }

    /// Returns the configured query date.
    pub fn target_date(&self) -> NaiveDate {
        self.query.target_date
    }
}

/// Thread count configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadCount {
    /// Sweep entities one after another.
    #[default]
    None,

    /// Use rayon's global pool.
    Auto,

    /// Dedicated pool with a specific number of threads.
    Count(usize),
}

impl ThreadCount {
    /// Returns true if sweeps should fan out over threads.
    pub fn is_parallel(&self) -> bool {
        !matches!(self, ThreadCount::None)
    }
}

/// Handling of profiles that end up with an empty candidate set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContradictionPolicy {
    /// Keep the profile as permanently unsolved and carry on.
    #[default]
    Unsolved,

    /// Abort the solve with an error.
    Fail,
}

/// Termination configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum number of full sweeps over the corpus.
    pub sweep_count_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the sweep budget, if set, else the default.
    pub fn sweep_limit(&self) -> u64 {
        self.sweep_count_limit.unwrap_or(DEFAULT_SWEEP_COUNT_LIMIT)
    }
}

/// Query configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct QueryConfig {
    /// Calendar date entities are matched against.
    #[serde(default = "default_target_date")]
    pub target_date: NaiveDate,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            target_date: default_target_date(),
        }
    }
}

fn default_target_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2001, 9, 11).unwrap_or_default()
}
