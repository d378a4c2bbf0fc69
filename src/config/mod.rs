//! Runtime configuration for a blueprint run.
//!
//! Values come from the command line today, but validation lives here so
//! the library can be driven by other front ends without re-checking the
//! same constraints at every call site.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

use crate::keywords::DEFAULT_TOP_KEYWORDS;

const DEFAULT_BRAND_NAME: &str = "Butter";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Validated pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    brand_name: String,
    timeout_secs: u64,
    top_keywords: usize,
}

impl Config {
    pub fn new(
        brand_name: impl Into<String>,
        timeout_secs: u64,
        top_keywords: usize,
    ) -> Result<Self, ConfigError> {
        let brand_name = brand_name.into();
        if brand_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "brand_name",
                reason: "must not be empty".to_string(),
            });
        }
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be a positive number of seconds".to_string(),
            });
        }
        if top_keywords == 0 {
            return Err(ConfigError::InvalidValue {
                field: "top_keywords",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(Self {
            brand_name,
            timeout_secs,
            top_keywords,
        })
    }

    /// Brand name used throughout the rendered plan.
    pub fn brand_name(&self) -> &str {
        &self.brand_name
    }
    /// Per-request timeout for each HTTP fetch.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
    /// How many ranked keywords to surface in the plan.
    pub fn top_keywords(&self) -> usize {
        self.top_keywords
    }

    /// The defaults the CLI advertises.
    pub fn default() -> Self {
        // not `Default` impl yet to keep explicit semantics
        Self {
            brand_name: DEFAULT_BRAND_NAME.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            top_keywords: DEFAULT_TOP_KEYWORDS,
        }
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
