//! Trigger configuration parsed from environment variables.

use crate::endpoint::DEFAULT_BASE_URL;
use crate::error::ConfigError;

/// What the user sees when an invocation fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Diagnostic record only. Matches the original page behaviour.
    #[default]
    Silent,
    /// Diagnostic record, then a short notification.
    Surface,
}

impl FailurePolicy {
    /// Parse `silent` / `surface`. `None` yields the default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFailurePolicy`] for any other value.
    pub fn parse(raw: Option<&str>) -> Result<Self, ConfigError> {
        match raw.map(str::trim).unwrap_or("silent") {
            "silent" => Ok(Self::Silent),
            "surface" => Ok(Self::Surface),
            other => Err(ConfigError::InvalidFailurePolicy(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerConfig {
    pub base_url: String,
    pub failure_policy: FailurePolicy,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_owned(), failure_policy: FailurePolicy::default() }
    }
}

impl TriggerConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `SALDO_BASE_URL`: default `http://127.0.0.1:5000`
    /// - `SALDO_FAILURE_POLICY`: `silent` (default) or `surface`
    ///
    /// # Errors
    ///
    /// Returns an error if `SALDO_FAILURE_POLICY` holds an unknown value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var("SALDO_BASE_URL")
            .map(|v| v.trim().trim_end_matches('/').to_owned())
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        let failure_policy = FailurePolicy::parse(std::env::var("SALDO_FAILURE_POLICY").ok().as_deref())?;
        Ok(Self { base_url, failure_policy })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
