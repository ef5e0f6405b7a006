//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ChainConfig, FreshnessConfig, LoggingConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`ORO_*`)
/// 2. Config file (when loaded through [`OroConfig::load`])
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OroConfig {
    pub freshness: FreshnessConfig,
    pub chain: ChainConfig,
    pub logging: LoggingConfig,
}

impl OroConfig {
    /// Load a TOML config file, apply `ORO_*` overrides, and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let mut config: OroConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        let applied = config.apply_env_overrides();
        config.validate_with_overrides(&applied)?;
        Ok(config)
    }

    /// Compiled defaults with `ORO_*` overrides applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_overrides(|key| std::env::var(key).ok())
    }

    /// Compiled defaults with overrides read from `var`, then validated.
    pub fn from_overrides<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let applied = config.apply_overrides_from(var);
        config.validate_with_overrides(&applied)?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: OroConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Vec<AppliedOverride> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides using an arbitrary variable source and report which
    /// ones took effect. Values that fail to parse are ignored.
    pub fn apply_overrides_from<F>(&mut self, var: F) -> Vec<AppliedOverride>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut applied = Vec::new();
        let mut record = |name: &'static str, field: &'static str, value: String| {
            applied.push(AppliedOverride { var: name, field, value });
        };

        if let Some(raw) = var("ORO_HALF_LIFE_DAYS") {
            if let Ok(v) = raw.parse::<f64>() {
                self.freshness.half_life_days = v;
                record("ORO_HALF_LIFE_DAYS", "freshness.half_life_days", raw);
            }
        }
        if let Some(raw) = var("ORO_SUPERSESSION_PENALTY") {
            if let Ok(v) = raw.parse::<f64>() {
                self.freshness.supersession_penalty = v;
                record("ORO_SUPERSESSION_PENALTY", "freshness.supersession_penalty", raw);
            }
        }
        if let Some(raw) = var("ORO_MAX_CHAIN_LENGTH") {
            if let Ok(v) = raw.parse::<usize>() {
                self.chain.max_chain_length = v;
                record("ORO_MAX_CHAIN_LENGTH", "chain.max_chain_length", raw);
            }
        }
        if let Some(raw) = var("ORO_LOG_LEVEL") {
            self.logging.level = raw.clone();
            record("ORO_LOG_LEVEL", "logging.level", raw);
        }
        applied
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.freshness.validate()?;
        self.chain.validate()
    }

    /// Validate, blaming the `ORO_*` variable when an override set the
    /// offending field.
    pub fn validate_with_overrides(&self, applied: &[AppliedOverride]) -> Result<(), ConfigError> {
        self.validate().map_err(|err| match err {
            ConfigError::ValidationFailed { field, message } => {
                match applied.iter().find(|o| o.field == field) {
                    Some(o) => ConfigError::OverrideRejected {
                        var: o.var.to_string(),
                        value: o.value.clone(),
                        field,
                        message,
                    },
                    None => ConfigError::ValidationFailed { field, message },
                }
            }
            other => other,
        })
    }
}

/// An `ORO_*` variable that replaced a config value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedOverride {
    pub var: &'static str,
    pub field: &'static str,
    pub value: String,
}

pub(crate) fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
