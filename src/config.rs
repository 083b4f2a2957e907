use crate::error::ConfigError;
use crate::guards::GuardPolicy;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

pub const SAFE_ENV: &str = "CIRCULAR_ENUM_SAFE";
pub const GUARD_POLICY_ENV: &str = "CIRCULAR_ENUM_GUARD_POLICY";

/// Factory settings.
///
/// `safe` selects whether created values are guarded; `policy` decides what
/// the guard does with a write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumConfig {
    pub safe: bool,
    pub policy: GuardPolicy,
}

impl EnumConfig {
    pub fn with_safe(mut self, safe: bool) -> Self {
        self.safe = safe;
        self
    }

    pub fn with_policy(mut self, policy: GuardPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Reads `CIRCULAR_ENUM_SAFE` and `CIRCULAR_ENUM_GUARD_POLICY`, keeping
    /// defaults for whichever is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`EnumConfig::from_env`] with a caller-supplied variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(SAFE_ENV) {
            config.safe = parse_flag(SAFE_ENV, &raw)?;
        }

        if let Some(raw) = lookup(GUARD_POLICY_ENV) {
            config.policy =
                GuardPolicy::from_str(raw.trim()).map_err(|_| ConfigError::InvalidValue {
                    key: GUARD_POLICY_ENV,
                    value: raw.clone(),
                })?;
        }

        Ok(config)
    }
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
        }),
    }
}
