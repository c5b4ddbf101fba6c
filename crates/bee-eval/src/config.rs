//! Interpreter configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Host-tunable interpreter settings.
///
/// Missing fields take their defaults, so `{}` is a valid configuration.
/// The `while` iteration ceiling is fixed and has no field here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    /// Binding that names the actor for `move(dir)`, `moveto`, single-argument
    /// `attack` and `isPathBlocked`.
    pub actor_binding: String,
    /// Delay inserted at every suspension point by paced runs.
    pub pacing_delay_ms: u64,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            actor_binding: "Player".to_string(),
            pacing_delay_ms: 500,
        }
    }
}

impl InterpreterConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.actor_binding.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "actor_binding",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn pacing_delay(&self) -> Duration {
        Duration::from_millis(self.pacing_delay_ms)
    }
}
