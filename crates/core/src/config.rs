use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} delay must be positive")]
    ZeroDelay(&'static str),
    #[error("match confirmation must be shorter than mismatch cooldown")]
    ConfirmNotShorter,
}

/// Delay tuning for delayed pair resolution. The exact values are
/// presentation tuning, not behavioral contract; the only hard rule is
/// that a confirmed match resolves faster than a mismatch cooldown.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    pub match_confirm: Duration,
    pub mismatch_cooldown: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            match_confirm: Duration::from_millis(140),
            mismatch_cooldown: Duration::from_millis(650),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.match_confirm.is_zero() {
            return Err(ConfigError::ZeroDelay("match confirmation"));
        }
        if self.mismatch_cooldown.is_zero() {
            return Err(ConfigError::ZeroDelay("mismatch cooldown"));
        }
        if self.match_confirm >= self.mismatch_cooldown {
            return Err(ConfigError::ConfirmNotShorter);
        }
        Ok(())
    }
}
