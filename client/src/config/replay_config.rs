use std::time::Duration;

use common::config::Validate;
use serde::{Deserialize, Serialize};

pub const MIN_REPLAY_INTERVAL_MS: u64 = 100;
pub const MAX_REPLAY_INTERVAL_MS: u64 = 10_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ReplayConfig {
    pub interval_ms: u64,
}

impl ReplayConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Validate for ReplayConfig {
    fn validate(&self) -> Result<(), String> {
        if !(MIN_REPLAY_INTERVAL_MS..=MAX_REPLAY_INTERVAL_MS).contains(&self.interval_ms) {
            return Err(format!(
                "replay interval_ms must be between {} and {}",
                MIN_REPLAY_INTERVAL_MS, MAX_REPLAY_INTERVAL_MS
            ));
        }
        Ok(())
    }
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            interval_ms: common::replay::DEFAULT_REPLAY_INTERVAL.as_millis() as u64,
        }
    }
}
