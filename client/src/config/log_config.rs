use common::config::Validate;
use common::logger::LogLevel;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct LogConfig {
    pub level: LogLevel,
    #[serde(default)]
    pub prefix: Option<String>,
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), String> {
        if self.prefix.as_deref().is_some_and(str::is_empty) {
            return Err("log prefix must not be empty when set".to_string());
        }
        Ok(())
    }
}
