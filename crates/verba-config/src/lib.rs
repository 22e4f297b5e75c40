use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use self::translator::TranslatorConfig;

pub mod translator;

fn default_timeout_seconds() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub translator: TranslatorConfig,

    /// Whole-request timeout for the HTTP transport
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Default tracing filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translator: TranslatorConfig::default(),
            timeout_seconds: default_timeout_seconds(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let timeout_seconds = env::var("TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| default_log_level());

        Config {
            translator: TranslatorConfig::new(),
            timeout_seconds,
            log_level,
        }
    }

    /// Parse a JSON config, missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
