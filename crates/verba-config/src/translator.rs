use std::env;

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "http://localhost:8080/api/v1".to_string()
}

fn default_provider() -> String {
    "openai".to_string()
}

fn default_target_lang() -> String {
    "English".to_string()
}

fn default_mode() -> String {
    "auto".to_string()
}

fn default_quality() -> String {
    "optimal".to_string()
}

/// Backend endpoint, credentials and the default request selectors.
///
/// Selectors are kept as raw strings; they are validated when a request is built.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Empty lets the backend detect the language
    #[serde(default)]
    pub source_lang: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default = "default_quality")]
    pub quality: String,
    #[serde(default)]
    pub ipa: bool,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: String::new(),
            provider: default_provider(),
            source_lang: String::new(),
            target_lang: default_target_lang(),
            mode: default_mode(),
            quality: default_quality(),
            ipa: false,
        }
    }
}

impl TranslatorConfig {
    /// Defaults overridden by `VERBA_*` environment variables
    pub fn new() -> Self {
        let defaults = Self::default();

        Self {
            api_url: env::var("VERBA_API_URL").unwrap_or(defaults.api_url),
            api_key: env::var("VERBA_API_KEY").unwrap_or(defaults.api_key),
            provider: env::var("VERBA_PROVIDER").unwrap_or(defaults.provider),
            source_lang: env::var("VERBA_SOURCE_LANG").unwrap_or(defaults.source_lang),
            target_lang: env::var("VERBA_TARGET_LANG").unwrap_or(defaults.target_lang),
            mode: env::var("VERBA_MODE").unwrap_or(defaults.mode),
            quality: env::var("VERBA_QUALITY").unwrap_or(defaults.quality),
            ipa: env::var("VERBA_IPA")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.ipa),
        }
    }

    /// `None` when no key is configured
    pub fn api_key(&self) -> Option<String> {
        let key = self.api_key.trim();
        (!key.is_empty()).then(|| key.to_string())
    }
}
