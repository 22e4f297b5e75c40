use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// How the remote service should treat the source text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationMode {
    #[default]
    Auto,
    Translate,
    Explain,
}

impl TranslationMode {
    pub const ALL: [TranslationMode; 3] = [
        TranslationMode::Auto,
        TranslationMode::Translate,
        TranslationMode::Explain,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TranslationMode::Auto => "auto",
            TranslationMode::Translate => "translate",
            TranslationMode::Explain => "explain",
        }
    }
}

impl fmt::Display for TranslationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TranslationMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| ValidationError::InvalidMode(value.to_string()))
    }
}

/// Effort the provider should spend on a translation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationQuality {
    Fast,
    #[default]
    Optimal,
    Thinking,
}

impl TranslationQuality {
    pub const ALL: [TranslationQuality; 3] = [
        TranslationQuality::Fast,
        TranslationQuality::Optimal,
        TranslationQuality::Thinking,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TranslationQuality::Fast => "fast",
            TranslationQuality::Optimal => "optimal",
            TranslationQuality::Thinking => "thinking",
        }
    }
}

impl fmt::Display for TranslationQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TranslationQuality {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        Self::ALL
            .into_iter()
            .find(|quality| quality.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| ValidationError::InvalidQuality(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!("auto".parse::<TranslationMode>(), Ok(TranslationMode::Auto));
        assert_eq!(" Explain ".parse::<TranslationMode>(), Ok(TranslationMode::Explain));
        assert_eq!(
            "shout".parse::<TranslationMode>(),
            Err(ValidationError::InvalidMode("shout".to_string()))
        );
    }

    #[test]
    fn test_quality_parsing() {
        assert_eq!("THINKING".parse::<TranslationQuality>(), Ok(TranslationQuality::Thinking));
        assert_eq!(
            "".parse::<TranslationQuality>(),
            Err(ValidationError::InvalidQuality(String::new()))
        );
    }

    #[test]
    fn test_defaults() {
        assert_eq!(TranslationMode::default(), TranslationMode::Auto);
        assert_eq!(TranslationQuality::default(), TranslationQuality::Optimal);
    }
}
