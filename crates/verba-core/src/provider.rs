use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A remote translation backend, e.g. "openai"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationProvider {
    /// Stable slug, the provider's identity
    pub id: String,
    #[serde(alias = "displayName")]
    pub display_name: String,
}

impl TranslationProvider {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }

    /// Look up `id` among the known providers
    pub fn resolve(id: &str, known: &[TranslationProvider]) -> Result<Self, ValidationError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ValidationError::InvalidProvider(String::new()));
        }

        known
            .iter()
            .find(|provider| provider.id == id)
            .cloned()
            .ok_or_else(|| ValidationError::InvalidProvider(id.to_string()))
    }
}

impl PartialEq for TranslationProvider {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TranslationProvider {}

impl Hash for TranslationProvider {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn known() -> Vec<TranslationProvider> {
        vec![
            TranslationProvider::new("openai", "OpenAI"),
            TranslationProvider::new("google", "Google"),
        ]
    }

    #[test]
    fn test_equality_by_id() {
        let a = TranslationProvider::new("openai", "OpenAI");
        let b = TranslationProvider::new("openai", "OpenAI GPT");
        assert_eq!(a, b);

        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_resolve() {
        let provider = TranslationProvider::resolve(" google ", &known()).unwrap();
        assert_eq!(provider.display_name, "Google");

        assert_eq!(
            TranslationProvider::resolve("deepl", &known()),
            Err(ValidationError::InvalidProvider("deepl".to_string()))
        );
        assert_eq!(
            TranslationProvider::resolve("  ", &known()),
            Err(ValidationError::InvalidProvider(String::new()))
        );
    }
}
