use crate::provider::TranslationProvider;
use crate::types::{TranslationMode, TranslationQuality};

/// A validated, single-use translation call argument.
///
/// Only [`RequestValidator`](crate::validator::RequestValidator) builds these, so the text is
/// never empty and both language fields respect the accepted length bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    source_text: String,
    source_lang: Option<String>,
    target_lang: String,
    mode: TranslationMode,
    provider: TranslationProvider,
    quality: TranslationQuality,
    ipa: bool,
}

impl TranslationRequest {
    pub(crate) fn new(
        source_text: String,
        source_lang: Option<String>,
        target_lang: String,
        mode: TranslationMode,
        provider: TranslationProvider,
        quality: TranslationQuality,
        ipa: bool,
    ) -> Self {
        Self {
            source_text,
            source_lang,
            target_lang,
            mode,
            provider,
            quality,
            ipa,
        }
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// `None` lets the provider detect the language
    pub fn source_lang(&self) -> Option<&str> {
        self.source_lang.as_deref()
    }

    pub fn target_lang(&self) -> &str {
        &self.target_lang
    }

    pub fn mode(&self) -> TranslationMode {
        self.mode
    }

    pub fn provider(&self) -> &TranslationProvider {
        &self.provider
    }

    pub fn quality(&self) -> TranslationQuality {
        self.quality
    }

    /// Ask for phonetic (IPA) output
    pub fn ipa(&self) -> bool {
        self.ipa
    }
}
