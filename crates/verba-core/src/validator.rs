use unicode_segmentation::UnicodeSegmentation;

use crate::error::ValidationError;
use crate::provider::TranslationProvider;
use crate::request::TranslationRequest;
use crate::types::{TranslationMode, TranslationQuality};

/// Language values at or below this many characters (grapheme clusters) are rejected
pub const LANG_MIN_EXCLUSIVE: usize = 2;
/// Language values above this many characters are rejected
pub const LANG_MAX: usize = 16;

/// Turns raw user input into a [`TranslationRequest`]
pub struct RequestValidator;

impl RequestValidator {
    /// Validate already-typed fields. Rules run in order and the first failure wins.
    pub fn validate(
        source_text: &str,
        source_lang: &str,
        target_lang: &str,
        mode: TranslationMode,
        provider: TranslationProvider,
        quality: TranslationQuality,
        ipa: bool,
    ) -> Result<TranslationRequest, ValidationError> {
        let text = source_text.trim();
        if text.is_empty() {
            tracing::error!("Empty source text");
            return Err(ValidationError::EmptyString);
        }

        let source_lang = source_lang.trim();
        let source_lang = if source_lang.is_empty() {
            None
        } else {
            check_lang_len(source_lang, "source")?;
            Some(source_lang.to_string())
        };

        let target_lang = target_lang.trim();
        check_lang_len(target_lang, "target")?;

        Ok(TranslationRequest::new(
            text.to_string(),
            source_lang,
            target_lang.to_string(),
            mode,
            provider,
            quality,
            ipa,
        ))
    }

    /// Parse selector strings first (provider, quality, mode), then run [`Self::validate`]
    #[allow(clippy::too_many_arguments)]
    pub fn validate_raw(
        source_text: &str,
        source_lang: &str,
        target_lang: &str,
        mode: &str,
        provider_id: &str,
        quality: &str,
        ipa: bool,
        known_providers: &[TranslationProvider],
    ) -> Result<TranslationRequest, ValidationError> {
        let provider = TranslationProvider::resolve(provider_id, known_providers)?;
        let quality = quality.parse::<TranslationQuality>()?;
        let mode = mode.parse::<TranslationMode>()?;

        Self::validate(
            source_text,
            source_lang,
            target_lang,
            mode,
            provider,
            quality,
            ipa,
        )
    }
}

fn check_lang_len(lang: &str, field: &str) -> Result<(), ValidationError> {
    let len = lang.graphemes(true).count();
    if len > LANG_MAX {
        tracing::error!("{field} lang too long: {lang}");
        return Err(ValidationError::LangTooLong(lang.to_string()));
    }
    if len <= LANG_MIN_EXCLUSIVE {
        tracing::error!("{field} lang too short: {lang}");
        return Err(ValidationError::LangTooShort(lang.to_string()));
    }
    Ok(())
}
