//! JSON bodies exchanged with the translation backend

use serde::{Deserialize, Serialize};
use verba_core::{ApiError, TranslationMode, TranslationProvider, TranslationQuality, TranslationRequest};

#[derive(Debug, Serialize)]
pub struct TranslateBody<'a> {
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_lang: Option<&'a str>,
    pub target_lang: &'a str,
    pub mode: TranslationMode,
    pub provider: &'a str,
    pub quality: TranslationQuality,
    pub ipa: bool,
}

impl<'a> From<&'a TranslationRequest> for TranslateBody<'a> {
    fn from(request: &'a TranslationRequest) -> Self {
        Self {
            text: request.source_text(),
            source_lang: request.source_lang(),
            target_lang: request.target_lang(),
            mode: request.mode(),
            provider: &request.provider().id,
            quality: request.quality(),
            ipa: request.ipa(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TranslateReply {
    translation: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ProvidersReply {
    Wrapped { providers: Vec<TranslationProvider> },
    Bare(Vec<TranslationProvider>),
}

pub fn decode_translation(body: &[u8]) -> Result<String, ApiError> {
    let reply: TranslateReply = serde_json::from_slice(body).map_err(|e| {
        tracing::warn!("Failed to parse translation response: {e}");
        ApiError::Unexpected
    })?;
    Ok(reply.translation)
}

pub fn decode_providers(body: &[u8]) -> Result<Vec<TranslationProvider>, ApiError> {
    let reply: ProvidersReply = serde_json::from_slice(body).map_err(|e| {
        tracing::warn!("Failed to parse providers response: {e}");
        ApiError::Unexpected
    })?;

    Ok(match reply {
        ProvidersReply::Wrapped { providers } => providers,
        ProvidersReply::Bare(providers) => providers,
    })
}
