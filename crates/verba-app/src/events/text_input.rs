use kanal::AsyncSender;
use tokio_util::sync::CancellationToken;
use verba_config::translator::TranslatorConfig;
use verba_core::{
    RequestValidator, TranslationError, TranslationProvider, TranslationRepository,
    TranslationService,
};

use crate::types::AppEvent;

/// Validate and translate `text` with the configured selectors
pub async fn translate_text<R: TranslationRepository>(
    text: &str,
    settings: &TranslatorConfig,
    providers: &[TranslationProvider],
    service: &TranslationService<R>,
    cancel: &CancellationToken,
) -> Result<String, TranslationError> {
    let request = RequestValidator::validate_raw(
        text,
        &settings.source_lang,
        &settings.target_lang,
        &settings.mode,
        &settings.provider,
        &settings.quality,
        settings.ipa,
        providers,
    )?;

    service.translate_with_cancel(&request, cancel).await
}

pub async fn handle_text_input<R: TranslationRepository>(
    text: &str,
    settings: &TranslatorConfig,
    providers: &[TranslationProvider],
    service: &TranslationService<R>,
    cancel: &CancellationToken,
    output_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let event = match translate_text(text, settings, providers, service, cancel).await {
        Ok(translation) => AppEvent::ShowTranslation {
            source: text.trim().to_string(),
            translation,
        },
        Err(e) => AppEvent::ShowError {
            category: e.category(),
            message: e.to_string(),
        },
    };

    output_tx.send(event).await?;
    Ok(())
}
