use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use verba_config::translator::TranslatorConfig;
use verba_core::{TranslationProvider, TranslationRepository, TranslationService};

use crate::types::AppEvent;

pub mod text_input;

use text_input::handle_text_input;

/// Providers offered by the backend, or just the configured one if the backend can't be reached
pub async fn load_providers<R: TranslationRepository>(
    service: &TranslationService<R>,
    settings: &TranslatorConfig,
) -> Vec<TranslationProvider> {
    match service.providers().await {
        Ok(providers) if !providers.is_empty() => providers,
        _ => {
            tracing::warn!(
                "Provider list unavailable, falling back to configured provider '{}'",
                settings.provider
            );
            vec![TranslationProvider::new(
                settings.provider.trim(),
                settings.provider.trim(),
            )]
        }
    }
}

/// Translates queued texts one after another, in the order they were queued
async fn translation_worker<R: TranslationRepository>(
    service: Arc<TranslationService<R>>,
    settings: TranslatorConfig,
    providers: Vec<TranslationProvider>,
    work_rx: AsyncReceiver<String>,
    output_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) {
    loop {
        let text = tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            text = work_rx.recv() => match text {
                Ok(text) => text,
                // Queue closed and drained
                Err(_) => break,
            },
        };

        if let Err(e) =
            handle_text_input(&text, &settings, &providers, &*service, &cancel, &output_tx).await
        {
            tracing::error!("Failed to deliver translation result: {e}");
        }
    }
}

/// App's main loop.
///
/// Texts are handed to a single worker over an ordered queue, so they reach the service
/// in the order they were submitted while the loop keeps reading input.
pub async fn event_loop<R>(
    service: Arc<TranslationService<R>>,
    settings: TranslatorConfig,
    input_rx: AsyncReceiver<AppEvent>,
    output_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()>
where
    R: TranslationRepository + 'static,
{
    let providers = load_providers(&*service, &settings).await;
    let (work_tx, work_rx) = kanal::unbounded_async::<String>();
    let worker = tokio::spawn(translation_worker(
        service,
        settings,
        providers,
        work_rx,
        output_tx.clone(),
        cancel.child_token(),
    ));
    let mut last_text: Option<String> = None;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = input_rx.recv() => event?,
        };

        let text = match event {
            AppEvent::TextInput { text, force } => {
                let key = text.trim();
                if !force && last_text.as_deref() == Some(key) {
                    tracing::debug!("Text unchanged, skipping");
                    continue;
                }
                last_text = Some(key.to_string());
                text
            }
            AppEvent::Retry => match &last_text {
                Some(text) => text.clone(),
                None => {
                    tracing::debug!("Nothing to retry");
                    continue;
                }
            },
            AppEvent::Shutdown => {
                tracing::info!(
                    "[EVENT_LOOP] Shutdown requested, draining {} queued translations",
                    work_tx.len()
                );
                drop(work_tx);
                worker.await?;
                output_tx.send(AppEvent::Shutdown).await?;
                return Ok(());
            }
            AppEvent::ShowTranslation { .. } | AppEvent::ShowError { .. } => {
                // Output-only events
                continue;
            }
        };

        tracing::debug!("TextInput received: {} chars", text.chars().count());
        work_tx.send(text).await?;
    }

    drop(work_tx);
    worker.await?;
    Ok(())
}
