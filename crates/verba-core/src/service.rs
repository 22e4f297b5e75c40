use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use crate::error::{ApiError, TransportError, TranslationError};
use crate::ports::TranslationRepository;
use crate::provider::TranslationProvider;
use crate::request::TranslationRequest;

#[async_trait]
pub trait TranslateUseCase: Send + Sync {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslationError>;
}

#[async_trait]
pub trait GetProvidersUseCase: Send + Sync {
    async fn providers(&self) -> Result<Vec<TranslationProvider>, ApiError>;
}

/// Serializes translation calls against one repository.
///
/// `translate` calls enter the repository one at a time in arrival order: the slot is a
/// fair (FIFO) async mutex, held for the whole repository call and released when the call
/// finishes, fails, is cancelled, or its future is dropped. `providers` bypasses the slot.
pub struct TranslationService<R> {
    repository: R,
    slot: Mutex<()>,
}

impl<R: TranslationRepository> TranslationService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            slot: Mutex::new(()),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslationError> {
        let _slot = self.slot.lock().await;

        let input_chars = request.source_text().chars().count();
        tracing::debug!(
            input_chars,
            provider = %request.provider().id,
            "translation request"
        );

        let result = self.repository.translate(request).await;
        match &result {
            Ok(translated) => tracing::debug!(
                input_chars,
                output_chars = translated.chars().count(),
                "translation finished"
            ),
            Err(e) => tracing::error!(input_chars, "translation failed: {e}"),
        }

        result.map_err(TranslationError::from)
    }

    /// Like [`Self::translate`], but resolves with a `networking` failure once `cancel` fires,
    /// whether the call is still queued or already in flight.
    pub async fn translate_with_cancel(
        &self,
        request: &TranslationRequest,
        cancel: &CancellationToken,
    ) -> Result<String, TranslationError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::warn!(
                    input_chars = request.source_text().chars().count(),
                    "translation cancelled"
                );
                Err(ApiError::Networking(TransportError::cancelled()).into())
            }
            result = self.translate(request) => result,
        }
    }

    pub async fn providers(&self) -> Result<Vec<TranslationProvider>, ApiError> {
        let result = self.repository.providers().await;
        match &result {
            Ok(providers) => tracing::debug!(count = providers.len(), "providers loaded"),
            Err(e) => tracing::error!("providers request failed: {e}"),
        }
        result
    }
}

#[async_trait]
impl<R: TranslationRepository> TranslateUseCase for TranslationService<R> {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslationError> {
        TranslationService::translate(self, request).await
    }
}

#[async_trait]
impl<R: TranslationRepository> GetProvidersUseCase for TranslationService<R> {
    async fn providers(&self) -> Result<Vec<TranslationProvider>, ApiError> {
        TranslationService::providers(self).await
    }
}
