use async_trait::async_trait;
use verba_core::{
    ApiError, HttpClient, HttpMethod, HttpRequest, TranslationProvider, TranslationRepository,
    TranslationRequest,
};

use crate::classifier::ResponseClassifier;
use crate::transport::ReqwestHttpClient;
use crate::wire::{TranslateBody, decode_providers, decode_translation};

/// [`TranslationRepository`] over the backend's REST API.
///
/// Every call is a single attempt through the injected [`HttpClient`]; nothing is retried
/// or cached.
pub struct TranslationRestRepository<C = ReqwestHttpClient> {
    http_client: C,
    api_url: String,
    api_key: Option<String>,
}

impl<C: HttpClient> TranslationRestRepository<C> {
    pub fn new(http_client: C, api_url: impl Into<String>, api_key: Option<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        let api_key = api_key.filter(|key| !key.trim().is_empty());

        Self {
            http_client,
            api_url,
            api_key,
        }
    }

    pub fn http_client(&self) -> &C {
        &self.http_client
    }

    /// Build, execute once, classify
    pub async fn execute<T, F>(&self, request: HttpRequest, decode: F) -> Result<T, ApiError>
    where
        F: FnOnce(&[u8]) -> Result<T, ApiError> + Send,
    {
        tracing::debug!(method = ?request.method, url = %request.url, "sending request");

        let outcome = self.http_client.perform(request).await;
        match &outcome {
            Ok(response) => tracing::debug!(
                status = ?response.status,
                bytes = response.body.len(),
                "response received"
            ),
            Err(e) => tracing::warn!("transport failed: {e}"),
        }

        ResponseClassifier::classify(outcome, decode)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.api_url)
    }

    fn with_auth(&self, request: HttpRequest) -> HttpRequest {
        let request = request.header("Accept", "application/json");
        match &self.api_key {
            Some(key) => request.header("Authorization", format!("Bearer {key}")),
            None => request,
        }
    }

    fn translate_request(&self, request: &TranslationRequest) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_vec(&TranslateBody::from(request)).map_err(|e| {
            tracing::error!("Failed to encode translation request: {e}");
            ApiError::Unexpected
        })?;

        Ok(self
            .with_auth(HttpRequest::new(HttpMethod::Post, self.endpoint("translate")))
            .header("Content-Type", "application/json")
            .body(body))
    }

    fn providers_request(&self) -> HttpRequest {
        self.with_auth(HttpRequest::new(HttpMethod::Get, self.endpoint("providers")))
    }
}

#[async_trait]
impl<C: HttpClient> TranslationRepository for TranslationRestRepository<C> {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, ApiError> {
        let http_request = self.translate_request(request)?;
        self.execute(http_request, decode_translation).await
    }

    async fn providers(&self) -> Result<Vec<TranslationProvider>, ApiError> {
        self.execute(self.providers_request(), decode_providers).await
    }
}
