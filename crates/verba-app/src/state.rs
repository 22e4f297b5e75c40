use std::sync::Arc;

use verba_config::Config;
use verba_core::TranslationService;
use verba_translator::{ReqwestHttpClient, TranslationRestRepository};

pub type RestTranslationService = TranslationService<TranslationRestRepository<ReqwestHttpClient>>;

pub struct AppState {
    pub config: Config,
    pub service: Arc<RestTranslationService>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let http_client = ReqwestHttpClient::with_timeout(config.timeout())?;
        let repository = TranslationRestRepository::new(
            http_client,
            config.translator.api_url.clone(),
            config.translator.api_key(),
        );

        tracing::info!(api_url = %config.translator.api_url, "translation backend configured");

        Ok(Self {
            config,
            service: Arc::new(TranslationService::new(repository)),
        })
    }
}
