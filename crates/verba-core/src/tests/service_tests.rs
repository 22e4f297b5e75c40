//! Ordering and cancellation behaviour of TranslationService

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Semaphore;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use crate::error::{ApiError, TransportError, TranslationError};
use crate::ports::TranslationRepository;
use crate::provider::TranslationProvider;
use crate::request::TranslationRequest;
use crate::service::{GetProvidersUseCase, TranslateUseCase, TranslationService};
use crate::types::{TranslationMode, TranslationQuality};
use crate::validator::RequestValidator;

/// Records the order calls enter `translate` and holds each call until a permit is released
struct RecordingRepository {
    entered: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    permits: Semaphore,
    failure: Option<ApiError>,
}

impl RecordingRepository {
    fn new(permits: usize) -> Self {
        Self {
            entered: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            permits: Semaphore::new(permits),
            failure: None,
        }
    }

    fn failing(error: ApiError) -> Self {
        Self {
            failure: Some(error),
            ..Self::new(Semaphore::MAX_PERMITS)
        }
    }

    fn entered(&self) -> Vec<String> {
        self.entered.lock().unwrap().clone()
    }

    fn release(&self, n: usize) {
        self.permits.add_permits(n);
    }
}

#[async_trait]
impl TranslationRepository for RecordingRepository {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, ApiError> {
        self.entered
            .lock()
            .unwrap()
            .push(request.source_text().to_string());
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        self.permits.acquire().await.unwrap().forget();

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(format!("translated: {}", request.source_text())),
        }
    }

    async fn providers(&self) -> Result<Vec<TranslationProvider>, ApiError> {
        Ok(vec![TranslationProvider::new("openai", "OpenAI")])
    }
}

fn request(text: &str) -> TranslationRequest {
    RequestValidator::validate(
        text,
        "",
        "English",
        TranslationMode::Auto,
        TranslationProvider::new("openai", "OpenAI"),
        TranslationQuality::Optimal,
        false,
    )
    .unwrap()
}

/// Let every spawned task run until it blocks
async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn test_single_call_passes_result_through() {
    let service = TranslationService::new(RecordingRepository::new(Semaphore::MAX_PERMITS));

    let result = service.translate(&request("  Hallo Welt ")).await;
    assert_eq!(result, Ok("translated: Hallo Welt".to_string()));
}

#[tokio::test]
async fn test_repository_errors_pass_through_unchanged() {
    let service = TranslationService::new(RecordingRepository::failing(ApiError::Http {
        status: 503,
        message: Some("maintenance".to_string()),
    }));

    let result = service.translate(&request("hello")).await;
    assert_eq!(
        result,
        Err(TranslationError::Api(ApiError::Http {
            status: 503,
            message: Some("maintenance".to_string()),
        }))
    );
}

#[tokio::test]
async fn test_concurrent_calls_enter_repository_in_submission_order() {
    let service = Arc::new(TranslationService::new(RecordingRepository::new(0)));

    let mut handles = Vec::new();
    for i in 0..8 {
        let service = Arc::clone(&service);
        handles.push(tokio::spawn(async move {
            service.translate(&request(&format!("text {i}"))).await
        }));
        settle().await;
    }

    // The first call holds the slot, everyone else is queued
    assert_eq!(service.repository().entered(), vec!["text 0".to_string()]);

    service.repository().release(8);
    for (i, handle) in handles.into_iter().enumerate() {
        let result = timeout(Duration::from_secs(2), handle).await.unwrap().unwrap();
        assert_eq!(result, Ok(format!("translated: text {i}")));
    }

    let expected: Vec<String> = (0..8).map(|i| format!("text {i}")).collect();
    assert_eq!(service.repository().entered(), expected);
    assert_eq!(service.repository().max_in_flight.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_cancel_in_flight_call_releases_slot() {
    let service = Arc::new(TranslationService::new(RecordingRepository::new(0)));
    let cancel = CancellationToken::new();

    let first = {
        let service = Arc::clone(&service);
        let cancel = cancel.clone();
        tokio::spawn(async move { service.translate_with_cancel(&request("first"), &cancel).await })
    };
    settle().await;

    let second = {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.translate(&request("second")).await })
    };
    settle().await;

    cancel.cancel();
    let result = timeout(Duration::from_secs(2), first).await.unwrap().unwrap();
    assert_eq!(
        result,
        Err(TranslationError::Api(ApiError::Networking(TransportError::cancelled())))
    );

    service.repository().release(1);
    let result = timeout(Duration::from_secs(2), second).await.unwrap().unwrap();
    assert_eq!(result, Ok("translated: second".to_string()));
    assert_eq!(
        service.repository().entered(),
        vec!["first".to_string(), "second".to_string()]
    );
}

#[tokio::test]
async fn test_cancel_queued_call_never_enters_repository() {
    let service = Arc::new(TranslationService::new(RecordingRepository::new(0)));
    let cancel = CancellationToken::new();

    let first = {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.translate(&request("first")).await })
    };
    settle().await;

    let queued = {
        let service = Arc::clone(&service);
        let cancel = cancel.clone();
        tokio::spawn(async move { service.translate_with_cancel(&request("queued"), &cancel).await })
    };
    settle().await;

    cancel.cancel();
    let result = timeout(Duration::from_secs(2), queued).await.unwrap().unwrap();
    assert!(matches!(
        result,
        Err(TranslationError::Api(ApiError::Networking(ref e))) if e.is_cancelled()
    ));

    service.repository().release(2);
    assert!(timeout(Duration::from_secs(2), first).await.unwrap().unwrap().is_ok());
    assert!(service.translate(&request("third")).await.is_ok());
    assert_eq!(
        service.repository().entered(),
        vec!["first".to_string(), "third".to_string()]
    );
}

#[tokio::test]
async fn test_dropped_call_releases_slot() {
    let service = Arc::new(TranslationService::new(RecordingRepository::new(0)));

    let abandoned = {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.translate(&request("abandoned")).await })
    };
    settle().await;
    abandoned.abort();
    settle().await;

    service.repository().release(1);
    let result = timeout(Duration::from_secs(2), service.translate(&request("next"))).await;
    assert_eq!(result.unwrap(), Ok("translated: next".to_string()));
}

#[tokio::test]
async fn test_providers_not_blocked_by_in_flight_translate() {
    let service = Arc::new(TranslationService::new(RecordingRepository::new(0)));

    let pending = {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.translate(&request("slow")).await })
    };
    settle().await;

    let providers = timeout(Duration::from_secs(2), service.providers())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(providers, vec![TranslationProvider::new("openai", "OpenAI")]);

    service.repository().release(1);
    assert!(pending.await.unwrap().is_ok());
}

#[tokio::test]
async fn test_use_case_traits_delegate_to_service() {
    let service = TranslationService::new(RecordingRepository::new(Semaphore::MAX_PERMITS));

    let translate: &dyn TranslateUseCase = &service;
    assert_eq!(
        translate.translate(&request("hi there")).await,
        Ok("translated: hi there".to_string())
    );

    let providers: &dyn GetProvidersUseCase = &service;
    assert_eq!(providers.providers().await.unwrap().len(), 1);
}
