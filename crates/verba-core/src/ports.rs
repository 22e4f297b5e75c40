use async_trait::async_trait;

use crate::error::{ApiError, TransportError};
use crate::provider::TranslationProvider;
use crate::request::TranslationRequest;

/// Remote translation backend
#[async_trait]
pub trait TranslationRepository: Send + Sync {
    /// Translate the request's text, one attempt, one outcome
    async fn translate(&self, request: &TranslationRequest) -> Result<String, ApiError>;

    /// List the providers the backend offers
    async fn providers(&self) -> Result<Vec<TranslationProvider>, ApiError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}

/// What came back from the wire
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpResponse {
    /// `None` when the response is not an HTTP response
    pub status: Option<u16>,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: Some(status),
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, Some(200..=299))
    }
}

/// The only I/O boundary of the core
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Fails only when no response was obtained at all
    async fn perform(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
