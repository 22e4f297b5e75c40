use std::fmt;

/// Rejections produced before any network call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Field cannot be empty")]
    EmptyString,

    #[error("Invalid provider: {0}")]
    InvalidProvider(String),

    #[error("Invalid quality: {0}")]
    InvalidQuality(String),

    #[error("Invalid mode: {0}")]
    InvalidMode(String),

    #[error("Lang too short: {0}")]
    LangTooShort(String),

    #[error("Language too long: {0}")]
    LangTooLong(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    Connect,
    Timeout,
    Cancelled,
    Other,
}

/// Failure raised by the transport before any response was obtained
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn cancelled() -> Self {
        Self::new(TransportErrorKind::Cancelled, "Request was cancelled")
    }

    pub fn is_cancelled(&self) -> bool {
        self.kind == TransportErrorKind::Cancelled
    }
}

/// Failures produced by or around the network call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid API key")]
    InvalidKey,

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("{}", http_description(.status, .message))]
    Http {
        status: u16,
        message: Option<String>,
    },

    #[error("Unexpected response")]
    Unexpected,

    #[error("Network error: {0}")]
    Networking(TransportError),
}

fn http_description(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => format!("HTTP {status}: {message}"),
        None => format!("HTTP {status}"),
    }
}

/// Display grouping for [`TranslationError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Api,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Validation => write!(f, "Validation"),
            ErrorCategory::Api => write!(f, "API"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl TranslationError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TranslationError::Validation(_) => ErrorCategory::Validation,
            TranslationError::Api(_) => ErrorCategory::Api,
        }
    }
}
