pub mod error;
pub mod ports;
pub mod provider;
pub mod request;
pub mod service;
pub mod types;
pub mod validator;

pub use error::{
    ApiError, ErrorCategory, TranslationError, TransportError, TransportErrorKind, ValidationError,
};
pub use ports::{HttpClient, HttpMethod, HttpRequest, HttpResponse, TranslationRepository};
pub use provider::TranslationProvider;
pub use request::TranslationRequest;
pub use service::{GetProvidersUseCase, TranslateUseCase, TranslationService};
pub use types::{TranslationMode, TranslationQuality};
pub use validator::RequestValidator;
