pub mod classifier;
pub mod rest;
pub mod transport;
pub mod wire;

pub use classifier::ResponseClassifier;
pub use rest::TranslationRestRepository;
pub use transport::ReqwestHttpClient;
