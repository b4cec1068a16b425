pub type LanguageCode = String;

mod dummy;
mod menu;

pub use dummy::DummyTranslator;
pub use menu::MenuTranslator;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate one request; settles exactly once, no internal retries
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<Translation, TranslateError>;
}

/// Immutable per-target request value: the shared input text, the shared
/// detected source, and one target.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub text: String,
    pub source: LanguageCode,
    pub target: LanguageCode,
}

#[derive(Debug, Clone)]
pub struct Translation {
    pub text: String,
    pub source: LanguageCode,
    pub target: LanguageCode,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// The service answered with an explicit error field
    #[error("service error: {0}")]
    Service(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server error (HTTP {0})")]
    Http(u16),

    /// 2xx response whose translation field was missing or blank. Treated
    /// as a failure, never as an empty success.
    #[error("service returned an empty translation")]
    EmptyTranslation,

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
