//! Translation provider trait and error definitions.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during translation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// Target language code is not in the provider's supported set.
    #[error("Unsupported target language")]
    UnsupportedLanguage(String),

    /// The provider call failed (transport, status, timeout or response shape).
    #[error("Translation failed: {0}")]
    Failed(String),

    /// The provider client could not be constructed.
    #[error("Translation client error: {0}")]
    Client(String),
}

/// Result type for translation operations.
pub type TranslateResult<T> = Result<T, TranslateError>;

/// A text-in/text-out translation capability.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Whether `code` is accepted as a target language.
    fn is_supported_language(&self, code: &str) -> bool;

    /// Translate `text` into `target`. Callers check the language first;
    /// implementations make exactly one provider attempt.
    async fn translate(&self, text: &str, target: &str) -> TranslateResult<String>;

    /// Validate `target`, then translate.
    async fn translate_checked(&self, text: &str, target: &str) -> TranslateResult<String> {
        if !self.is_supported_language(target) {
            return Err(TranslateError::UnsupportedLanguage(target.to_string()));
        }
        self.translate(text, target).await
    }
}
