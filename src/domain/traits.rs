use crate::domain::error::{TranslationError, TransproError};
use crate::domain::model::TranslationResult;
use async_trait::async_trait;

/// Trait for translation services
///
/// One call is one round trip to the provider. Implementations are stateless
/// and must never let a failure escape as anything but a [`TranslationError`].
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        credential: &str,
        source_text: &str,
        context: &str,
    ) -> Result<TranslationResult, TranslationError>;
}

/// Trait for the local persistent key-value store
///
/// String keys, string values. Implemented by SQLite on disk and by an
/// in-memory map for tests and ephemeral sessions.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, TransproError>;

    /// Insert or overwrite a value
    async fn set(&self, key: &str, value: &str) -> Result<(), TransproError>;
}
