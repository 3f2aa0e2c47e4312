use crate::domain::error::TranslationError;
use crate::state::AppState;
use tracing::{info, warn};

/// How a translation attempt ended. The session is idle again in every case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    /// A new result is in `view.result`
    Translated,
    /// No credential configured; nothing was sent
    NeedsCredential,
    /// Empty source text; nothing happened
    Skipped,
    Failed(TranslationError),
}

pub async fn run_translation(state: &mut AppState) -> TranslationOutcome {
    if !state.has_credential() {
        return TranslationOutcome::NeedsCredential;
    }
    if state.view.source_text.trim().is_empty() {
        return TranslationOutcome::Skipped;
    }

    state.view.result = None;
    state.is_loading = true;

    let response = state
        .translator
        .translate(
            &state.credential,
            &state.view.source_text,
            &state.view.context,
        )
        .await;

    let outcome = match response {
        Ok(result) => {
            info!("Translation completed");
            state.view.result = Some(result);
            TranslationOutcome::Translated
        }
        Err(TranslationError::MissingCredential) => TranslationOutcome::NeedsCredential,
        Err(e) => {
            warn!("Translation failed: {}", e);
            TranslationOutcome::Failed(e)
        }
    };

    state.is_loading = false;
    outcome
}
