//! 测试共用的桩实现与样例数据

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use transpro::domain::error::TranslationError;
use transpro::domain::model::{Glossary, TranslationResult};
use transpro::domain::traits::{KeyValueStore, Translator};
use transpro::infrastructure::storage::MemoryStore;
use transpro::state::AppState;

/// Translator that replays queued responses and records every call
#[derive(Default)]
pub struct StubTranslator {
    responses: Mutex<VecDeque<Result<TranslationResult, TranslationError>>>,
    calls: Mutex<Vec<(String, String, String)>>,
}

impl StubTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_responses(
        responses: impl IntoIterator<Item = Result<TranslationResult, TranslationError>>,
    ) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// (credential, source_text, context) of each call
    pub fn calls(&self) -> Vec<(String, String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Translator for StubTranslator {
    async fn translate(
        &self,
        credential: &str,
        source_text: &str,
        context: &str,
    ) -> Result<TranslationResult, TranslationError> {
        self.calls.lock().unwrap().push((
            credential.to_string(),
            source_text.to_string(),
            context.to_string(),
        ));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TranslationError::ProviderError("no stub response".into())))
    }
}

pub fn sample_result() -> TranslationResult {
    TranslationResult {
        zh: "你好世界".to_string(),
        en: "Hello world".to_string(),
        ja: "こんにちは世界".to_string(),
        glossary: Glossary {
            zh: "• 世界：指地球上的所有地方".to_string(),
            en: "• world: the earth and all its people".to_string(),
            ja: "• 世界：地球上のすべての場所".to_string(),
        },
    }
}

pub fn result_with(zh: &str) -> TranslationResult {
    TranslationResult {
        zh: zh.to_string(),
        ..sample_result()
    }
}

pub async fn state_with(store: Arc<MemoryStore>, translator: Arc<StubTranslator>) -> AppState {
    AppState::load(
        store as Arc<dyn KeyValueStore>,
        translator as Arc<dyn Translator>,
    )
    .await
}

/// Session with a credential and a stub that answers every call successfully
pub async fn ready_state(responses: usize) -> (AppState, Arc<MemoryStore>, Arc<StubTranslator>) {
    let store = Arc::new(MemoryStore::with_entries([("credential", "sk-test")]));
    let translator = Arc::new(StubTranslator::with_responses(
        (0..responses).map(|_| Ok(sample_result())),
    ));
    let state = state_with(store.clone(), translator.clone()).await;
    (state, store, translator)
}
