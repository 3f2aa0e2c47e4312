//! 应用状态与翻译流程测试

mod common;

use common::{ready_state, sample_result, state_with, StubTranslator};
use std::sync::Arc;
use transpro::application::{run_translation, save_favorite, TranslationOutcome};
use transpro::domain::error::TranslationError;
use transpro::domain::traits::KeyValueStore;
use transpro::infrastructure::storage::MemoryStore;
use transpro::state::{CREDENTIAL_KEY, FAVORITES_KEY};

#[tokio::test]
async fn test_startup_reads_credential_and_favorites() {
    let favorites = serde_json::json!([{
        "id": "2",
        "source": "Hello",
        "context": "",
        "result": {"zh":"你好","en":"Hello","ja":"こんにちは","terms":"說明"},
        "timestamp": 2
    }]);
    let store = Arc::new(MemoryStore::with_entries([
        (CREDENTIAL_KEY.to_string(), "sk-saved".to_string()),
        (FAVORITES_KEY.to_string(), favorites.to_string()),
    ]));
    let state = state_with(store, Arc::new(StubTranslator::new())).await;

    assert_eq!(state.credential(), "sk-saved");
    assert!(state.has_credential());
    assert_eq!(state.favorites().len(), 1);
    assert!(!state.is_loading());
    assert!(state.view.result.is_none());
}

#[tokio::test]
async fn test_startup_with_empty_store() {
    let state = state_with(Arc::new(MemoryStore::new()), Arc::new(StubTranslator::new())).await;

    assert_eq!(state.credential(), "");
    assert!(!state.has_credential());
    assert!(state.favorites().is_empty());
}

#[tokio::test]
async fn test_corrupt_favorites_load_as_empty() {
    for raw in ["not json", "{\"id\":1}", "[{\"id\":\"1\"}]"] {
        let store = Arc::new(MemoryStore::with_entries([(FAVORITES_KEY, raw)]));
        let state = state_with(store, Arc::new(StubTranslator::new())).await;
        assert!(state.favorites().is_empty(), "{raw}");
    }
}

#[tokio::test]
async fn test_duplicate_ids_are_dropped_on_load() {
    let item = |id: &str, source: &str| {
        serde_json::json!({
            "id": id,
            "source": source,
            "context": "",
            "result": {"zh":"你好","en":"Hello","ja":"こんにちは","terms":"說明"},
            "timestamp": 1
        })
    };
    let raw = serde_json::json!([item("1", "first"), item("1", "second"), item("2", "third")]);
    let store = Arc::new(MemoryStore::with_entries([(FAVORITES_KEY.to_string(), raw.to_string())]));
    let state = state_with(store, Arc::new(StubTranslator::new())).await;

    let sources: Vec<_> = state
        .favorites()
        .iter()
        .map(|f| f.source_text.as_str())
        .collect();
    assert_eq!(sources, vec!["first", "third"]);
}

#[tokio::test]
async fn test_unreadable_favorite_does_not_erase_the_rest() {
    let raw = serde_json::json!([
        {
            "id": "1",
            "source": "Hello",
            "context": "gaming",
            "result": {"zh":"你好","en":"Hello","ja":"こんにちは","terms":"x"},
            "timestamp": 1
        },
        {
            "id": "2",
            "source": "World",
            "context": "",
            "result": {"zh":"世界","en":"World","ja":"世界"},
            "timestamp": 2
        }
    ]);
    let store = Arc::new(MemoryStore::with_entries([
        (CREDENTIAL_KEY.to_string(), "sk-test".to_string()),
        (FAVORITES_KEY.to_string(), raw.to_string()),
    ]));
    let mut state = state_with(store.clone(), Arc::new(StubTranslator::new())).await;

    let ids: Vec<_> = state.favorites().iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["1"]);
    assert_eq!(state.favorites()[0].result.glossary.en, "x");

    state.view.source_text = "Good morning".to_string();
    state.view.result = Some(sample_result());
    let new_id = save_favorite(&mut state).await.unwrap().unwrap();

    let persisted: Vec<serde_json::Value> =
        serde_json::from_str(&store.get(FAVORITES_KEY).await.unwrap().unwrap()).unwrap();
    let persisted_ids: Vec<_> = persisted
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(persisted_ids, vec![new_id, "1".to_string()]);
}

#[tokio::test]
async fn test_set_credential_is_mirrored_on_every_edit() {
    let store = Arc::new(MemoryStore::new());
    let mut state = state_with(store.clone(), Arc::new(StubTranslator::new())).await;

    for partial in ["s", "sk", "sk-", "sk-test"] {
        state.set_credential(partial).await.unwrap();
        assert_eq!(
            store.get(CREDENTIAL_KEY).await.unwrap().as_deref(),
            Some(partial)
        );
    }
    assert_eq!(state.credential(), "sk-test");

    state.set_credential("").await.unwrap();
    assert!(!state.has_credential());
    assert_eq!(store.get(CREDENTIAL_KEY).await.unwrap().as_deref(), Some(""));
}

#[tokio::test]
async fn test_run_translation_without_credential_makes_no_call() {
    let translator = Arc::new(StubTranslator::with_responses([Ok(sample_result())]));
    let mut state = state_with(Arc::new(MemoryStore::new()), translator.clone()).await;
    state.view.source_text = "Hello world".to_string();

    assert_eq!(
        run_translation(&mut state).await,
        TranslationOutcome::NeedsCredential
    );
    assert!(translator.calls().is_empty());
    assert!(!state.is_loading());
}

#[tokio::test]
async fn test_run_translation_with_empty_text_is_noop() {
    let (mut state, _store, translator) = ready_state(1).await;

    for text in ["", "  \n "] {
        state.view.source_text = text.to_string();
        assert_eq!(run_translation(&mut state).await, TranslationOutcome::Skipped);
    }
    assert!(translator.calls().is_empty());
}

#[tokio::test]
async fn test_run_translation_stores_result() {
    let (mut state, _store, translator) = ready_state(1).await;
    state.view.source_text = "Hello world".to_string();
    state.view.context = "medical".to_string();

    assert_eq!(run_translation(&mut state).await, TranslationOutcome::Translated);
    assert_eq!(state.view.result, Some(sample_result()));
    assert!(!state.is_loading());
    assert_eq!(
        translator.calls(),
        vec![(
            "sk-test".to_string(),
            "Hello world".to_string(),
            "medical".to_string()
        )]
    );
}

#[tokio::test]
async fn test_failure_clears_previous_result_and_loading() {
    let translator = Arc::new(StubTranslator::with_responses([
        Ok(sample_result()),
        Err(TranslationError::MalformedResponse("invalid JSON".into())),
    ]));
    let store = Arc::new(MemoryStore::with_entries([(CREDENTIAL_KEY, "sk-test")]));
    let mut state = state_with(store, translator).await;
    state.view.source_text = "Hello world".to_string();

    assert_eq!(run_translation(&mut state).await, TranslationOutcome::Translated);
    assert!(state.view.result.is_some());

    let outcome = run_translation(&mut state).await;
    assert!(matches!(
        outcome,
        TranslationOutcome::Failed(TranslationError::MalformedResponse(_))
    ));
    assert!(state.view.result.is_none());
    assert!(!state.is_loading());
    assert!(state.favorites().is_empty());
}

#[tokio::test]
async fn test_provider_error_is_returned_not_raised() {
    let translator = Arc::new(StubTranslator::with_responses([Err(
        TranslationError::ProviderError("Rate limit reached".into()),
    )]));
    let store = Arc::new(MemoryStore::with_entries([(CREDENTIAL_KEY, "sk-test")]));
    let mut state = state_with(store, translator).await;
    state.view.source_text = "Hello".to_string();

    assert_eq!(
        run_translation(&mut state).await,
        TranslationOutcome::Failed(TranslationError::ProviderError("Rate limit reached".into()))
    );
    assert!(!state.is_loading());
}
