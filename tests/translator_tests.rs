//! 翻译服务 HTTP 测试（mockito 模拟服务端）

use mockito::{Matcher, Server};
use serde_json::{json, Value};
use transpro::domain::error::TranslationError;
use transpro::domain::model::Language;
use transpro::domain::traits::Translator;
use transpro::infrastructure::config::Config;
use transpro::infrastructure::network::{create_client, ChatCompletionTranslator};

const CONTENT: &str = r#"{"zh":"你好世界","en":"Hello world","ja":"こんにちは世界","terms":{"zh":"說明","en":"notes","ja":"説明"}}"#;

fn translator_for(api_base: &str) -> ChatCompletionTranslator {
    let mut config = Config::default();
    config.provider.api_base = api_base.to_string();
    config.provider.timeout_secs = 5;
    ChatCompletionTranslator::new(create_client(&config).unwrap(), &config.provider)
}

fn completion(content: Value) -> String {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": content }, "finish_reason": "stop" }
        ]
    })
    .to_string()
}

#[tokio::test]
async fn test_successful_translation() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(json!({
                "model": "gpt-4o-mini",
                "response_format": { "type": "json_object" }
            })),
            Matcher::Regex("General".to_string()),
            Matcher::Regex("Hello world".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion(json!(CONTENT)))
        .expect(1)
        .create_async()
        .await;

    let result = translator_for(&server.url())
        .translate("sk-test", "Hello world", "")
        .await
        .unwrap();

    assert_eq!(result.zh, "你好世界");
    assert_eq!(result.en, "Hello world");
    assert_eq!(result.ja, "こんにちは世界");
    assert_eq!(result.glossary(Language::En), "notes");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_trailing_slash_in_api_base() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(completion(json!(CONTENT)))
        .create_async()
        .await;

    let base = format!("{}/", server.url());
    assert!(translator_for(&base)
        .translate("sk-test", "Hello", "medical")
        .await
        .is_ok());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_credential_makes_no_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .expect(0)
        .create_async()
        .await;

    let translator = translator_for(&server.url());
    for credential in ["", "  "] {
        let err = translator
            .translate(credential, "Hello", "")
            .await
            .unwrap_err();
        assert_eq!(err, TranslationError::MissingCredential);
        assert!(!err.is_retryable());
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_null_or_empty_content_is_empty_response() {
    for content in [Value::Null, json!(""), json!("   ")] {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(completion(content.clone()))
            .create_async()
            .await;

        let err = translator_for(&server.url())
            .translate("sk-test", "Hello", "")
            .await
            .unwrap_err();
        assert_eq!(err, TranslationError::EmptyResponse, "content {content}");
    }
}

#[tokio::test]
async fn test_no_choices_is_empty_response() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(json!({ "choices": [] }).to_string())
        .create_async()
        .await;

    let err = translator_for(&server.url())
        .translate("sk-test", "Hello", "")
        .await
        .unwrap_err();
    assert_eq!(err, TranslationError::EmptyResponse);
}

#[tokio::test]
async fn test_non_json_content_is_malformed() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(completion(json!("not json")))
        .create_async()
        .await;

    let err = translator_for(&server.url())
        .translate("sk-test", "Hello", "")
        .await
        .unwrap_err();
    assert!(matches!(err, TranslationError::MalformedResponse(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_provider_error_message_is_surfaced() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "error": {
                    "message": "Incorrect API key provided",
                    "type": "invalid_request_error",
                    "code": "invalid_api_key"
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let err = translator_for(&server.url())
        .translate("sk-wrong", "Hello", "")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        TranslationError::ProviderError("Incorrect API key provided".to_string())
    );
}

#[tokio::test]
async fn test_server_error_without_json_body() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(500)
        .with_body("upstream exploded")
        .create_async()
        .await;

    match translator_for(&server.url())
        .translate("sk-test", "Hello", "")
        .await
    {
        Err(TranslationError::ProviderError(msg)) => assert!(msg.contains("500"), "{msg}"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn test_undecodable_envelope_is_provider_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body("<html>gateway</html>")
        .create_async()
        .await;

    let err = translator_for(&server.url())
        .translate("sk-test", "Hello", "")
        .await
        .unwrap_err();
    assert!(matches!(err, TranslationError::ProviderError(_)));
}

#[tokio::test]
async fn test_transport_failure_is_provider_error() {
    // 没有服务监听的端口
    let err = translator_for("http://127.0.0.1:1")
        .translate("sk-test", "Hello", "")
        .await
        .unwrap_err();
    assert!(matches!(err, TranslationError::ProviderError(_)));
}
