use crate::domain::error::TranslationError;
use crate::domain::model::TranslationResult;
use crate::domain::schema::parse_translation;
use crate::domain::traits::Translator;
use crate::infrastructure::config::ProviderConfig;
use crate::infrastructure::network::prompt::build_system_prompt;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

// Chat completion request structures
#[derive(Serialize, Debug)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    response_format: ResponseFormat,
}

#[derive(Serialize, Debug)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize, Debug)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

// Chat completion response structures
#[derive(Deserialize, Debug)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize, Debug)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize, Debug)]
struct ErrorBody {
    message: String,
}

/// Translator backed by an OpenAI-compatible chat-completion endpoint
pub struct ChatCompletionTranslator {
    client: Client,
    api_base: String,
    model: String,
}

impl ChatCompletionTranslator {
    pub fn new(client: Client, provider: &ProviderConfig) -> Self {
        Self {
            client,
            api_base: provider.api_base.trim_end_matches('/').to_string(),
            model: provider.model.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }

    async fn request_completion(
        &self,
        credential: &str,
        system_prompt: &str,
        source_text: &str,
    ) -> Result<Option<String>, TranslationError> {
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: source_text,
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(credential)
            .json(&body)
            .send()
            .await
            .map_err(provider_error)?;

        let status = response.status();
        let text = response.text().await.map_err(provider_error)?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&text)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| format!("HTTP {}", status));
            return Err(TranslationError::ProviderError(message));
        }

        let parsed: ChatResponse = serde_json::from_str(&text).map_err(|e| {
            TranslationError::ProviderError(format!("Unexpected response body: {}", e))
        })?;

        Ok(parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content))
    }
}

#[async_trait]
impl Translator for ChatCompletionTranslator {
    async fn translate(
        &self,
        credential: &str,
        source_text: &str,
        context: &str,
    ) -> Result<TranslationResult, TranslationError> {
        if credential.trim().is_empty() {
            return Err(TranslationError::MissingCredential);
        }

        let system_prompt = build_system_prompt(context);
        debug!(
            model = %self.model,
            context = %context,
            chars = source_text.chars().count(),
            "sending translation request"
        );

        let result = match self
            .request_completion(credential, &system_prompt, source_text)
            .await
        {
            Ok(Some(content)) => parse_translation(&content),
            Ok(None) => Err(TranslationError::EmptyResponse),
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            warn!("Translation error: {}", e);
        }
        result
    }
}

fn provider_error(e: reqwest::Error) -> TranslationError {
    TranslationError::ProviderError(e.to_string())
}
