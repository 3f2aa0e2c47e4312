//! Validation of the provider's JSON content.
//!
//! The provider only guarantees syntactically valid JSON, so every required
//! key is checked for presence and type before a [`TranslationResult`] is
//! built.

use serde_json::{Map, Value};

use crate::domain::error::TranslationError;
use crate::domain::model::{Glossary, Language, TranslationResult};

pub const GLOSSARY_KEY: &str = "terms";

/// Parse and validate the textual content of a chat completion.
pub fn parse_translation(content: &str) -> Result<TranslationResult, TranslationError> {
    if content.trim().is_empty() {
        return Err(TranslationError::EmptyResponse);
    }

    let value: Value = serde_json::from_str(content)
        .map_err(|e| TranslationError::MalformedResponse(format!("invalid JSON: {}", e)))?;

    let obj = value.as_object().ok_or_else(|| {
        TranslationError::MalformedResponse("expected a JSON object".to_string())
    })?;

    let glossary = match obj.get(GLOSSARY_KEY) {
        Some(Value::Object(terms)) => Glossary {
            zh: required_str(terms, Language::Zh.code(), "terms.")?,
            en: required_str(terms, Language::En.code(), "terms.")?,
            ja: required_str(terms, Language::Ja.code(), "terms.")?,
        },
        // 旧格式：单一字符串，对三种语言通用
        Some(Value::String(text)) if !text.trim().is_empty() => Glossary::uniform(text.as_str()),
        _ => {
            return Err(TranslationError::MalformedResponse(format!(
                "missing or invalid key `{}`",
                GLOSSARY_KEY
            )))
        }
    };

    Ok(TranslationResult {
        zh: required_str(obj, Language::Zh.code(), "")?,
        en: required_str(obj, Language::En.code(), "")?,
        ja: required_str(obj, Language::Ja.code(), "")?,
        glossary,
    })
}

fn required_str(
    obj: &Map<String, Value>,
    key: &str,
    path_prefix: &str,
) -> Result<String, TranslationError> {
    match obj.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
        _ => Err(TranslationError::MalformedResponse(format!(
            "missing or invalid key `{}{}`",
            path_prefix, key
        ))),
    }
}
