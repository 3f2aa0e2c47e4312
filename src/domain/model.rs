use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::migration::legacy::GlossaryRepr;

// 三个固定目标语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Zh,
    En,
    Ja,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Zh, Language::En, Language::Ja];

    /// Wire key used in the provider response and in persisted data.
    pub fn code(self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
            Language::Ja => "ja",
        }
    }

    /// Tab label shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Language::Zh => "繁體中文",
            Language::En => "English",
            Language::Ja => "日本語",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zh" | "zh-tw" | "tw" => Ok(Language::Zh),
            "en" => Ok(Language::En),
            "ja" | "jp" => Ok(Language::Ja),
            other => Err(format!("unknown language tab: {}", other)),
        }
    }
}

/// Per-language key terms and background notes.
///
/// Deserialization goes through [`GlossaryRepr`], so an old single-string
/// glossary is resolved into this shape on load and the rest of the crate
/// only ever sees one text per language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "GlossaryRepr")]
pub struct Glossary {
    pub zh: String,
    pub en: String,
    pub ja: String,
}

impl Glossary {
    /// The same notes for every language (legacy shape).
    pub fn uniform(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            zh: text.clone(),
            en: text.clone(),
            ja: text,
        }
    }

    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::Zh => &self.zh,
            Language::En => &self.en,
            Language::Ja => &self.ja,
        }
    }
}

// 一次翻译请求的结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub zh: String,
    pub en: String,
    pub ja: String,
    #[serde(rename = "terms")]
    pub glossary: Glossary,
}

impl TranslationResult {
    pub fn text(&self, lang: Language) -> &str {
        match lang {
            Language::Zh => &self.zh,
            Language::En => &self.en,
            Language::Ja => &self.ja,
        }
    }

    pub fn glossary(&self, lang: Language) -> &str {
        self.glossary.get(lang)
    }
}

// 收藏条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteItem {
    pub id: String,
    #[serde(rename = "source", alias = "sourceText")]
    pub source_text: String,
    #[serde(default)]
    pub context: String,
    pub result: TranslationResult,
    #[serde(rename = "timestamp", alias = "createdAt")]
    pub created_at: i64, // epoch milliseconds
}
