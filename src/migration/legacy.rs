use serde::Deserialize;

use crate::domain::model::Glossary;

/// The glossary as it may appear on disk or on the wire.
///
/// Early versions stored `terms` as one language-agnostic string; current
/// versions store one text per target language.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum GlossaryRepr {
    PerLanguage(PerLanguageGlossary),
    Legacy(String),
}

#[derive(Debug, Deserialize)]
pub struct PerLanguageGlossary {
    pub zh: String,
    pub en: String,
    pub ja: String,
}

impl From<GlossaryRepr> for Glossary {
    fn from(repr: GlossaryRepr) -> Self {
        match repr {
            GlossaryRepr::PerLanguage(g) => Glossary {
                zh: g.zh,
                en: g.en,
                ja: g.ja,
            },
            GlossaryRepr::Legacy(text) => Glossary::uniform(text),
        }
    }
}
