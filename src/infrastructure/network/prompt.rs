/// Context label used when the user leaves the field empty.
pub const FALLBACK_CONTEXT: &str = "General";

/// Build the system instruction for one translation request.
///
/// The response must be a single JSON object with the three translations
/// and a nested per-language glossary under `terms`.
pub fn build_system_prompt(context: &str) -> String {
    let context = match context.trim() {
        "" => FALLBACK_CONTEXT,
        label => label,
    };

    format!(
        r#"You are a professional translator specializing in "{context}".
Your task is to translate the input text into Traditional Chinese (Taiwan), English, and Japanese.
The Traditional Chinese translation must use Taiwan orthography and vocabulary. Never use Simplified Chinese characters.
Additionally, for EACH of the three languages separately, extract the key terms and provide brief background knowledge or definitions relevant to "{context}", written in that language.

Return ONLY a valid JSON object with exactly the following structure:
{{
  "zh": "Traditional Chinese (Taiwan) translation",
  "en": "English translation",
  "ja": "Japanese translation",
  "terms": {{
    "zh": "Key terms and background in Traditional Chinese (Taiwan). Use bullet points or newlines for readability.",
    "en": "Key terms and background in English. Use bullet points or newlines for readability.",
    "ja": "Key terms and background in Japanese. Use bullet points or newlines for readability."
  }}
}}
Every field must be a non-empty string."#
    )
}
