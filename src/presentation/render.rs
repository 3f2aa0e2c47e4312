use crate::domain::error::TranslationError;
use crate::domain::model::{FavoriteItem, Language, TranslationResult};
use crate::presentation::theme::Theme;
use chrono::{Local, TimeZone};
use std::fmt::Write;

pub const EMPTY_STATE: &str = "輸入內容並開始翻譯，結果將顯示於此";
pub const LOADING: &str = "正在思考翻譯與術語解釋...";
pub const GLOSSARY_HEADING: &str = "名詞解釋 & 背景知識";
pub const NO_FAVORITES: &str = "暫無收藏內容";
pub const NO_CONTEXT: &str = "[無背景]";
pub const GENERIC_FAILURE: &str = "翻譯發生錯誤，請檢查 API Key 或網路連線";
pub const MISSING_CREDENTIAL: &str = "請先設定 OpenAI API Key";
pub const CREDENTIAL_NOTICE: &str =
    "您的 Key 僅會儲存在本機，直接與 OpenAI 伺服器通訊，不會上傳至任何其他伺服器。";

const PREVIEW_CHARS: usize = 20;

/// Tabbed result card: tab strip, active translation, matching glossary
pub fn format_result(result: &TranslationResult, active: Language, theme: &Theme) -> String {
    let mut output = String::new();

    let tabs: Vec<String> = Language::ALL
        .iter()
        .map(|&lang| {
            if lang == active {
                (theme.tab_active)(&format!("[{}]", lang.label()))
            } else {
                (theme.tab)(&format!(" {} ", lang.label()))
            }
        })
        .collect();
    writeln!(output, "{}  {}", (theme.title)("翻譯結果"), tabs.join(" ")).ok();
    writeln!(output).ok();

    for line in result.text(active).lines() {
        writeln!(output, "  {}", (theme.text)(line)).ok();
    }

    writeln!(output).ok();
    let cutoff = "⸺".repeat(40);
    writeln!(output, "  {}", (theme.line)(&cutoff)).ok();
    writeln!(output, "  {}", (theme.heading)(GLOSSARY_HEADING)).ok();
    for line in result.glossary(active).lines() {
        writeln!(output, "  {}", (theme.glossary)(line)).ok();
    }

    writeln!(output).ok();
    output
}

pub fn format_empty_state(theme: &Theme) -> String {
    format!("  {}\n", (theme.meta)(EMPTY_STATE))
}

/// Numbered favorites list, newest first
pub fn format_favorites(favorites: &[FavoriteItem], theme: &Theme) -> String {
    let mut output = String::new();
    writeln!(
        output,
        "{}",
        (theme.title)(&format!("我的收藏 ({})", favorites.len()))
    )
    .ok();

    if favorites.is_empty() {
        writeln!(output, "  {}", (theme.meta)(NO_FAVORITES)).ok();
        return output;
    }

    for (i, item) in favorites.iter().enumerate() {
        writeln!(
            output,
            "  {}. {} {}",
            (theme.idx)(&(i + 1).to_string()),
            (theme.meta)(&format_date(item.created_at)),
            (theme.meta)(&format!("#{}", item.id))
        )
        .ok();
        writeln!(output, "     {}", (theme.text)(&first_line(&item.source_text))).ok();
        writeln!(output, "     {}", (theme.meta)(&favorite_preview(item))).ok();
    }

    output
}

/// `[context] • <first 20 chars of the Chinese translation>...`
pub fn favorite_preview(item: &FavoriteItem) -> String {
    let context = if item.context.is_empty() {
        NO_CONTEXT.to_string()
    } else {
        format!("[{}]", item.context)
    };
    let zh: String = item.result.zh.chars().take(PREVIEW_CHARS).collect();
    format!("{} • {}...", context, zh)
}

/// Local calendar date of an epoch-millisecond timestamp
pub fn format_date(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => "----------".to_string(),
    }
}

/// Keep the first four characters of a credential, hide the rest
pub fn mask_credential(credential: &str) -> String {
    if credential.is_empty() {
        return String::new();
    }
    let visible: String = credential.chars().take(4).collect();
    let hidden = credential.chars().count().saturating_sub(4).max(4);
    format!("{}{}", visible, "*".repeat(hidden))
}

/// What the user sees for a failed translation
pub fn user_message(err: &TranslationError) -> String {
    match err {
        TranslationError::MissingCredential => MISSING_CREDENTIAL.to_string(),
        TranslationError::EmptyResponse | TranslationError::MalformedResponse(_) => {
            GENERIC_FAILURE.to_string()
        }
        TranslationError::ProviderError(message) if !message.is_empty() => message.clone(),
        TranslationError::ProviderError(_) => GENERIC_FAILURE.to_string(),
    }
}

pub fn format_error(message: &str, theme: &Theme) -> String {
    (theme.error)(&format!("✘ {}", message))
}

pub fn format_notice(message: &str, theme: &Theme) -> String {
    (theme.notice)(message)
}

fn first_line(text: &str) -> String {
    let line = text.lines().next().unwrap_or_default();
    if text.lines().nth(1).is_some() {
        format!("{} …", line)
    } else {
        line.to_string()
    }
}
