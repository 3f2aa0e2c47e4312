//! Interactive terminal session.
//!
//! Plain lines are appended to the source text; lines starting with `/` are
//! commands acting on the [`AppState`].

use crate::application::favorites::{delete_favorite, load_favorite, save_favorite};
use crate::application::translate::{run_translation, TranslationOutcome};
use crate::domain::error::TransproError;
use crate::domain::model::Language;
use crate::presentation::clipboard::copy_to_clipboard;
use crate::presentation::render::{self, format_error, format_notice};
use crate::presentation::theme::{Theme, THEME_NAMES};
use crate::state::AppState;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Append(String),
    Translate,
    Context(String),
    ShowKey,
    SetKey(String),
    ClearKey,
    ShowText,
    Clear,
    Tab(String),
    Copy,
    Save,
    Favorites,
    Open(String),
    Delete(String),
    Theme(Option<String>),
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if !trimmed.starts_with('/') {
        return Command::Append(line.to_string());
    }

    let (name, arg) = match trimmed.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (trimmed, ""),
    };

    match name {
        "/t" | "/translate" => Command::Translate,
        "/context" | "/ctx" => Command::Context(arg.to_string()),
        "/key" if arg.is_empty() => Command::ShowKey,
        "/key" if arg == "--clear" => Command::ClearKey,
        "/key" => Command::SetKey(arg.to_string()),
        "/text" => Command::ShowText,
        "/clear" => Command::Clear,
        "/tab" => Command::Tab(arg.to_string()),
        "/copy" => Command::Copy,
        "/save" => Command::Save,
        "/favs" | "/favorites" => Command::Favorites,
        "/open" => Command::Open(arg.to_string()),
        "/del" | "/delete" => Command::Delete(arg.to_string()),
        "/theme" if arg.is_empty() => Command::Theme(None),
        "/theme" => Command::Theme(Some(arg.to_string())),
        "/help" | "/?" => Command::Help,
        "/quit" | "/exit" | "/q" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

/// Resolve a 1-based list position or a literal id to a favorite id
pub fn resolve_favorite(state: &AppState, token: &str) -> Option<String> {
    let token = token.trim();
    if let Ok(n) = token.parse::<usize>() {
        if (1..=state.favorites().len()).contains(&n) {
            return Some(state.favorites()[n - 1].id.clone());
        }
    }
    state.favorite(token).map(|item| item.id.clone())
}

pub struct Repl<R> {
    lines: Lines<R>,
    theme: Theme,
}

impl<R> Repl<R>
where
    R: AsyncBufRead + Unpin,
{
    pub fn new(reader: R, theme: Theme) -> Self {
        Self {
            lines: reader.lines(),
            theme,
        }
    }

    pub async fn run(&mut self, state: &mut AppState) -> Result<(), TransproError> {
        println!(
            "{} {}",
            (self.theme.title)("TransPro 翻譯助手"),
            (self.theme.meta)("輸入內容後使用 /t 開始翻譯，/help 查看指令")
        );
        if !state.has_credential() {
            println!("{}", format_notice(render::MISSING_CREDENTIAL, &self.theme));
        }

        loop {
            print!("{} ", (self.theme.idx)("›"));
            std::io::stdout().flush()?;

            let Some(line) = self.lines.next_line().await? else {
                break;
            };

            match parse_command(&line) {
                Command::Quit => break,
                command => self.dispatch(state, command).await?,
            }
        }

        Ok(())
    }

    async fn dispatch(
        &mut self,
        state: &mut AppState,
        command: Command,
    ) -> Result<(), TransproError> {
        let theme = &self.theme;
        match command {
            Command::Append(text) => {
                if !state.view.source_text.is_empty() {
                    state.view.source_text.push('\n');
                }
                state.view.source_text.push_str(&text);
            }
            Command::Translate => self.translate(state).await,
            Command::Context(label) => {
                state.view.context = label;
                let shown = if state.view.context.is_empty() {
                    render::NO_CONTEXT.to_string()
                } else {
                    format!("[{}]", state.view.context)
                };
                println!("{}", format_notice(&format!("產業背景: {}", shown), theme));
            }
            Command::ShowKey => {
                if state.has_credential() {
                    println!("API Key: {}", render::mask_credential(state.credential()));
                } else {
                    println!("{}", format_notice(render::MISSING_CREDENTIAL, theme));
                }
                println!("{}", (theme.meta)(render::CREDENTIAL_NOTICE));
            }
            Command::SetKey(value) => {
                state.set_credential(&value).await?;
                println!(
                    "{}",
                    format_notice(
                        &format!("API Key 已儲存: {}", render::mask_credential(&value)),
                        theme
                    )
                );
            }
            Command::ClearKey => {
                state.set_credential("").await?;
                println!("{}", format_notice("API Key 已清除", theme));
            }
            Command::ShowText => {
                if state.view.source_text.is_empty() {
                    println!("{}", render::format_empty_state(theme));
                } else {
                    println!("{}", (theme.text)(&state.view.source_text));
                }
            }
            Command::Clear => {
                state.view.source_text.clear();
                state.view.result = None;
                println!("{}", format_notice("已清除輸入內容", theme));
            }
            Command::Tab(code) => match code.parse::<Language>() {
                Ok(lang) => {
                    state.view.active_tab = lang;
                    self.show_result(state);
                }
                Err(e) => println!("{}", format_error(&e, theme)),
            },
            Command::Copy => match &state.view.result {
                Some(result) => {
                    copy_to_clipboard(result.text(state.view.active_tab))?;
                    println!(
                        "{}",
                        format_notice(
                            &format!("已複製 {}", state.view.active_tab.label()),
                            theme
                        )
                    );
                }
                None => println!("{}", render::format_empty_state(theme)),
            },
            Command::Save => match save_favorite(state).await? {
                Some(_) => println!("{}", format_notice("已加入收藏！", theme)),
                None => println!("{}", render::format_empty_state(theme)),
            },
            Command::Favorites => {
                print!("{}", render::format_favorites(state.favorites(), theme));
            }
            Command::Open(token) => match resolve_favorite(state, &token) {
                Some(id) => {
                    load_favorite(state, &id);
                    self.show_result(state);
                }
                None => println!(
                    "{}",
                    format_error(&format!("找不到收藏: {}", token), theme)
                ),
            },
            Command::Delete(token) => {
                let Some(id) = resolve_favorite(state, &token) else {
                    println!("{}", format_error(&format!("找不到收藏: {}", token), theme));
                    return Ok(());
                };
                let lines = &mut self.lines;
                let deleted = delete_favorite(state, &id, move |item| {
                    let question = format!(
                        "{}\n確定要刪除此收藏嗎？ [y/N] ",
                        render::favorite_preview(item)
                    );
                    async move { confirm(lines, &question).await }
                })
                .await?;
                if deleted {
                    println!("{}", format_notice("已刪除收藏", &self.theme));
                }
            }
            Command::Theme(name) => {
                self.theme = match name {
                    Some(name) => Theme::from_name(&name),
                    None => self.theme.toggled(),
                };
                println!(
                    "{}",
                    format_notice(&format!("主題: {}", self.theme.name), &self.theme)
                );
            }
            Command::Help => print_help(theme),
            Command::Quit => {}
            Command::Unknown(name) => {
                println!(
                    "{}",
                    format_error(&format!("未知指令: {} (/help)", name), theme)
                );
            }
        }
        Ok(())
    }

    async fn translate(&self, state: &mut AppState) {
        let theme = &self.theme;
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(render::LOADING);
        spinner.enable_steady_tick(Duration::from_millis(120));

        let outcome = run_translation(state).await;
        spinner.finish_and_clear();

        match outcome {
            TranslationOutcome::Translated => self.show_result(state),
            TranslationOutcome::NeedsCredential => {
                println!("{}", format_error(render::MISSING_CREDENTIAL, theme));
                println!("{}", (theme.meta)("使用 /key <API Key> 設定"));
            }
            TranslationOutcome::Skipped => {
                println!("{}", (theme.meta)("請先輸入欲翻譯內容"));
            }
            TranslationOutcome::Failed(e) => {
                println!("{}", format_error(&render::user_message(&e), theme));
            }
        }
    }

    fn show_result(&self, state: &AppState) {
        match &state.view.result {
            Some(result) => print!(
                "{}",
                render::format_result(result, state.view.active_tab, &self.theme)
            ),
            None => println!("{}", render::format_empty_state(&self.theme)),
        }
    }
}

async fn confirm<R>(lines: &mut Lines<R>, question: &str) -> bool
where
    R: AsyncBufRead + Unpin,
{
    print!("{}", question);
    if std::io::stdout().flush().is_err() {
        return false;
    }
    match lines.next_line().await {
        Ok(Some(answer)) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        _ => false,
    }
}

fn print_help(theme: &Theme) {
    let rows = [
        ("<text>", "append a line to the source text"),
        ("/t, /translate", "translate the source text"),
        ("/context [label]", "set the industry context (empty clears)"),
        ("/key [value]", "show or set the API key (/key --clear removes it)"),
        ("/text", "show the source text"),
        ("/clear", "clear the source text and result"),
        ("/tab zh|en|ja", "switch result tab"),
        ("/copy", "copy the current tab to the clipboard"),
        ("/save", "save the current result to favorites"),
        ("/favs", "list favorites"),
        ("/open <n|id>", "open a favorite"),
        ("/del <n|id>", "delete a favorite"),
        ("/theme [name]", "toggle or choose a theme"),
        ("/quit", "exit"),
    ];
    for (cmd, desc) in rows {
        println!("  {:<18} {}", (theme.idx)(cmd), desc);
    }
    println!("  {}", (theme.meta)(&format!("themes: {}", THEME_NAMES.join(", "))));
}
