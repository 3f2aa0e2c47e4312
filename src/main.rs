// Main entry point
use clap::Parser;
use colored::Colorize;
use std::sync::Arc;
use transpro::application::{run_translation, TranslationOutcome};
use transpro::domain::traits::KeyValueStore;
use transpro::infrastructure::config::{self, load_config, Config};
use transpro::infrastructure::network::{create_client, ChatCompletionTranslator};
use transpro::infrastructure::storage::{MemoryStore, SqliteStore};
use transpro::interfaces::cli::Cli;
use transpro::interfaces::repl::Repl;
use transpro::presentation::{render, theme::Theme};
use transpro::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config()?;

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }
    if cli.edit_config {
        if let Some(config_path) = config::get_config_path() {
            let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
            // Run editor in blocking task
            tokio::task::spawn_blocking(move || {
                std::process::Command::new(editor).arg(&config_path).status()
            })
            .await??;
        } else {
            eprintln!("{}", "Config file not found".red());
        }
        return Ok(());
    }

    let store: Arc<dyn KeyValueStore> = if cli.ephemeral {
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(SqliteStore::open(&config::get_store_path(&config)).await?)
    };
    let translator = Arc::new(ChatCompletionTranslator::new(
        create_client(&config)?,
        &config.provider,
    ));
    let mut state = AppState::load(store, translator).await;
    if let Some(context) = &cli.context {
        state.view.context = context.clone();
    }

    if cli.status {
        print_status(&state, &config, cli.ephemeral);
        return Ok(());
    }

    let theme_name = cli.theme.as_deref().unwrap_or(config.theme.as_str());
    let theme = Theme::from_name(theme_name);

    // One-shot translation
    if !cli.text.is_empty() {
        state.view.source_text = cli.text.join(" ");
        return translate_once(&mut state, &theme, cli.json).await;
    }

    let mut repl = Repl::new(tokio::io::BufReader::new(tokio::io::stdin()), theme);
    tokio::select! {
        result = repl.run(&mut state) => result?,
        _ = tokio::signal::ctrl_c() => eprintln!("\n再見！"),
    }

    Ok(())
}

async fn translate_once(state: &mut AppState, theme: &Theme, json: bool) -> anyhow::Result<()> {
    match run_translation(state).await {
        TranslationOutcome::Translated => {
            if let Some(result) = &state.view.result {
                if json {
                    println!("{}", serde_json::to_string_pretty(result)?);
                } else {
                    print!(
                        "{}",
                        render::format_result(result, state.view.active_tab, theme)
                    );
                }
            }
            Ok(())
        }
        TranslationOutcome::NeedsCredential => {
            anyhow::bail!("{} (run `transpro` and use /key)", render::MISSING_CREDENTIAL)
        }
        TranslationOutcome::Skipped => anyhow::bail!("Nothing to translate"),
        TranslationOutcome::Failed(e) => anyhow::bail!("{}", render::user_message(&e)),
    }
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &config::Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let level = match logging.level.as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" => "warn",
        "ERROR" => "error",
        _ => "warn",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = logging.path.as_deref().filter(|p| !p.is_empty()) {
        // Log to file
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(file)
            .with_ansi(false)
            .init();
        return Ok(());
    }

    // Log to stderr (default)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn print_status(state: &AppState, config: &Config, ephemeral: bool) {
    println!("{}", "transpro Status".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    if ephemeral {
        println!("Store: in memory");
    } else {
        println!("Store: {}", config::get_store_path(config).display());
    }
    println!("Favorites: {}", state.favorites().len());
    println!(
        "Config: {}",
        config::get_config_path()
            .filter(|p| p.exists())
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Not found (using defaults)".to_string())
    );
    println!(
        "Provider: {} ({})",
        config.provider.api_base, config.provider.model
    );

    if state.has_credential() {
        println!(
            "API Key: Configured ({})",
            render::mask_credential(state.credential())
        );
    } else {
        println!("API Key: Not configured");
    }
}
