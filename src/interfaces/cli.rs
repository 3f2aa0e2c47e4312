use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "transpro")]
#[command(about = "Context-aware translation into Traditional Chinese, English and Japanese.")]
#[command(version)]
pub struct Cli {
    /// Industry or domain context (e.g. medical, legal)
    #[arg(short = 'c', long)]
    pub context: Option<String>,

    /// Choose color theme (default, dark, light)
    #[arg(short = 'T', long)]
    pub theme: Option<String>,

    /// Keep credential and favorites in memory only
    #[arg(long)]
    pub ephemeral: bool,

    /// Output as JSON (one-shot mode)
    #[arg(long)]
    pub json: bool,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Edit configuration file
    #[arg(long)]
    pub edit_config: bool,

    /// Show status
    #[arg(long)]
    pub status: bool,

    /// Text to translate once; starts an interactive session when omitted
    #[arg(num_args = 1..)]
    pub text: Vec<String>,
}
