// Terminal clipboard via the OSC 52 escape sequence
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::io::Write;

/// Escape sequence asking the terminal to put `text` on the system clipboard
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1B]52;c;{}\x07", STANDARD.encode(text))
}

pub fn copy_to_clipboard(text: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(osc52_sequence(text).as_bytes())?;
    stdout.flush()
}
