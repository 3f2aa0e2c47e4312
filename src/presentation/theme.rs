use colored::Colorize;

pub const THEME_NAMES: [&str; 3] = ["default", "dark", "light"];

pub struct Theme {
    pub name: &'static str,
    pub title: fn(&str) -> String,
    pub tab_active: fn(&str) -> String,
    pub tab: fn(&str) -> String,
    pub text: fn(&str) -> String,
    pub line: fn(&str) -> String,
    pub heading: fn(&str) -> String,
    pub glossary: fn(&str) -> String,
    pub idx: fn(&str) -> String,
    pub meta: fn(&str) -> String,
    pub notice: fn(&str) -> String,
    pub error: fn(&str) -> String,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        match name {
            "default" | "" => Self::default_theme(),
            "dark" => Self::dark(),
            "light" => Self::light(),
            _ => {
                eprintln!("{}", format!("✘ Unknown theme: {}", name).red());
                Self::default_theme() // Fallback to default
            }
        }
    }

    /// dark <-> light; default counts as dark
    pub fn toggled(&self) -> Self {
        match self.name {
            "light" => Self::dark(),
            _ => Self::light(),
        }
    }

    fn default_theme() -> Self {
        Self {
            name: "default",
            title: |s| s.bright_blue().bold().to_string(),
            tab_active: |s| s.blue().bold().underline().to_string(),
            tab: |s| s.bright_black().to_string(),
            text: |s| s.normal().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            heading: |s| s.yellow().bold().to_string(),
            glossary: |s| s.white().to_string(),
            idx: |s| s.bright_white().to_string(),
            meta: |s| s.bright_black().italic().to_string(),
            notice: |s| s.green().to_string(),
            error: |s| s.red().to_string(),
        }
    }

    fn dark() -> Self {
        Self {
            name: "dark",
            title: |s| s.bright_cyan().bold().to_string(),
            tab_active: |s| s.bright_cyan().bold().underline().to_string(),
            tab: |s| s.bright_black().to_string(),
            text: |s| s.bright_white().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            heading: |s| s.bright_yellow().bold().to_string(),
            glossary: |s| s.white().to_string(),
            idx: |s| s.cyan().to_string(),
            meta: |s| s.bright_black().italic().to_string(),
            notice: |s| s.bright_green().to_string(),
            error: |s| s.bright_red().to_string(),
        }
    }

    fn light() -> Self {
        Self {
            name: "light",
            title: |s| s.blue().bold().to_string(),
            tab_active: |s| s.blue().bold().underline().to_string(),
            tab: |s| s.bright_black().to_string(),
            text: |s| s.black().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            heading: |s| s.magenta().bold().to_string(),
            glossary: |s| s.black().to_string(),
            idx: |s| s.blue().to_string(),
            meta: |s| s.bright_black().italic().to_string(),
            notice: |s| s.green().to_string(),
            error: |s| s.red().bold().to_string(),
        }
    }
}
