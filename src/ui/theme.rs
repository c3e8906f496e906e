use owo_colors::Style;
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub header: Style,
    /// Job titles and companies
    pub accent: Style,
    pub ok: Style,
    pub warn: Style,
    pub error: Style,
    /// Field labels
    pub label: Style,
    /// Timestamps, paths and other secondary text
    pub faint: Style,
}

impl Theme {
    /// Colored on a terminal unless `NO_COLOR` is set
    pub fn detect() -> Self {
        let colored = std::env::var_os("NO_COLOR").is_none() && console::Term::stdout().is_term();
        if colored { Self::colored() } else { Self::default() }
    }

    pub fn colored() -> Self {
        Self {
            header: Style::new().cyan().bold(),
            accent: Style::new().blue().bold(),
            ok: Style::new().green().bold(),
            warn: Style::new().yellow().bold(),
            error: Style::new().red().bold(),
            label: Style::new().white().dimmed(),
            faint: Style::new().bright_black(),
        }
    }
}

impl Default for Theme {
    /// No styling, for pipes and `NO_COLOR`
    fn default() -> Self {
        let plain = Style::new();
        Self {
            header: plain,
            accent: plain,
            ok: plain,
            warn: plain,
            error: plain,
            label: plain,
            faint: plain,
        }
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::detect)
}
