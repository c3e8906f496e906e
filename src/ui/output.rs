use crate::output::is_quiet;
use crate::ui::{theme, Icons};
use owo_colors::{OwoColorize, Style};

/// Severity of a one-line notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
    Error,
}

impl Level {
    fn icon(self) -> &'static str {
        match self {
            Level::Ok => Icons::CHECK,
            Level::Warn => Icons::WARN,
            Level::Error => Icons::CROSS,
        }
    }

    fn style(self) -> Style {
        match self {
            Level::Ok => theme().ok,
            Level::Warn => theme().warn,
            Level::Error => theme().error,
        }
    }
}

/// Print a notice. Warnings and errors go to stderr so JSON on stdout stays clean.
pub fn notice(level: Level, message: &str) {
    let line = format!("{} {}", level.icon(), message.style(level.style()));
    match level {
        Level::Ok => println!("{}", line),
        Level::Warn | Level::Error => eprintln!("{}", line),
    }
}

/// Top-of-command banner, hidden when quiet
pub fn header(icon: &str, text: &str) {
    if is_quiet() {
        return;
    }
    println!("{} {}", icon, text.style(theme().header));
}

/// Numbered heading for one entry of a result list
pub fn heading(n: usize, title: &str) {
    println!();
    println!("{}. {}", n, title.style(theme().accent));
}

/// Indented `label  value` line with aligned values
pub fn field(label: &str, value: &str) {
    println!("  {} {}", format!("{:<13}", label).style(theme().label), value);
}

pub fn info(icon: &str, label: &str, value: &str) {
    println!("{} {}: {}", icon, label.style(theme().label), value);
}

pub fn faint(text: &str) -> String {
    text.style(theme().faint).to_string()
}
