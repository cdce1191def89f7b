//! Styled status lines.
//!
//! ```text
//! |   INFO      | Reading the text file...
//! |   ERROR     | Failed to copy C:\a to D:\b
//! ```

use colored::{Color, Colorize};

const INDENT: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Log,
    Info,
    Warning,
    Success,
    Error,
}

impl Level {
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Log => "LOG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Success => "SUCCESS",
            Self::Error => "ERROR",
        }
    }

    const fn color(&self) -> Color {
        match self {
            Self::Log => Color::White,
            Self::Info => Color::Cyan,
            Self::Warning => Color::Yellow,
            Self::Success => Color::Green,
            Self::Error => Color::Red,
        }
    }
}

/// Badge text between the bars: three spaces, then the title padded to 10.
pub fn badge_text(level: Level) -> String {
    format!("   {:<10}", level.title())
}

/// Split a message into its leading newlines and the indented remainder.
pub fn split_message(message: &str) -> (&str, String) {
    let leading_ws = message.len() - message.trim_start().len();
    let (newlines, rest) = match message[..leading_ws].rfind(['\n', '\r']) {
        Some(pos) => message.split_at(pos + 1),
        None => ("", message),
    };
    let indented = rest.replace('\n', &format!("\n{}", " ".repeat(INDENT)));
    (newlines, indented)
}

pub fn format_line(level: Level, message: &str) -> String {
    let color = level.color();
    let badge = format!(
        "{}{}{}",
        "|".color(color),
        badge_text(level).as_str().color(color).bold().reversed(),
        "|".color(color)
    );
    let (newlines, body) = split_message(message);
    let body = match level {
        Level::Log => body.as_str().normal(),
        _ => body.as_str().color(color),
    };
    format!("{newlines}{badge} {body}")
}

/// Console status output. Errors go to stderr, everything else to stdout.
pub struct Log;

impl Log {
    pub fn log(message: impl AsRef<str>) {
        println!("{}", format_line(Level::Log, message.as_ref()));
    }

    pub fn info(message: impl AsRef<str>) {
        println!("{}", format_line(Level::Info, message.as_ref()));
    }

    pub fn warn(message: impl AsRef<str>) {
        println!("{}", format_line(Level::Warning, message.as_ref()));
    }

    pub fn success(message: impl AsRef<str>) {
        println!("{}", format_line(Level::Success, message.as_ref()));
    }

    pub fn error(message: impl AsRef<str>) {
        eprintln!("{}", format_line(Level::Error, message.as_ref()));
    }
}

/// Highlight a value inside a message.
pub fn hl(value: impl std::fmt::Display) -> colored::ColoredString {
    value.to_string().yellow()
}
