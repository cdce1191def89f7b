//! Progress line for steps that wait on an external program.
//!
//! On a terminal the line is cleared again once the step finishes, so only
//! the outcome stays on screen. Redirected output keeps every line.

use super::log::Log;
use colored::Colorize;
use crossterm::{cursor, execute, terminal};
use std::io::{self, IsTerminal, Write};
use tracing::debug;

pub struct Spinner {
    inline: bool,
    /// A progress line is on screen and not yet cleared.
    shown: bool,
}

impl Spinner {
    pub fn start(message: impl AsRef<str>) -> Self {
        let mut spinner = Self {
            inline: io::stdout().is_terminal(),
            shown: false,
        };
        spinner.restart(message);
        spinner
    }

    pub fn restart(&mut self, message: impl AsRef<str>) {
        self.clear();
        let line = format!("{} {}", "⠋".cyan(), message.as_ref().dimmed());
        if self.inline {
            print!("{line}");
            if let Err(e) = io::stdout().flush() {
                debug!("spinner flush failed: {e}");
            }
            self.shown = true;
        } else {
            println!("{line}");
        }
    }

    pub fn success(&mut self, message: impl AsRef<str>) {
        self.clear();
        Log::success(message);
    }

    pub fn error(&mut self, message: impl AsRef<str>) {
        self.clear();
        Log::error(message);
    }

    pub fn stop(&mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        if !self.shown {
            return;
        }
        self.shown = false;
        if let Err(e) = execute!(
            io::stdout(),
            cursor::MoveToColumn(0),
            terminal::Clear(terminal::ClearType::CurrentLine)
        ) {
            debug!("spinner clear failed: {e}");
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.clear();
    }
}
