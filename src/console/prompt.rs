//! Interactive questions asked when an option was not given on the command line.

use crate::domain::{AppError, Result};
use colored::Colorize;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use std::io::{self, BufRead, IsTerminal, Write};

pub trait Prompter {
    /// Ask for a non-empty line of text.
    fn input(&mut self, message: &str) -> Result<String>;

    /// Ask for a secret without echoing it; an empty answer is allowed.
    fn password(&mut self, message: &str) -> Result<String>;

    /// Ask a yes/no question; an empty answer picks `default`.
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;

    /// Let the user pick any number of `choices`; returns their indices.
    fn select_many(&mut self, message: &str, choices: &[String]) -> Result<Vec<usize>>;
}

pub struct Prompt<R, W> {
    reader: R,
    writer: W,
    /// Read secrets key by key from the terminal instead of `reader`.
    masked: bool,
}

impl Prompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        let stdin = io::stdin();
        let masked = stdin.is_terminal();
        Self {
            masked,
            ..Self::new(stdin.lock(), io::stdout())
        }
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            masked: false,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn question(&mut self, question: &str) -> Result<()> {
        write!(self.writer, "{} {} ", "?".green().bold(), question.bold())?;
        self.writer.flush()?;
        Ok(())
    }

    fn read_answer(&mut self) -> Result<String> {
        let mut answer = String::new();
        if self.reader.read_line(&mut answer)? == 0 {
            writeln!(self.writer)?;
            return Err(AppError::PromptClosed);
        }
        Ok(answer)
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        self.question(question)?;
        Ok(self.read_answer()?.trim().to_string())
    }
}

/// Read one line from the terminal in raw mode so nothing is echoed.
fn read_hidden() -> Result<String> {
    terminal::enable_raw_mode()?;
    let secret = read_hidden_keys();
    terminal::disable_raw_mode()?;
    secret
}

fn read_hidden_keys() -> Result<String> {
    let mut secret = String::new();
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }
        match key.code {
            KeyCode::Enter => return Ok(secret),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Err(AppError::PromptClosed)
            }
            KeyCode::Backspace => {
                secret.pop();
            }
            KeyCode::Char(c) => secret.push(c),
            _ => {}
        }
    }
}

impl<R: BufRead, W: Write> Prompter for Prompt<R, W> {
    fn input(&mut self, message: &str) -> Result<String> {
        loop {
            let answer = self.ask(message)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
        }
    }

    fn password(&mut self, message: &str) -> Result<String> {
        self.question(message)?;
        if self.masked {
            let secret = read_hidden()?;
            writeln!(self.writer)?;
            return Ok(secret);
        }
        let answer = self.read_answer()?;
        Ok(answer.trim_end_matches(['\r', '\n']).to_string())
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        let hint = if default { "(Y/n)" } else { "(y/N)" };
        loop {
            let answer = self.ask(&format!("{message} {hint}"))?;
            match answer.to_ascii_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.writer, "Please answer y or n.")?,
            }
        }
    }

    fn select_many(&mut self, message: &str, choices: &[String]) -> Result<Vec<usize>> {
        writeln!(self.writer, "{} {}", "?".green().bold(), message.bold())?;
        for (i, choice) in choices.iter().enumerate() {
            writeln!(self.writer, "  {:>3}) {}", i + 1, choice)?;
        }
        loop {
            let answer = self.ask("Select (e.g. 1,3-5 or all; empty for none):")?;
            match parse_selection(&answer, choices.len()) {
                Ok(selected) => return Ok(selected),
                Err(reason) => writeln!(self.writer, "{}", reason.as_str().red())?,
            }
        }
    }
}

/// Parse `1,3-5 7` / `all` into sorted, de-duplicated zero-based indices.
pub fn parse_selection(answer: &str, len: usize) -> std::result::Result<Vec<usize>, String> {
    let answer = answer.trim();
    if answer.eq_ignore_ascii_case("all") {
        return Ok((0..len).collect());
    }

    let parse_one = |s: &str| -> std::result::Result<usize, String> {
        match s.trim().parse::<usize>() {
            Ok(n) if (1..=len).contains(&n) => Ok(n - 1),
            _ => Err(format!("`{s}` is not a number between 1 and {len}")),
        }
    };

    let mut selected = Vec::new();
    for part in answer.split([',', ' ']).filter(|p| !p.trim().is_empty()) {
        match part.split_once('-') {
            Some((from, to)) => {
                let (from, to) = (parse_one(from)?, parse_one(to)?);
                if from > to {
                    return Err(format!("`{part}` is not an ascending range"));
                }
                selected.extend(from..=to);
            }
            None => selected.push(parse_one(part)?),
        }
    }
    selected.sort_unstable();
    selected.dedup();
    Ok(selected)
}
