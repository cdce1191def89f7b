//! Parsing of the newline-delimited text files every command consumes.
//!
//! All list formats share the same base rules: lines are split on `\r\n`, `\n`
//! or `\r`, trimmed, and blank lines or lines starting with `#` are dropped.

use crate::domain::{AppError, Result};
use regex::Regex;
use std::sync::LazyLock;

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n|\n|\r").expect("valid regex"));

static SCRIPT_CONTINUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r";\s*(?:\r\n|\n|\r)[ \t]*").expect("valid regex"));

static ENV_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%([^%\r\n]+)%").expect("valid regex"));

fn is_entry(line: &str) -> bool {
    !line.is_empty() && !line.starts_with('#')
}

/// Split a text file into its meaningful lines.
pub fn parse_lines(text: &str) -> Vec<String> {
    LINE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|line| is_entry(line))
        .map(str::to_string)
        .collect()
}

/// Split a scripts file into commands.
///
/// A line ending in `;` continues on the next line, so
///
/// ```text
/// git config --global user.name "Me";
///   git config --global user.email me@example.com
/// ```
///
/// becomes a single command. Blank lines after the `;` are skipped too.
pub fn parse_scripts(text: &str) -> Vec<String> {
    parse_lines(&SCRIPT_CONTINUATION.replace_all(text, "; "))
}

/// Parse `choco list --limit-output` output (`name|version` per line).
pub fn parse_choco_list(output: &str) -> Vec<String> {
    LINE_BREAK
        .split(output)
        .map(|line| line.split('|').next().unwrap_or_default().trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Last component of a Windows or POSIX path, ignoring trailing separators.
pub fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches(['\\', '/']);
    trimmed
        .rsplit(['\\', '/'])
        .next()
        .unwrap_or(trimmed)
}

/// Reject lists where two entries would land on the same backup name.
pub fn ensure_unique_basenames(paths: &[String]) -> Result<()> {
    for (i, current) in paths.iter().enumerate() {
        let current_name = basename(current);
        if let Some(other) = paths[i + 1..]
            .iter()
            .find(|other| basename(other).eq_ignore_ascii_case(current_name))
        {
            return Err(AppError::DuplicateBasename {
                first: current.clone(),
                second: other.clone(),
            });
        }
    }
    Ok(())
}

/// Replace `%NAME%` references using `lookup`; unknown names stay as written.
pub fn expand_env_refs(path: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    ENV_REFERENCE
        .replace_all(path, |caps: &regex::Captures<'_>| {
            lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
