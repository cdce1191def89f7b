//! Environment variable list entries and `PATH` composition.

use crate::domain::lists::parse_lines;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvEntry {
    pub key: String,
    pub value: String,
}

impl EnvEntry {
    pub fn is_path(&self) -> bool {
        self.key.eq_ignore_ascii_case("PATH")
    }
}

/// Parsed environment file: usable entries plus lines that had no key.
#[derive(Debug, Default)]
pub struct EnvList {
    pub entries: Vec<EnvEntry>,
    pub rejected: Vec<String>,
}

/// `KEY=VALUE` sets a variable; a bare line is a directory for `PATH`.
pub fn parse_env_entries(text: &str) -> EnvList {
    let mut list = EnvList::default();
    for line in parse_lines(text) {
        match line.split_once('=') {
            Some((key, _)) if key.trim().is_empty() => list.rejected.push(line.clone()),
            Some((key, value)) => list.entries.push(EnvEntry {
                key: key.trim().to_string(),
                value: value.trim().to_string(),
            }),
            None => list.entries.push(EnvEntry {
                key: "PATH".to_string(),
                value: line,
            }),
        }
    }
    list
}

fn same_dir(a: &str, b: &str) -> bool {
    a.trim().trim_end_matches('\\').eq_ignore_ascii_case(b.trim().trim_end_matches('\\'))
}

/// Append `dir` to a `;`-separated `PATH`, or `None` when already present.
pub fn append_path_entry(current: &str, dir: &str) -> Option<String> {
    if current.split(';').any(|existing| same_dir(existing, dir)) {
        return None;
    }

    let base = current.trim_end_matches(';');
    if base.is_empty() {
        Some(dir.to_string())
    } else {
        Some(format!("{base};{dir}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_values_and_path_lines() {
        let text = "ANDROID_HOME=F:\\Android\\Sdk\n# Will be added to PATH\nF:\\Android\\Sdk\\emulator\n JAVA_OPTS = -Xmx2g -Da=b \n=orphan\n";
        let list = parse_env_entries(text);

        assert_eq!(
            list.entries,
            vec![
                EnvEntry {
                    key: "ANDROID_HOME".into(),
                    value: "F:\\Android\\Sdk".into()
                },
                EnvEntry {
                    key: "PATH".into(),
                    value: "F:\\Android\\Sdk\\emulator".into()
                },
                EnvEntry {
                    key: "JAVA_OPTS".into(),
                    value: "-Xmx2g -Da=b".into()
                },
            ]
        );
        assert_eq!(list.rejected, vec!["=orphan".to_string()]);
        assert!(list.entries[1].is_path());
    }

    #[test]
    fn path_append_skips_existing_dirs() {
        let current = r"C:\Windows\system32;C:\Tools\;";
        assert_eq!(append_path_entry(current, r"c:\tools"), None);
        assert_eq!(
            append_path_entry(current, r"F:\Android\Sdk\emulator"),
            Some(r"C:\Windows\system32;C:\Tools\;F:\Android\Sdk\emulator".to_string())
        );
    }

    #[test]
    fn path_append_to_empty_path() {
        assert_eq!(append_path_entry("", r"C:\bin"), Some(r"C:\bin".to_string()));
    }
}
