//! Core domain types - pure data structures with no dependencies.

// =============================================================================
// Batch Results
// =============================================================================

/// Outcome of a command that walks a list of items and keeps going on failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub succeeded: usize,
    pub skipped: usize,
    pub failed: Vec<String>,
}

impl BatchReport {
    pub fn success(&mut self) {
        self.succeeded += 1;
    }

    pub fn skip(&mut self) {
        self.skipped += 1;
    }

    pub fn failure(&mut self, item: impl Into<String>) {
        self.failed.push(item.into());
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.skipped + self.failed.len()
    }
}

// =============================================================================
// Environment Scope
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    User,
    Machine,
}

impl Scope {
    pub fn from_machine_flag(machine: bool) -> Self {
        if machine {
            Self::Machine
        } else {
            Self::User
        }
    }

    /// Name understood by `[Environment]::SetEnvironmentVariable`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Machine => "Machine",
        }
    }
}
