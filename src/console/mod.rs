//! Everything the user sees or types: status lines, prompts and the banner.

pub mod banner;
pub mod log;
pub mod prompt;
pub mod spinner;

pub use log::{hl, Level, Log};
pub use prompt::{Prompt, Prompter};
pub use spinner::Spinner;
