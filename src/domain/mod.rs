pub mod bloat;
pub mod common;
pub mod environment;
pub mod error;
pub mod lists;
pub mod tweaks;

pub use common::*;
pub use environment::*;
pub use error::*;
pub use tweaks::{Hive, RegAction, RegEdit, Tweak};
