pub mod choco;
pub mod elevation;
pub mod file_system;
pub mod registry;
pub mod shell;
