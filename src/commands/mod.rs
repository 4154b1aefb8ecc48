//! CLI command implementations.

pub mod extract;

pub use extract::ExtractCommand;
