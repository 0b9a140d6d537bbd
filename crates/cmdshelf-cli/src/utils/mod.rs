//! # Utility Functions and Helpers
//!
//! Shared helpers for the CLI commands.
//!
//! - [`clipboard`]: OSC 52 clipboard writes
//! - [`formatting`]: collection colors and tag display
//! - [`logging`]: tracing subscriber and color control
//! - [`parsing`]: `--param` specification parsing
//! - [`shell`]: running expanded command lines

pub mod clipboard;
pub mod formatting;
pub mod logging;
pub mod parsing;
pub mod shell;

pub use logging::initialize_logging;
