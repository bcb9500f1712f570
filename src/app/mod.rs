//! Main application modules.
//!
//! This module provides the interactive prompt and the console report writer
//! used by the main application.

pub mod console;
pub mod prompt;

// Re-export public API
pub use console::{Console, BANNER};
pub use prompt::read_domain;
