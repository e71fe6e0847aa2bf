//! Command modules for the glintt CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand is implemented in its own file following a
//! standardized pattern.

pub mod common;

pub mod check;
pub mod languages;
pub mod rescan;
pub mod tokenize;

// Re-export command types and functions
pub use check::{run_check, CheckArgs};
pub use languages::{run_languages, LanguagesArgs};
pub use rescan::{run_rescan, RescanArgs};
pub use tokenize::{run_tokenize, OutputFormat, TokenizeArgs};
