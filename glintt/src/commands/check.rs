//! The check subcommand: validate a TOML language definition.
//!
//! Language definitions must fail fast and loudly at registration time,
//! before any document is opened with them; this command is that check
//! as a standalone tool.

use std::path::PathBuf;

use glint_lang::LanguageConfig;
use glint_util::{Handler, Span};

use crate::error::{GlinttError, Result};
use crate::langfile::LanguageFile;

/// Arguments for the check subcommand.
#[derive(Debug)]
pub struct CheckArgs {
    /// The definition file to validate.
    pub file: PathBuf,
    /// Verbose output.
    pub verbose: bool,
}

/// Run the check command.
///
/// Prints collected diagnostics to stderr and returns an error when the
/// definition is invalid, so the process exits nonzero.
pub fn run_check(args: CheckArgs) -> Result<()> {
    let handler = Handler::new();
    let file = LanguageFile::load(&args.file)?;

    match LanguageConfig::new(file.to_options()) {
        Ok(config) => {
            println!(
                "ok: language `{}` is well-formed ({} reserved identifiers, {} reserved operators)",
                config.name,
                config.reserved_identifiers.len(),
                config.reserved_operators.len()
            );
            if args.verbose {
                println!(
                    "  strings: {} quoting conventions; character literals: {}; comments: {}{}",
                    config.string_pattern.styles.len(),
                    if config.character_pattern.is_some() {
                        "yes"
                    } else {
                        "no"
                    },
                    config
                        .single_line_comment
                        .as_deref()
                        .map(|m| format!("`{}` ", m))
                        .unwrap_or_default(),
                    config
                        .nested_comment
                        .as_ref()
                        .map(|(open, close)| format!("`{}`..`{}`", open, close))
                        .unwrap_or_default()
                );
            }
            Ok(())
        }
        Err(err) => {
            handler.error(err.to_string(), Span::DUMMY);
            for diagnostic in handler.take_diagnostics() {
                eprintln!("{}", diagnostic);
            }
            Err(GlinttError::Config(format!(
                "language definition {} is invalid",
                args.file.display()
            )))
        }
    }
}
