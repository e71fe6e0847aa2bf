//! The languages subcommand: list registered languages.

use std::path::PathBuf;

use crate::commands::common::load_registry;
use crate::error::Result;

/// Arguments for the languages subcommand.
#[derive(Debug)]
pub struct LanguagesArgs {
    /// Optional TOML language definition to register first.
    pub lang_file: Option<PathBuf>,
    /// Verbose output.
    pub verbose: bool,
}

/// Run the languages command.
pub fn run_languages(args: LanguagesArgs) -> Result<()> {
    let registry = load_registry(args.lang_file.as_deref())?;

    for name in registry.names() {
        if args.verbose {
            if let Some(config) = registry.get(&name) {
                println!(
                    "{} ({} reserved identifiers, {} reserved operators)",
                    name,
                    config.reserved_identifiers.len(),
                    config.reserved_operators.len()
                );
                continue;
            }
        }
        println!("{}", name);
    }

    Ok(())
}
