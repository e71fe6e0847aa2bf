//! Glintt CLI - A command-line tool for inspecting glint tokenization.
//!
//! This is the main entry point for the glintt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod error;
mod langfile;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    check::{run_check, CheckArgs},
    languages::{run_languages, LanguagesArgs},
    rescan::{run_rescan, RescanArgs},
    tokenize::{run_tokenize, OutputFormat, TokenizeArgs},
};
use error::{GlinttError, Result};

/// Glintt - A CLI tool for inspecting glint tokenization
///
/// Glintt tokenizes source files with a registered language
/// configuration, lists available languages, and validates language
/// definition files.
#[derive(Parser, Debug)]
#[command(name = "glintt")]
#[command(author = "Glint Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A CLI tool for inspecting glint tokenization", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "GLINTT_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, global = true, env = "GLINTT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the glintt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenize source files and print the classified tokens
    ///
    /// Reads each input file, tokenizes it with the selected language
    /// configuration, and prints every token with its span and kind.
    Tokenize(TokenizeCommand),

    /// List registered languages
    ///
    /// Prints the names of all registered language configurations,
    /// including any loaded from a definition file.
    Languages(LanguagesCommand),

    /// Apply an edit through the incremental re-scan coordinator
    ///
    /// Tokenizes a file, applies the given edit, prints the byte range
    /// the coordinator re-scanned, and cross-checks the spliced tokens
    /// against a from-scratch scan.
    Rescan(RescanCommand),

    /// Validate a TOML language definition file
    ///
    /// Checks that a language definition is structurally well-formed,
    /// reporting configuration errors before the language is ever used
    /// to tokenize a document.
    Check(CheckCommand),
}

/// Arguments for the tokenize subcommand.
#[derive(Parser, Debug)]
struct TokenizeCommand {
    /// Input files to tokenize
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Language to tokenize with
    #[arg(short, long, default_value = "javascript")]
    language: String,

    /// TOML language definition to register before tokenizing
    #[arg(long)]
    lang_file: Option<PathBuf>,

    /// Output format
    #[arg(short = 'F', long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Arguments for the languages subcommand.
#[derive(Parser, Debug)]
struct LanguagesCommand {
    /// TOML language definition to register before listing
    #[arg(long)]
    lang_file: Option<PathBuf>,
}

/// Arguments for the rescan subcommand.
#[derive(Parser, Debug)]
struct RescanCommand {
    /// File to tokenize
    file: PathBuf,

    /// Edit to apply, as OFFSET:REMOVED_LEN:TEXT
    #[arg(short, long)]
    edit: String,

    /// Language to tokenize with
    #[arg(short, long, default_value = "javascript")]
    language: String,

    /// TOML language definition to register before tokenizing
    #[arg(long)]
    lang_file: Option<PathBuf>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// The language definition file to validate
    file: PathBuf,
}

/// Main entry point for the glintt CLI.
///
/// Parses command-line arguments, initializes logging, and dispatches
/// to the appropriate command handler.
///
/// # Returns
/// * `Result<()>` - Success or an error
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.no_color)?;

    // Execute the selected command
    execute_command(cli.command, cli.verbose)
}

/// Initialize the logging system.
///
/// # Arguments
/// * `verbose` - Whether to enable verbose logging
/// * `no_color` - Whether to disable colored output
///
/// # Returns
/// * `Result<()>` - Success or an error
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| GlinttError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Execute the selected command.
///
/// # Arguments
/// * `command` - The command to execute
/// * `verbose` - Whether verbose output is enabled
///
/// # Returns
/// * `Result<()>` - Success or an error
fn execute_command(command: Commands, verbose: bool) -> Result<()> {
    match command {
        Commands::Tokenize(args) => execute_tokenize(args, verbose),
        Commands::Languages(args) => execute_languages(args, verbose),
        Commands::Rescan(args) => execute_rescan(args, verbose),
        Commands::Check(args) => execute_check(args, verbose),
    }
}

/// Execute the tokenize command.
fn execute_tokenize(args: TokenizeCommand, verbose: bool) -> Result<()> {
    let tokenize_args = TokenizeArgs {
        files: args.files,
        language: args.language,
        lang_file: args.lang_file,
        format: args.format,
        verbose,
    };
    run_tokenize(tokenize_args)
}

/// Execute the languages command.
fn execute_languages(args: LanguagesCommand, verbose: bool) -> Result<()> {
    let languages_args = LanguagesArgs {
        lang_file: args.lang_file,
        verbose,
    };
    run_languages(languages_args)
}

/// Execute the rescan command.
fn execute_rescan(args: RescanCommand, verbose: bool) -> Result<()> {
    let rescan_args = RescanArgs {
        file: args.file,
        edit: args.edit,
        language: args.language,
        lang_file: args.lang_file,
        verbose,
    };
    run_rescan(rescan_args)
}

/// Execute the check command.
fn execute_check(args: CheckCommand, verbose: bool) -> Result<()> {
    let check_args = CheckArgs {
        file: args.file,
        verbose,
    };
    run_check(check_args)
}
