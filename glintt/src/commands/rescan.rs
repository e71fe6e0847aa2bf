//! The rescan subcommand: apply an edit through the incremental
//! coordinator and show the re-scanned window.
//!
//! Useful when debugging a language definition whose comment delimiters
//! make edits ripple further than expected: the command prints exactly
//! which byte range the coordinator re-tokenized and cross-checks the
//! spliced result against a from-scratch scan.

use std::path::PathBuf;
use std::sync::Arc;

use glint_incr::{Edit, RescanCoordinator};
use tracing::info;

use crate::commands::common::{kind_name, load_registry};
use crate::error::{GlinttError, Result};

/// Arguments for the rescan subcommand.
#[derive(Debug)]
pub struct RescanArgs {
    /// File to tokenize.
    pub file: PathBuf,
    /// Edit specification `OFFSET:REMOVED_LEN:TEXT`.
    pub edit: String,
    /// Language name to tokenize with.
    pub language: String,
    /// Optional TOML language definition to register first.
    pub lang_file: Option<PathBuf>,
    /// Verbose output.
    pub verbose: bool,
}

/// A parsed `OFFSET:REMOVED_LEN:TEXT` edit specification.
fn parse_edit_spec(spec: &str) -> Result<(usize, usize, String)> {
    let mut parts = spec.splitn(3, ':');
    let (Some(offset), Some(removed), Some(text)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(GlinttError::Config(format!(
            "edit must be OFFSET:REMOVED_LEN:TEXT, got `{}`",
            spec
        )));
    };
    let offset = offset
        .parse()
        .map_err(|_| GlinttError::Config(format!("invalid edit offset `{}`", offset)))?;
    let removed = removed
        .parse()
        .map_err(|_| GlinttError::Config(format!("invalid removed length `{}`", removed)))?;
    Ok((offset, removed, text.to_string()))
}

/// Run the rescan command.
pub fn run_rescan(args: RescanArgs) -> Result<()> {
    let registry = load_registry(args.lang_file.as_deref())?;
    let config = registry
        .resolve(&args.language)
        .ok_or_else(|| GlinttError::UnknownLanguage(args.language.clone()))?;

    let text = std::fs::read_to_string(&args.file).map_err(|e| {
        GlinttError::FileOperation(format!("cannot read {}: {}", args.file.display(), e))
    })?;

    let (offset, removed, inserted) = parse_edit_spec(&args.edit)?;
    if offset + removed > text.len() {
        return Err(GlinttError::Config(format!(
            "edit {}..{} is outside the {}-byte document",
            offset,
            offset + removed,
            text.len()
        )));
    }

    let mut new_text = String::with_capacity(text.len() + inserted.len());
    new_text.push_str(&text[..offset]);
    new_text.push_str(&inserted);
    new_text.push_str(&text[offset + removed..]);

    let mut coordinator = RescanCoordinator::new(Arc::clone(&config), &text);
    let total = coordinator.tokens().len();
    let window = coordinator.apply_edit(&new_text, Edit::new(offset, removed, inserted.len()));

    println!(
        "rescanned {}..{} of {} bytes ({} of {} tokens), final comment depth {}",
        window.start,
        window.end,
        new_text.len(),
        coordinator.tokens_in(window.clone()).len(),
        coordinator.tokens().len(),
        coordinator.final_depth()
    );
    for token in coordinator.tokens_in(window.clone()) {
        println!(
            "  {:>6}..{:<6} {:<22} {:?}",
            token.start,
            token.end(),
            kind_name(token.kind),
            token.text(&new_text)
        );
    }

    // Cross-check the splice against a from-scratch tokenization.
    let fresh = RescanCoordinator::new(Arc::clone(&config), &new_text);
    if coordinator.tokens() == fresh.tokens() {
        println!("splice matches from-scratch scan");
    } else {
        return Err(GlinttError::Config(
            "spliced tokens diverge from a from-scratch scan".to_string(),
        ));
    }

    if args.verbose {
        info!(
            before = total,
            after = coordinator.tokens().len(),
            "rescan complete"
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edit_spec() {
        assert_eq!(
            parse_edit_spec("4:2:hello").unwrap(),
            (4, 2, "hello".to_string())
        );
        assert_eq!(parse_edit_spec("0:0:").unwrap(), (0, 0, String::new()));
        // The inserted text may itself contain colons.
        assert_eq!(parse_edit_spec("1:0:a:b").unwrap(), (1, 0, "a:b".to_string()));
    }

    #[test]
    fn test_parse_edit_spec_rejects_garbage() {
        assert!(parse_edit_spec("nope").is_err());
        assert!(parse_edit_spec("x:0:text").is_err());
        assert!(parse_edit_spec("0:y:text").is_err());
    }
}
