//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating, collecting, and reporting
//! diagnostics about language configurations (errors, warnings, notes,
//! and help messages). The tokenizer itself never raises diagnostics at
//! scan time - lexical anomalies in user text only affect highlighting
//! fidelity - so the handler is used at language-registration time and
//! by tooling such as the `glintt check` command.
//!
//! # Examples
//!
//! ```
//! use glint_util::diagnostic::Handler;
//! use glint_util::span::Span;
//!
//! let handler = Handler::new();
//! handler.error("operator literal list is empty", Span::DUMMY);
//!
//! if handler.has_errors() {
//!     eprintln!("language registration failed");
//! }
//! ```

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use glint_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that prevents the configuration from being used
    Error,
    /// A warning that doesn't prevent use
    Warning,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and location
///
/// # Examples
///
/// ```
/// use glint_util::diagnostic::{Diagnostic, Level};
/// use glint_util::span::Span;
///
/// let diag = Diagnostic::error("something went wrong", Span::DUMMY);
/// assert_eq!(diag.level, Level::Error);
/// ```
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Attach a note to the diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Attach a help suggestion to the diagnostic
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)?;
        for note in &self.notes {
            write!(f, "\n  note: {}", note)?;
        }
        for help in &self.helps {
            write!(f, "\n  help: {}", help)?;
        }
        Ok(())
    }
}

/// Handler for collecting diagnostics
///
/// The handler accumulates diagnostics during language registration or
/// configuration checking. Interior mutability keeps the reporting API
/// usable from shared references, mirroring how validation code threads
/// a handler through without owning it.
///
/// # Examples
///
/// ```
/// use glint_util::diagnostic::Handler;
/// use glint_util::span::Span;
///
/// let handler = Handler::new();
/// handler.warning("reserved operator `->` never matches the operator pattern", Span::DUMMY);
/// assert!(!handler.has_errors());
/// assert_eq!(handler.diagnostic_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler with no collected diagnostics
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Emit an error diagnostic
    pub fn error(&self, message: impl Into<String>, span: Span) {
        self.emit(Diagnostic::error(message, span));
    }

    /// Emit a warning diagnostic
    pub fn warning(&self, message: impl Into<String>, span: Span) {
        self.emit(Diagnostic::warning(message, span));
    }

    /// Returns true if any error-level diagnostic was emitted
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Number of diagnostics collected so far
    pub fn diagnostic_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Number of error-level diagnostics collected so far
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Take all collected diagnostics, leaving the handler empty
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }
}
