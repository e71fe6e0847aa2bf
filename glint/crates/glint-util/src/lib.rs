//! glint-util - Core Utilities and Foundation Types
//!
//! This crate provides the foundation types shared by every layer of the
//! glint highlighting engine: source spans for locating tokens in a
//! document, and a diagnostic handler for reporting language-configuration
//! problems to the embedding editor or tool.
//!
//! # Module Structure
//!
//! - [`span`] - Source location types ([`Span`], [`FileId`])
//! - [`diagnostic`] - Diagnostic reporting ([`Handler`], [`Diagnostic`])

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod diagnostic;
pub mod span;

// Re-export main types for convenience
pub use diagnostic::{Diagnostic, Handler, Level};
pub use span::{FileId, Span};

// Re-export commonly used collection types
pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;
