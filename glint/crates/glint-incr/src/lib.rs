//! glint-incr - Incremental Re-scan Coordination
//!
//! This crate bounds the tokenization work done per keystroke. A
//! [`RescanCoordinator`] owns the token sequence and per-line
//! comment-nesting depths of one document; given an edit it re-scans
//! only the smallest window whose tokenization could have changed,
//! growing the window forward when comment state leaks across the edit
//! (an unbalanced `/*` or `*/` can, in the worst case, require
//! re-scanning to the end of the document).
//!
//! Per-edit work is O(edit size + comment-depth-resync distance), not
//! O(document size), which is what keeps the editor's live-typing loop
//! responsive.
//!
//! # Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use glint_incr::{Edit, RescanCoordinator};
//! use glint_lang::LanguageConfig;
//!
//! let config = Arc::new(LanguageConfig::javascript());
//! let mut coordinator = RescanCoordinator::new(config, "let x = 1;\nlet y = 2;\n");
//!
//! // The user types an extra digit into the first line.
//! let new_text = "let x = 12;\nlet y = 2;\n";
//! let rescanned = coordinator.apply_edit(new_text, Edit::insert(9, 1));
//!
//! // Only the first line was re-scanned.
//! assert_eq!(rescanned, 0..12);
//! ```
//!
//! # Module Structure
//!
//! - [`edit`] - Edit descriptions ([`Edit`])
//! - [`coordinator`] - The re-scan coordinator ([`RescanCoordinator`])

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod coordinator;
pub mod edit;

// Re-export main types for convenience
pub use coordinator::RescanCoordinator;
pub use edit::Edit;
