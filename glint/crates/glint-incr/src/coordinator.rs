//! The incremental re-scan coordinator.
//!
//! One coordinator owns the tokenization state of one document: the
//! current token sequence and the comment-nesting depth recorded at the
//! start of every line. After an edit it computes the smallest window
//! that must be re-scanned: the window starts at the beginning of the
//! edited line (a boundary whose depth is known with certainty) and
//! extends past the edit until the re-scanned depth matches the depth
//! previously recorded at the boundary just beyond the window. When an
//! edit leaks comment state across its line - an unbalanced `/*` or `*/`
//! - the window grows forward line by line until depths re-converge;
//! the end of the document is always a terminal boundary.
//!
//! Tokens are kept in a canonical per-line form: the document is scanned
//! line by line with the depth carried between lines, so a multi-line
//! comment appears as one block-comment token per line and no token ever
//! crosses a line start. That makes splicing exact: a window always cuts
//! the sequence at token boundaries.
//!
//! Single-writer discipline: `apply_edit` takes `&mut self`, and the new
//! token sequence is built completely before being swapped in, so an
//! abandoned scan never corrupts the previous tokenization.

use std::ops::Range;
use std::sync::Arc;

use glint_lang::LanguageConfig;
use glint_lex::{tokenize, Token};
use tracing::{debug, trace};

use crate::edit::Edit;

/// Byte offset of the line start following `from`, or the text length
/// when no further newline exists.
fn next_line_start(text: &str, from: usize) -> usize {
    match text[from..].find('\n') {
        Some(i) => from + i + 1,
        None => text.len(),
    }
}

/// All line-start offsets strictly below `text.len()`, beginning with 0.
///
/// A trailing newline does not open a tracked line: the end-of-document
/// depth is recorded separately, so an empty final line has no state of
/// its own.
fn compute_line_starts(text: &str) -> Vec<usize> {
    let mut starts = vec![0];
    let mut pos = 0;
    while pos < text.len() {
        let next = next_line_start(text, pos);
        if next < text.len() {
            starts.push(next);
        }
        pos = next;
    }
    starts
}

/// Incremental re-scan coordinator for a single document.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use glint_incr::{Edit, RescanCoordinator};
/// use glint_lang::LanguageConfig;
///
/// let config = Arc::new(LanguageConfig::javascript());
/// let mut coordinator = RescanCoordinator::new(config, "let x = 1;");
///
/// // Replace `1` with `42`.
/// let new_text = "let x = 42;";
/// coordinator.apply_edit(new_text, Edit::new(8, 1, 2));
///
/// let texts: Vec<&str> = coordinator.tokens().iter().map(|t| t.text(new_text)).collect();
/// assert!(texts.contains(&"42"));
/// ```
#[derive(Debug)]
pub struct RescanCoordinator {
    config: Arc<LanguageConfig>,
    /// Current token sequence in canonical per-line form.
    tokens: Vec<Token>,
    /// Byte offset of every tracked line start (always begins with 0).
    line_starts: Vec<usize>,
    /// Comment-nesting depth at each tracked line start.
    line_depths: Vec<u32>,
    /// Comment-nesting depth at the end of the document.
    eof_depth: u32,
    /// Length of the document text these records describe.
    text_len: usize,
}

impl RescanCoordinator {
    /// Tokenize `text` from scratch and record per-line depth state.
    pub fn new(config: Arc<LanguageConfig>, text: &str) -> Self {
        let line_starts = compute_line_starts(text);
        let mut line_depths = Vec::with_capacity(line_starts.len());
        line_depths.push(0);

        let mut tokens = Vec::new();
        let mut depth = 0;
        let mut pos = 0;
        while pos < text.len() {
            let line_end = next_line_start(text, pos);
            let scanned = tokenize(&config, text, pos..line_end, depth);
            tokens.extend(scanned.tokens);
            depth = scanned.final_depth;
            if line_end < text.len() {
                line_depths.push(depth);
            }
            pos = line_end;
        }

        debug_assert_eq!(line_depths.len(), line_starts.len());

        Self {
            config,
            tokens,
            line_starts,
            line_depths,
            eof_depth: depth,
            text_len: text.len(),
        }
    }

    /// The language configuration this document is tokenized under.
    pub fn config(&self) -> &Arc<LanguageConfig> {
        &self.config
    }

    /// The current token sequence for the whole document.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Tracked line-start offsets (always beginning with 0).
    pub fn line_starts(&self) -> &[usize] {
        &self.line_starts
    }

    /// Number of tracked lines.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Comment-nesting depth recorded at the start of a tracked line.
    pub fn depth_at_line(&self, line: usize) -> Option<u32> {
        self.line_depths.get(line).copied()
    }

    /// Comment-nesting depth at the end of the document.
    pub fn final_depth(&self) -> u32 {
        self.eof_depth
    }

    /// Tokens overlapping the given byte range, for the rendering layer.
    pub fn tokens_in(&self, range: Range<usize>) -> &[Token] {
        let from = self.tokens.partition_point(|t| t.end() <= range.start);
        let to = self.tokens.partition_point(|t| (t.start as usize) < range.end);
        &self.tokens[from..to.max(from)]
    }

    /// Tokens of one tracked line, keyed the way a line map consumes them.
    pub fn tokens_for_line(&self, line: usize) -> &[Token] {
        let Some(&start) = self.line_starts.get(line) else {
            return &[];
        };
        let end = self
            .line_starts
            .get(line + 1)
            .copied()
            .unwrap_or(self.text_len);
        self.tokens_in(start..end)
    }

    /// Index of the tracked line containing `offset`.
    fn line_index_of(&self, offset: usize) -> usize {
        self.line_starts.partition_point(|&s| s <= offset) - 1
    }

    /// Depth previously recorded at an exact pre-edit boundary offset,
    /// or `None` if the offset is not a recorded boundary.
    fn depth_at_offset(&self, offset: usize) -> Option<u32> {
        if offset == self.text_len {
            return Some(self.eof_depth);
        }
        let idx = self.line_starts.partition_point(|&s| s < offset);
        if self.line_starts.get(idx) == Some(&offset) {
            Some(self.line_depths[idx])
        } else {
            None
        }
    }

    /// Re-tokenize the minimal window around `edit` and splice the result
    /// into the document state. `new_text` is the post-edit document.
    ///
    /// Returns the byte range of `new_text` that was re-scanned, so the
    /// rendering layer knows what to invalidate.
    pub fn apply_edit(&mut self, new_text: &str, edit: Edit) -> Range<usize> {
        debug_assert!(edit.old_end() <= self.text_len);
        debug_assert_eq!(
            self.text_len as isize + edit.delta(),
            new_text.len() as isize
        );

        let delta = edit.delta();
        let first_line = self.line_index_of(edit.start.min(self.text_len));
        let window_start = self.line_starts[first_line];
        let mut window_end = next_line_start(new_text, edit.new_end().min(new_text.len()));

        trace!(
            start = window_start,
            end = window_end,
            "rescan window for edit"
        );

        let mut window_tokens = Vec::new();
        let mut inner_lines: Vec<(usize, u32)> = Vec::new();
        let mut depth = self.line_depths[first_line];
        let mut pos = window_start;

        loop {
            // Scan whole lines up to the current window end.
            while pos < window_end {
                let line_end = next_line_start(new_text, pos);
                debug_assert!(line_end <= window_end);
                let scanned = tokenize(&self.config, new_text, pos..line_end, depth);
                window_tokens.extend(scanned.tokens);
                depth = scanned.final_depth;
                pos = line_end;
                if pos < window_end {
                    inner_lines.push((pos, depth));
                }
            }

            // Document end is always a terminal boundary; the depth
            // reached there is authoritative.
            if window_end == new_text.len() {
                break;
            }

            // The boundary just past the window corresponds to a
            // pre-edit line start; if the depth there still matches,
            // everything beyond the window tokenizes as before.
            let old_boundary = (window_end as isize - delta) as usize;
            if self.depth_at_offset(old_boundary) == Some(depth) {
                break;
            }

            // Comment state leaked across the edit: grow forward.
            inner_lines.push((window_end, depth));
            window_end = next_line_start(new_text, window_end);
            debug!(end = window_end, depth, "comment depth mismatch, growing rescan window");
        }

        let old_end = (window_end as isize - delta) as usize;

        // Splice tokens. No token crosses a line start, so the window
        // cuts the old sequence exactly at token boundaries.
        let keep_prefix = self.tokens.partition_point(|t| t.end() <= window_start);
        let keep_suffix_from = self.tokens.partition_point(|t| (t.start as usize) < old_end);

        let suffix = &self.tokens[keep_suffix_from..];
        let mut tokens =
            Vec::with_capacity(keep_prefix + window_tokens.len() + suffix.len());
        tokens.extend_from_slice(&self.tokens[..keep_prefix]);
        tokens.extend(window_tokens);
        tokens.extend(suffix.iter().map(|t| t.shift(delta)));

        // Splice line-start/depth records the same way.
        let keep_lines = first_line + 1;
        let suffix_lines_from = self.line_starts.partition_point(|&s| s < old_end);

        let mut line_starts = Vec::with_capacity(
            keep_lines + inner_lines.len() + (self.line_starts.len() - suffix_lines_from),
        );
        let mut line_depths = Vec::with_capacity(line_starts.capacity());
        line_starts.extend_from_slice(&self.line_starts[..keep_lines]);
        line_depths.extend_from_slice(&self.line_depths[..keep_lines]);
        for (start, line_depth) in &inner_lines {
            line_starts.push(*start);
            line_depths.push(*line_depth);
        }
        for (&start, &line_depth) in self.line_starts[suffix_lines_from..]
            .iter()
            .zip(&self.line_depths[suffix_lines_from..])
        {
            line_starts.push((start as isize + delta) as usize);
            line_depths.push(line_depth);
        }

        if window_end == new_text.len() {
            self.eof_depth = depth;
        }

        // Swap in the completed state.
        self.tokens = tokens;
        self.line_starts = line_starts;
        self.line_depths = line_depths;
        self.text_len = new_text.len();

        window_start..window_end
    }
}
