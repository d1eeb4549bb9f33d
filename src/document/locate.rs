//! The fragment locator: maps a rendered block back to its source line.
//!
//! Source markup and rendered output are different grammars; the only
//! reliably invariant substrate between them is literal text runs. The
//! locator therefore takes the block's longest direct text run as an anchor
//! and accepts a source line only when that anchor appears in exactly one
//! line of the whole document. This trades recall for precision: many blocks
//! fail to match (template output, short repeated text), but a match is very
//! likely correct. Failure is an expected outcome, not an error; callers
//! must fall back to a whole-section editor, never guess.

use regex::Regex;
use thiserror::Error;
use tracing::{debug, trace};

use super::types::Block;

/// A single line of document source identified as producing a block.
///
/// Computed on demand per edit attempt and discarded after use; never cached
/// across edits, because any successful edit invalidates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    text: String,
}

impl Fragment {
    /// The exact line text, including any leading or trailing markup.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Why a block could not be matched to a source line.
///
/// All variants mean the same thing to the edit flow (take the full-editor
/// fallback) but they are kept distinct for logging and tests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LocateError {
    /// The block has no direct text runs to anchor on.
    #[error("block has no direct text segments")]
    NoText,
    /// No source line contains the anchor; the block likely comes from
    /// template expansion rather than literal source.
    #[error("no source line contains the anchor text")]
    NoMatch,
    /// The anchor appears on several lines, so no line can be trusted.
    #[error("anchor text matches {0} source lines")]
    Ambiguous(usize),
    /// The anchor could not be turned into a line pattern (pathologically
    /// long anchors can exceed the compiled-pattern size limit).
    #[error("anchor text could not be compiled into a pattern")]
    Pattern,
}

/// Find the unique source line that produced `block`.
///
/// The anchor is the block's longest direct text run; the source is scanned
/// line by line for it, and the match is accepted only when exactly one line
/// contains the anchor.
pub fn locate(block: &Block, source: &str) -> Result<Fragment, LocateError> {
    let anchor = block.longest_text().ok_or(LocateError::NoText)?;
    trace!(anchor, "matching block against source");

    let pattern = format!("(?m)^.*{}.*$", regex::escape(anchor));
    let lines = Regex::new(&pattern).map_err(|err| {
        debug!(%err, "anchor pattern rejected");
        LocateError::Pattern
    })?;

    let mut matches = lines.find_iter(source);
    let first = matches.next().ok_or_else(|| {
        debug!(anchor, "anchor not found in source");
        LocateError::NoMatch
    })?;
    if matches.next().is_some() {
        // Count the rest for the log; the first two are already consumed.
        let total = 2 + matches.count();
        debug!(anchor, total, "anchor is not unique");
        return Err(LocateError::Ambiguous(total));
    }

    Ok(Fragment {
        text: first.as_str().to_string(),
    })
}
