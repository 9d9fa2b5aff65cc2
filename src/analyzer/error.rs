//! The malformation outcome
//!
//! A scan that violates the nesting or naming rules produces exactly one
//! `Malformed` value. Externally this is a single generic classification:
//! `Display` always renders the marker string, and callers print it in place
//! of text. The variant and its fields record what actually went wrong, for
//! the JSON report and debug logging.

use std::error::Error;
use std::fmt;

/// A structural violation found during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Malformed {
    /// A tag line that does not end with `>`.
    UnterminatedTag { line: String },
    /// A closing tag with no open tag left on the stack.
    UnmatchedClose { name: String },
    /// A tag name containing one of space, `<`, `>`, `/`.
    InvalidTagName { name: String },
    /// A closing tag that does not match the most recently opened tag.
    MismatchedClose { expected: String, found: String },
    /// Open tags remaining when the input ended.
    UnclosedTags { remaining: usize },
}

impl Malformed {
    /// The generic marker printed in place of text when a scan fails.
    pub const MARKER: &'static str = "malformed HTML";

    /// Stable machine-readable label for the specific violation.
    pub fn reason(&self) -> &'static str {
        match self {
            Malformed::UnterminatedTag { .. } => "unterminated-tag",
            Malformed::UnmatchedClose { .. } => "unmatched-close",
            Malformed::InvalidTagName { .. } => "invalid-tag-name",
            Malformed::MismatchedClose { .. } => "mismatched-close",
            Malformed::UnclosedTags { .. } => "unclosed-tags",
        }
    }

    /// Human-readable account of the violation, for logs and the JSON report.
    pub fn describe(&self) -> String {
        match self {
            Malformed::UnterminatedTag { line } => {
                format!("tag line '{}' is not terminated with '>'", line)
            }
            Malformed::UnmatchedClose { name } => {
                format!("closing tag '{}' has no matching open tag", name)
            }
            Malformed::InvalidTagName { name } => {
                format!("tag name '{}' contains a forbidden character", name)
            }
            Malformed::MismatchedClose { expected, found } => {
                format!("expected closing tag '{}', found '{}'", expected, found)
            }
            Malformed::UnclosedTags { remaining } => {
                format!("{} tag(s) left open at end of input", remaining)
            }
        }
    }
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::MARKER)
    }
}

impl Error for Malformed {}
