//! Depth scanner
//!
//! Consumes a document line by line, keeping an owned stack of currently open
//! tag names. The stack length is the nesting depth of the line being read.
//! Text lines compete for the deepest slot under a strict greater-than
//! comparison, so the first line seen at the maximum depth wins ties.
//!
//! The scanner is a pure function of its input sequence: one forward pass,
//! no re-reads, and all state is local to one scan.

use crate::analyzer::error::Malformed;
use crate::analyzer::line::{classify, LineKind};

/// Single-pass nesting validator and deepest-text tracker.
///
/// Feed lines in document order with [`feed`](DepthScanner::feed), then call
/// [`finish`](DepthScanner::finish) once the input is exhausted. A scanner is
/// for one scan only; malformation is definitive and the caller stops
/// feeding once `feed` reports it.
#[derive(Debug, Default)]
pub struct DepthScanner {
    stack: Vec<String>,
    deepest: Option<(usize, String)>,
}

impl DepthScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current nesting depth, i.e. the number of unclosed tags.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Depth at which the current deepest text was found, if any text line
    /// has been seen.
    pub fn deepest_depth(&self) -> Option<usize> {
        self.deepest.as_ref().map(|(depth, _)| *depth)
    }

    /// Process one raw line.
    pub fn feed(&mut self, raw: &str) -> Result<(), Malformed> {
        match classify(raw)? {
            LineKind::Blank => {}
            LineKind::Opening(name) => self.stack.push(name),
            LineKind::Closing(name) => {
                let expected = self.stack.pop().ok_or_else(|| Malformed::UnmatchedClose {
                    name: name.clone(),
                })?;
                if expected != name {
                    return Err(Malformed::MismatchedClose {
                        expected,
                        found: name,
                    });
                }
            }
            LineKind::Text(content) => {
                let depth = self.stack.len();
                // strict '>' keeps the first line seen at the maximum depth
                if self.deepest.as_ref().is_none_or(|(best, _)| depth > *best) {
                    self.deepest = Some((depth, content));
                }
            }
        }
        Ok(())
    }

    /// End of input: unclosed tags are a malformation; otherwise yield the
    /// deepest text, or the empty string if no text line was ever seen.
    pub fn finish(self) -> Result<String, Malformed> {
        if !self.stack.is_empty() {
            return Err(Malformed::UnclosedTags {
                remaining: self.stack.len(),
            });
        }
        Ok(self
            .deepest
            .map(|(_, text)| text)
            .unwrap_or_default())
    }
}

/// Scan a whole line sequence.
///
/// Stops at the first malformation without consuming further lines.
pub fn deepest_text<I>(lines: I) -> Result<String, Malformed>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut scanner = DepthScanner::new();
    for line in lines {
        scanner.feed(line.as_ref())?;
    }
    scanner.finish()
}
