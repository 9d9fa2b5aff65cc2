//! Line classification
//!
//! The line micro-grammar: every trimmed line is exactly one of a blank line,
//! an opening tag, a closing tag, or text. A line never mixes tags and text;
//! that restriction is part of the input contract, so a line starting with
//! `<` must be a complete, single tag.
//!
//! Classification follows this order:
//! 1. Blank lines (trim to empty; carry no meaning)
//! 2. Tag candidates (start with `<`): must end with `>`, `</` marks closing
//! 3. Default to text

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analyzer::error::Malformed;

/// Lazy-compiled pattern for tag-name validity: no space, `<`, `>` or `/`.
/// The empty name is allowed; names are compared case-sensitively.
static TAG_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^ <>/]*$").unwrap());

/// What one line of the document means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Trims to empty; affects neither the stack nor the depth comparison.
    Blank,
    /// `<name>` — opens one nesting level.
    Opening(String),
    /// `</name>` — closes the most recently opened level.
    Closing(String),
    /// Anything else; the trimmed content competes for the deepest slot.
    Text(String),
}

/// Classify one raw line, trimming surrounding whitespace first.
pub fn classify(raw: &str) -> Result<LineKind, Malformed> {
    let line = raw.trim();
    if line.is_empty() {
        return Ok(LineKind::Blank);
    }
    if let Some(tag) = line.strip_prefix('<') {
        // a tag must be terminated on the same line
        let Some(tag) = tag.strip_suffix('>') else {
            return Err(Malformed::UnterminatedTag {
                line: line.to_string(),
            });
        };
        if let Some(name) = tag.strip_prefix('/') {
            return Ok(LineKind::Closing(validated(name)?));
        }
        return Ok(LineKind::Opening(validated(tag)?));
    }
    Ok(LineKind::Text(line.to_string()))
}

fn validated(name: &str) -> Result<String, Malformed> {
    if TAG_NAME.is_match(name) {
        Ok(name.to_string())
    } else {
        Err(Malformed::InvalidTagName {
            name: name.to_string(),
        })
    }
}
