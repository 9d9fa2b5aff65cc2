//! Depth analysis for line-oriented HTML documents
//!
//! A single forward pass over the lines of a document, maintaining a stack of
//! currently open tags. The stack length is the nesting depth; the first text
//! line seen at the greatest depth is the result.
//!
//! The pass has two layers:
//! 1. Line classification ([`line`]): each trimmed line is exactly one of a
//!    blank line, an opening tag, a closing tag, or text. Tag names are
//!    validated here.
//! 2. Depth tracking ([`scanner`]): stack updates, depth comparison and the
//!    end-of-input check for unclosed tags.
//!
//! Any structural violation collapses the whole scan to the single
//! [`Malformed`] outcome; the specific reason is kept internally for
//! diagnostics only.

pub mod error;
pub mod line;
pub mod scanner;

pub use error::Malformed;
pub use line::{classify, LineKind};
pub use scanner::{deepest_text, DepthScanner};
