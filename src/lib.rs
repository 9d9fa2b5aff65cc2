//! # htmldepth
//!
//! Scans a line-oriented HTML document, validates tag nesting and returns the
//! text found at the greatest nesting depth.
//!
//! The input format is deliberately restricted: each physical line is either
//! a single tag or plain text, never both. Documents that mix tags and text
//! on one line, or that violate nesting, are classified as malformed.
//!
//! ```text
//! <html>
//!   <body>
//!     Deepest text.
//!   </body>
//! </html>
//! ```
//!
//! The [`analyzer`] module is the core; [`fetch`] supplies lines from an HTTP
//! document and [`report`] renders the outcome for the command line tool.

pub mod analyzer;
pub mod fetch;
pub mod report;
