//! Presentation of a scan outcome
//!
//! The text rendering is the tool's stdout contract: the deepest text
//! itself, or the literal malformation marker, nothing else. The JSON
//! rendering is the opt-in richer surface and carries the internal
//! malformation reason and the depth at which the text was found.

use std::error::Error;
use std::fmt;

use serde::Serialize;

use crate::analyzer::Malformed;

/// Output formats supported by the command line tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(name: &str) -> Result<Self, UnknownFormat> {
        match name {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(UnknownFormat(name.to_string())),
        }
    }
}

/// Requested output format is not one of the known names.
#[derive(Debug, Clone)]
pub struct UnknownFormat(pub String);

impl fmt::Display for UnknownFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown output format '{}' (expected 'text' or 'json')", self.0)
    }
}

impl Error for UnknownFormat {}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum Status {
    Ok,
    Malformed,
}

/// One scan outcome, ready for rendering.
#[derive(Debug, Serialize)]
pub struct Report {
    status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    depth: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl Report {
    /// Build a report from the scan outcome and the depth at which the
    /// deepest text was found (`None` when no text line was seen).
    pub fn new(outcome: &Result<String, Malformed>, depth: Option<usize>) -> Self {
        match outcome {
            Ok(text) => Report {
                status: Status::Ok,
                text: Some(text.clone()),
                depth,
                reason: None,
                detail: None,
            },
            Err(fault) => Report {
                status: Status::Malformed,
                text: None,
                depth: None,
                reason: Some(fault.reason()),
                detail: Some(fault.describe()),
            },
        }
    }

    /// Exactly what the tool prints on stdout in text mode.
    pub fn render_text(&self) -> &str {
        match self.status {
            Status::Ok => self.text.as_deref().unwrap_or(""),
            Status::Malformed => Malformed::MARKER,
        }
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
