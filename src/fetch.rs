//! HTTP line source
//!
//! Opens a document over a plain blocking GET and exposes the body as a lazy
//! sequence of lines. Transport failures (DNS, refused connection, timeout,
//! non-success status, mid-stream read errors) live in this module's error
//! domain and are never folded into the scanner's malformation outcome: a
//! document that could not be read is a different thing from a document that
//! reads fine and is structurally broken.

use std::error::Error;
use std::fmt;
use std::io::{self, BufRead, BufReader};
use std::time::Duration;

use tracing::debug;

/// Timeouts applied to the document fetch. Both default to five seconds.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_secs(5),
        }
    }
}

/// Errors raised while opening the document stream.
///
/// Read errors after the stream is open surface through the items of
/// [`LineStream`] instead.
#[derive(Debug)]
pub enum FetchError {
    /// The request could not be issued or answered (DNS, refused, timeout).
    Connection(reqwest::Error),
    /// The server answered with a non-success status.
    Status(reqwest::StatusCode),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Connection(err) => write!(f, "connection failed: {}", err),
            FetchError::Status(status) => write!(f, "server answered {}", status),
        }
    }
}

impl Error for FetchError {}

/// Lazy iterator over the lines of a fetched document body.
///
/// Each read may block up to the configured read timeout; a failed read
/// yields an `Err` item and the caller abandons the scan.
#[derive(Debug)]
pub struct LineStream {
    lines: io::Lines<BufReader<reqwest::blocking::Response>>,
}

impl Iterator for LineStream {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next()
    }
}

/// Open `url` and return its body as a lazy sequence of lines.
pub fn fetch_lines(url: &str, options: &FetchOptions) -> Result<LineStream, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .connect_timeout(options.connect_timeout)
        .timeout(options.read_timeout)
        .build()
        .map_err(FetchError::Connection)?;

    debug!(url = %url, "fetching document");
    let response = client.get(url).send().map_err(FetchError::Connection)?;

    let status = response.status();
    debug!(status = %status, "response received");
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    Ok(LineStream {
        lines: BufReader::new(response).lines(),
    })
}
