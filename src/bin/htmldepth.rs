//! Command-line interface for htmldepth
//! Fetches a line-oriented HTML document and prints the text found at the
//! greatest tag nesting depth.
//!
//! Usage:
//!   htmldepth `<URL>` [--format `<format>`] [--connect-timeout `<secs>`] [--read-timeout `<secs>`]

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::time::Duration;

use htmldepth::analyzer::DepthScanner;
use htmldepth::fetch::{fetch_lines, FetchOptions};
use htmldepth::report::{OutputFormat, Report};

/// Fixed message printed when the document could not be fetched or read.
const CONNECTION_ERROR_MSG: &str = "URL connection error";

fn main() {
    let matches = Command::new("htmldepth")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Finds the text at the greatest tag nesting depth of a line-oriented HTML document")
        .arg(
            Arg::new("url")
                .help("URL of the document to analyze")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format ('text' or 'json')")
                .default_value("text"),
        )
        .arg(
            Arg::new("connect-timeout")
                .long("connect-timeout")
                .help("Connection timeout in seconds")
                .default_value("5"),
        )
        .arg(
            Arg::new("read-timeout")
                .long("read-timeout")
                .help("Read timeout in seconds")
                .default_value("5"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Enable debug logging on stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("verbose") {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    let url = matches.get_one::<String>("url").unwrap();
    let format = matches.get_one::<String>("format").unwrap();
    let format = OutputFormat::parse(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(2);
    });
    let options = FetchOptions {
        connect_timeout: Duration::from_secs(seconds_arg(&matches, "connect-timeout")),
        read_timeout: Duration::from_secs(seconds_arg(&matches, "read-timeout")),
    };

    let lines = match fetch_lines(url, &options) {
        Ok(lines) => lines,
        Err(err) => {
            tracing::debug!(error = %err, "fetch failed");
            println!("{}", CONNECTION_ERROR_MSG);
            return;
        }
    };

    // Drive the scanner over the stream. A read failure abandons the scan
    // entirely; a malformation stops it with a definitive outcome.
    let mut scanner = DepthScanner::new();
    let mut fault = None;
    for line in lines {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                tracing::debug!(error = %err, "stream read failed");
                println!("{}", CONNECTION_ERROR_MSG);
                return;
            }
        };
        if let Err(found) = scanner.feed(&line) {
            fault = Some(found);
            break;
        }
    }

    let depth = scanner.deepest_depth();
    let outcome = match fault {
        Some(fault) => Err(fault),
        None => scanner.finish(),
    };

    let report = Report::new(&outcome, depth);
    match format {
        OutputFormat::Text => println!("{}", report.render_text()),
        OutputFormat::Json => match report.render_json() {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("Error: {}", err);
                std::process::exit(1);
            }
        },
    }
}

/// Parse a whole-seconds argument, exiting with a usage error otherwise.
fn seconds_arg(matches: &ArgMatches, name: &str) -> u64 {
    let value = matches.get_one::<String>(name).unwrap();
    value.parse().unwrap_or_else(|_| {
        eprintln!(
            "Error: --{} expects a whole number of seconds, got '{}'",
            name, value
        );
        std::process::exit(2);
    })
}
