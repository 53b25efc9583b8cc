//! OpenAPI summary CLI
//!
//! Reads `api_v1_openapi.json` from the working directory and prints its
//! version, tournament GET paths and public GET paths. Problems with the
//! document are printed on stdout in place of the rest of the summary; the
//! process always exits successfully.

use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

use spec_summary::SpecSummarizer;

/// Summarize the local OpenAPI document
#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(name = "analyze-openapi")]
#[command(version)]
#[command(about = "Print the version, tournament paths and public GET paths of api_v1_openapi.json")]
struct Args {
    /// Log diagnostics to stderr at debug level
    #[arg(short, long)]
    verbose: bool,
}

/// Parse the command line without ever failing the process.
///
/// Help and version requests are printed and yield `None`; unrecognized
/// arguments fall back to the defaults.
fn parse_args<I, T>(argv: I) -> Option<Args>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(argv) {
        Ok(args) => Some(args),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                let _ = err.print();
                None
            }
            _ => Some(Args::default()),
        },
    }
}

/// Logging is off unless asked for
fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::OFF
    }
}

fn main() {
    let Some(args) = parse_args(std::env::args_os()) else {
        return;
    };

    // Logs go to stderr so stdout carries only the summary
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(log_level(args.verbose).into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let summarizer = SpecSummarizer::new();
    debug!("Summarizing {:?}", summarizer.config().document_path);

    let stdout = std::io::stdout();
    if let Err(err) = summarizer.run(&mut stdout.lock()) {
        debug!("Failed to write summary: {}", err);
    }
}
