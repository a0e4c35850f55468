//! Command-line parsing and dispatch for metrics-docgen

use super::{GenerateArgs, generate_docs};
use crate::{Host, Result};
use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "metrics-docgen", version, author, long_about = None)]
#[command(about = "Generate the Prometheus metrics reference from Go sources")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(flatten)]
    generate: GenerateArgs,
}

/// Parse command-line arguments and generate the metrics document
///
/// Meant to be called from `main` with `std::env::args()`. Invalid arguments
/// make clap print usage and exit the process.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, extraction fails, or the
/// output file cannot be written
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = Cli::parse_from(args);
    generate_docs(host, &cli.generate)
}
