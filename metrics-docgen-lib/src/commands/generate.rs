use super::Host;
use crate::Result;
use crate::catalog::Catalog;
use crate::pipeline::{extract_metrics, render_document};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, ValueEnum};
use ohno::{IntoAppError, bail};
use std::fs;
use std::io::Write;

const LOG_TARGET: &str = "  generate";

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Go source roots to scan, followed by the markdown file to write
    #[arg(value_name = "PATH", num_args = 2.., required_unless_present = "print_catalog")]
    pub paths: Vec<Utf8PathBuf>,

    /// Catalog file replacing the built-in symbols, patterns and stability rules
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<Utf8PathBuf>,

    /// Print the effective catalog as TOML and exit without scanning
    #[arg(long)]
    pub print_catalog: bool,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    // A logger may already be installed when commands run repeatedly in one process.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}

/// Scan the source roots and write the metrics document
///
/// The document is rendered completely before the output file is created, so
/// a failed run leaves no file behind.
pub fn generate_docs<H: Host>(host: &mut H, args: &GenerateArgs) -> Result<()> {
    init_logging(args.log_level);

    let catalog = match Catalog::load(args.catalog.as_deref()) {
        Ok(catalog) => catalog,
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Unable to load catalog: {e}");
            host.exit(1);
            return Err(e);
        }
    };

    if args.print_catalog {
        let text = catalog.to_toml()?;
        let _ = write!(host.output(), "{text}");
        return Ok(());
    }

    match generate_docs_inner(&args.paths, &catalog) {
        Ok((count, output)) => {
            let _ = writeln!(host.output(), "Documented {count} metrics in {output}");
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Metrics documentation failed: {e}");
            host.exit(1);
            Err(e)
        }
    }
}

fn generate_docs_inner<'a>(paths: &'a [Utf8PathBuf], catalog: &Catalog) -> Result<(usize, &'a Utf8Path)> {
    let Some((output, roots)) = paths.split_last() else {
        bail!("no output file given");
    };

    if roots.is_empty() {
        bail!("at least one source root is required before the output file");
    }

    let metrics = extract_metrics(roots, catalog).into_app_err("extracting metrics")?;
    let document = render_document(&metrics, catalog)?;

    log::info!(target: LOG_TARGET, "Writing output to {output}");
    fs::write(output, document).into_app_err_with(|| format!("writing output file '{output}'"))?;

    Ok((metrics.len(), output))
}
