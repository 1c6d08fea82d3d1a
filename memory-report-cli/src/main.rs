//! Memory Report CLI Application
//!
//! Prints the stored-memory report to stdout using the memory-report library.
//! Flags only control diagnostic logging on stderr; stdout is always the
//! same report.

use anyhow::{Context, Result};
use clap::Parser;
use memory_report::Reporter;

/// Memory Report - print the stored memory records and their metadata
#[derive(Parser, Debug)]
#[command(name = "memory-report")]
#[command(about = "Print stored memory records as labeled JSON metadata", long_about = None)]
#[command(version)]
struct Args {
    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all diagnostics except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    log::info!("Memory Report CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using report library v{}", memory_report::VERSION);

    let reporter = Reporter::new();
    log::debug!("Loaded {} records", reporter.records().len());

    reporter
        .render_all()
        .context("Failed to write report to stdout")?;

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["memory-report", "-vv"]);
        assert_eq!(args.verbose, 2);
        assert!(!args.quiet);

        let args = Args::parse_from(["memory-report", "--quiet"]);
        assert!(args.quiet);
    }

    #[test]
    fn test_rejects_unknown_flags() {
        assert!(Args::try_parse_from(["memory-report", "--output", "x.txt"]).is_err());
    }
}
