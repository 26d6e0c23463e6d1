//! rotalog - Append stdin to a log file with size and daily rotation

use anyhow::Result;
use clap::Parser;
use rotalog_logs::LogWriter;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // stdout stays untouched; diagnostics only go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("rotalog={},rotalog_logs={}", log_level, log_level).into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.rotation_config();
    debug!(
        "Writing to {} (max {} bytes, {} backups)",
        cli.path.display(),
        config.max_size_bytes,
        config.max_backups
    );

    let mut writer = LogWriter::open(cli.path, config)?;
    let stats = writer.pipe(std::io::stdin().lock())?;

    if stats.lines_failed > 0 {
        warn!(
            "{} line(s) could not be written to {}",
            stats.lines_failed,
            writer.path().display()
        );
    }

    Ok(())
}
