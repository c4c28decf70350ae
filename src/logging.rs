use std::{fs::File, io, path::Path, sync::Mutex};

use anyhow::{Context, Result};
use tracing::debug;
use tracing_subscriber::{fmt::writer::BoxMakeWriter, EnvFilter};

use crate::config::Config;

/// Picks where log records go.
///
/// * A configured log file always wins.
/// * The interactive form owns the terminal, so without a file records are
///   dropped.
/// * Headless runs log to stderr, leaving stdout for the result.
fn make_writer(log_file: Option<&Path>, interactive: bool) -> Result<BoxMakeWriter> {
    if let Some(path) = log_file {
        let file = File::options()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("cannot open log file '{}'", path.display()))?;
        return Ok(BoxMakeWriter::new(Mutex::new(file)));
    }
    if interactive {
        Ok(BoxMakeWriter::new(io::sink))
    } else {
        Ok(BoxMakeWriter::new(io::stderr))
    }
}

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set, otherwise uses the configured filter.
/// * Strips timestamps and target names unless writing to a file.
pub fn init(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .context("invalid log filter")?;
    let writer = make_writer(config.log_file.as_deref(), config.is_interactive())?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer);

    let installed = if config.log_file.is_some() {
        builder.with_ansi(false).try_init()
    } else {
        builder.without_time().with_target(false).try_init()
    };
    // A subscriber may already be installed (tests, embedding); keep it.
    if let Err(error) = installed {
        debug!(%error, "keeping the existing tracing subscriber");
    }

    Ok(())
}
