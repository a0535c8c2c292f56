use anyhow::{anyhow, Context, Result};
use std::io::IsTerminal;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Default level from the number of `-v` flags
pub fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn env_filter(verbose: u8) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level(verbose)))
        .map_err(|e| anyhow!("invalid RUST_LOG / log filter: {e}"))
}

/// Log to stderr (headless commands)
pub fn init_stderr(verbose: u8) -> Result<()> {
    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose)?)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }
    Ok(())
}

/// Log to a file (the TUI owns the terminal)
pub fn init_file(log_path: &Path, verbose: u8) -> Result<()> {
    let dir = log_path.parent().context("Log path has no parent directory")?;
    let file_name = log_path.file_name().context("Log path has no file name")?;
    let appender = tracing_appender::rolling::never(dir, file_name);

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose)?)
        .with_target(true)
        .with_writer(appender)
        .with_ansi(false)
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }
    Ok(())
}
