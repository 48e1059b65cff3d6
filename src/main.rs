use anyhow::{Context, Result};
use standup::{Config, UpdateFormatter};
use std::io::{self, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config.log_level);
    config.validate().context("Invalid configuration")?;

    let directory = config.directory().context("Failed to load user directory")?;
    debug!(users = directory.len(), "Loaded user directory");

    let project = config.project();
    let update = config.read_update()?;
    let update = update.trim_end_matches(['\r', '\n']);

    let formatter = UpdateFormatter::new(directory, config.profile_urls());
    let html = formatter
        .format(update, project.as_ref())
        .context("Failed to format update")?;
    info!(bytes = update.len(), "Formatted update");

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", html.into_string()).context("Failed to write output")?;

    Ok(())
}
