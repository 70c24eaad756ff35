use std::io::{self, IsTerminal};

use anyhow::Context;
use optional_logger::{LoggerConfig, OptionalLogger};
use tracing_subscriber::EnvFilter;

const CONFIG_ENV: &str = "OPTIONAL_LOGGER_CONFIG";
const FACILITY_ENV: &str = "OPTIONAL_LOGGER_FACILITY";

fn main() -> anyhow::Result<()> {
    let config = load_config()?;

    if facility_enabled() {
        init_tracing()?;
    }

    let logger = OptionalLogger::from_config("optional_logger_demo", &config);
    logger.log_info("Doing something");

    let worker = OptionalLogger::from_config("optional_logger_demo::worker", &config);
    worker.log_info("A");
    worker.log_info("B");
    worker.log_warn(&format!("facility backed: {}", worker.is_facility_backed()));

    Ok(())
}

fn load_config() -> anyhow::Result<LoggerConfig> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => LoggerConfig::from_file(&path)
            .with_context(|| format!("failed to load config from {CONFIG_ENV}")),
        None => Ok(LoggerConfig::default()),
    }
}

/// `OPTIONAL_LOGGER_FACILITY=off` runs the demo without a subscriber.
fn facility_enabled() -> bool {
    !matches!(
        std::env::var(FACILITY_ENV)
            .map(|value| value.to_ascii_lowercase())
            .as_deref(),
        Ok("off" | "0" | "false" | "no")
    )
}

fn init_tracing() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(io::stdout().is_terminal())
        .init();
    Ok(())
}
