use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::backend::CONSOLE_PREFIX;

type Result<T> = anyhow::Result<T>;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    #[serde(default)]
    pub mode: LoggerMode,
    #[serde(default = "default_console_prefix")]
    pub console_prefix: String,
}

impl LoggerConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read logger config: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("failed to parse logger config: {}", path.display()))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to deserialize logger config")
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            mode: LoggerMode::default(),
            console_prefix: default_console_prefix(),
        }
    }
}

/// How the facade picks its backend.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoggerMode {
    /// Use tracing if the process-wide probe finds it.
    #[default]
    Auto,
    /// Always print to the console; the probe is skipped.
    Console,
}

fn default_console_prefix() -> String {
    CONSOLE_PREFIX.to_string()
}
