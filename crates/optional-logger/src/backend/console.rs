use std::io::{self, Stdout, Write};
use std::sync::Mutex;

use super::{Level, LogBackend};

/// Prefix that marks fallback output.
pub const CONSOLE_PREFIX: &str = "console - ";

/// Fallback backend: writes `prefix + message` lines to a plain writer.
pub struct ConsoleBackend<W = Stdout> {
    prefix: String,
    sink: Mutex<W>,
}

impl ConsoleBackend<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Default for ConsoleBackend<Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write + Send> ConsoleBackend<W> {
    pub fn new(sink: W) -> Self {
        Self::with_prefix(sink, CONSOLE_PREFIX)
    }

    pub fn with_prefix(sink: W, prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            sink: Mutex::new(sink),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn into_inner(self) -> W {
        self.sink
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> LogBackend for ConsoleBackend<W> {
    fn name(&self) -> &str {
        "console"
    }

    // The level is ignored; fallback lines all look the same.
    fn log(&self, _level: Level, message: &str) {
        let mut sink = match self.sink.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = writeln!(sink, "{}{}", self.prefix, message);
        let _ = sink.flush();
    }
}
