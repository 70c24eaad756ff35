//! The logging facade.
//!
//! An [`OptionalLogger`] is bound to one backend for its whole life: tracing
//! when the facility was available at construction, the console otherwise.
//! None of its operations can fail.

use std::fmt;

use crate::availability::{Availability, availability};
use crate::backend::{ConsoleBackend, Level, LogBackend};
use crate::config::{LoggerConfig, LoggerMode};

pub struct OptionalLogger {
    context: String,
    backend: Box<dyn LogBackend>,
    facility_backed: bool,
}

impl OptionalLogger {
    /// Creates a logger for `context`, probing for tracing on the first call
    /// in the process.
    pub fn get_logger(context: impl Into<String>) -> Self {
        Self::with_availability(context, availability())
    }

    /// Creates a logger from an already decided availability flag.
    ///
    /// `Available` is only honoured when the `tracing` feature is compiled in.
    pub fn with_availability(context: impl Into<String>, availability: Availability) -> Self {
        Self::build(context.into(), availability, ConsoleBackend::stdout())
    }

    pub fn from_config(context: impl Into<String>, config: &LoggerConfig) -> Self {
        let availability = match config.mode {
            LoggerMode::Auto => availability(),
            LoggerMode::Console => Availability::Unavailable,
        };
        let console =
            ConsoleBackend::with_prefix(std::io::stdout(), config.console_prefix.as_str());
        Self::build(context.into(), availability, console)
    }

    /// Creates a logger around a caller supplied backend.
    pub fn with_backend(context: impl Into<String>, backend: Box<dyn LogBackend>) -> Self {
        Self {
            context: context.into(),
            backend,
            facility_backed: false,
        }
    }

    fn build(context: String, availability: Availability, console: ConsoleBackend) -> Self {
        #[cfg(feature = "tracing")]
        if availability.is_available() {
            let backend = crate::backend::TracingBackend::new(context.as_str());
            return Self {
                context,
                backend: Box::new(backend),
                facility_backed: true,
            };
        }

        #[cfg(not(feature = "tracing"))]
        let _ = availability;

        Self {
            context,
            backend: Box::new(console),
            facility_backed: false,
        }
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    /// `true` when messages go to tracing rather than the console.
    pub fn is_facility_backed(&self) -> bool {
        self.facility_backed
    }

    pub fn log(&self, level: Level, message: &str) {
        self.backend.log(level, message);
    }

    pub fn log_info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    pub fn log_error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    pub fn log_warn(&self, message: &str) {
        self.log(Level::Warn, message);
    }

    pub fn log_debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    pub fn log_trace(&self, message: &str) {
        self.log(Level::Trace, message);
    }
}

impl fmt::Debug for OptionalLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionalLogger")
            .field("context", &self.context)
            .field("backend", &self.backend.name())
            .finish()
    }
}
