//! Logging facade over an optional `tracing` dependency.
//!
//! Built without the `tracing` feature, or run without a global subscriber,
//! every [`OptionalLogger`] prints `console - <message>` lines on stdout and
//! the process reports [`NOTICE`] once. Otherwise messages are handed to
//! tracing untouched.
//!
//! ```no_run
//! use optional_logger::OptionalLogger;
//!
//! let logger = OptionalLogger::get_logger("worker");
//! logger.log_info("Doing something");
//! ```

pub mod availability;
pub mod backend;
pub mod config;
pub mod error;
pub mod logger;

pub use availability::{
    Availability, AvailabilityCell, NOTICE, availability, cached_availability, probe_facility,
};
pub use backend::{CONSOLE_PREFIX, ConsoleBackend, Level, LogBackend};
#[cfg(feature = "tracing")]
pub use backend::TracingBackend;
pub use config::{LoggerConfig, LoggerMode};
pub use error::ProbeError;
pub use logger::OptionalLogger;
