//! Log backends the facade dispatches to.
//!
//! [`ConsoleBackend`] is always present. `TracingBackend` exists only when the
//! crate is built with the `tracing` feature.

mod console;
#[cfg(feature = "tracing")]
mod tracing;

pub use console::{CONSOLE_PREFIX, ConsoleBackend};
#[cfg(feature = "tracing")]
pub use self::tracing::TracingBackend;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Destination for log lines.
///
/// Implementations must not fail or panic; whatever goes wrong while writing
/// is their own business.
pub trait LogBackend: Send + Sync {
    /// Short backend name, used in `Debug` output of the facade.
    fn name(&self) -> &str;

    fn log(&self, level: Level, message: &str);
}
