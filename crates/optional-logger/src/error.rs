use thiserror::Error;

/// Reasons the optional logging facility could not be resolved.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProbeError {
    #[error("tracing support was not compiled in (enable the `tracing` feature)")]
    NotCompiled,

    #[error("no global tracing subscriber has been installed")]
    NoSubscriber,
}
