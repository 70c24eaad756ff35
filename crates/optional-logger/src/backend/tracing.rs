use ::tracing::Span;

use super::{Level, LogBackend};

/// Forwards messages to the `tracing` macros inside a `logger{name=...}` span.
///
/// Event targets are this module, so `EnvFilter` selects a logger through the
/// span, e.g. `RUST_LOG='[logger{name=billing}]=info'`. The span is created
/// against the subscriber current at construction time.
#[derive(Debug, Clone)]
pub struct TracingBackend {
    logger: String,
    span: Span,
}

impl TracingBackend {
    pub fn new(logger: impl Into<String>) -> Self {
        let logger = logger.into();
        // error level keeps the span alive under any level-only filter
        let span = ::tracing::error_span!("logger", name = logger.as_str());
        Self { logger, span }
    }

    pub fn logger(&self) -> &str {
        &self.logger
    }
}

impl LogBackend for TracingBackend {
    fn name(&self) -> &str {
        "tracing"
    }

    fn log(&self, level: Level, message: &str) {
        let _entered = self.span.enter();
        match level {
            Level::Error => ::tracing::error!("{message}"),
            Level::Warn => ::tracing::warn!("{message}"),
            Level::Info => ::tracing::info!("{message}"),
            Level::Debug => ::tracing::debug!("{message}"),
            Level::Trace => ::tracing::trace!("{message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::EnvFilter;

    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().expect("capture lock").clone())
                .expect("captured utf-8")
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("capture lock").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn run_with_filter(directives: &str, body: impl FnOnce()) -> String {
        let out = Captured::default();
        let writer = out.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(directives))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .finish();
        ::tracing::subscriber::with_default(subscriber, body);
        out.text()
    }

    #[test]
    fn span_directive_selects_one_logger() {
        let output = run_with_filter("[logger{name=billing}]=info", || {
            TracingBackend::new("billing").log(Level::Info, "invoice sent");
            TracingBackend::new("shipping").log(Level::Info, "parcel sent");
        });

        assert!(output.contains("invoice sent"), "output:\n{output}");
        assert!(output.contains("billing"), "output:\n{output}");
        assert!(!output.contains("parcel sent"), "output:\n{output}");
    }

    #[test]
    fn span_directive_keeps_level_threshold() {
        let output = run_with_filter("[logger{name=billing}]=warn", || {
            let backend = TracingBackend::new("billing");
            backend.log(Level::Info, "quiet");
            backend.log(Level::Warn, "loud");
        });

        assert!(output.contains("loud"), "output:\n{output}");
        assert!(!output.contains("quiet"), "output:\n{output}");
    }
}
