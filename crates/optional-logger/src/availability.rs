//! Availability flag for the optional logging facility.
//!
//! The facility is `tracing`. It counts as available when the crate was built
//! with the `tracing` feature and a global subscriber exists at the moment of
//! the first probe. The answer is computed once and cached for the rest of the
//! process.

use std::io::{self, Write};
use std::sync::OnceLock;

use crate::error::ProbeError;

/// Diagnostic line written the first time the probe fails.
pub const NOTICE: &str = "tracing not available, falling back to console logging";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Availability {
    Available,
    Unavailable,
}

impl Availability {
    pub fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

impl From<Result<(), ProbeError>> for Availability {
    fn from(value: Result<(), ProbeError>) -> Self {
        match value {
            Ok(()) => Self::Available,
            Err(_) => Self::Unavailable,
        }
    }
}

/// Once-initialized holder for an [`Availability`].
#[derive(Debug, Default)]
pub struct AvailabilityCell {
    flag: OnceLock<Availability>,
}

impl AvailabilityCell {
    pub const fn new() -> Self {
        Self {
            flag: OnceLock::new(),
        }
    }

    /// Returns the cached flag, running `probe` first if nothing is cached yet.
    ///
    /// On a failed probe the [`NOTICE`] line goes to `notice` exactly once.
    /// Later calls neither probe again nor write anything.
    pub fn get_or_probe_with<P, W>(&self, probe: P, mut notice: W) -> Availability
    where
        P: FnOnce() -> Result<(), ProbeError>,
        W: Write,
    {
        *self.flag.get_or_init(|| {
            let availability = Availability::from(probe());
            if !availability.is_available() {
                // notice write errors are ignored
                let _ = writeln!(notice, "{NOTICE}");
                let _ = notice.flush();
            }
            availability
        })
    }

    pub fn get(&self) -> Option<Availability> {
        self.flag.get().copied()
    }
}

static PROCESS_AVAILABILITY: AvailabilityCell = AvailabilityCell::new();

/// Checks whether the facility can be reached right now.
///
/// Side-effect free; callers normally want [`availability`] instead.
pub fn probe_facility() -> Result<(), ProbeError> {
    #[cfg(feature = "tracing")]
    {
        if tracing::dispatcher::has_been_set() {
            Ok(())
        } else {
            Err(ProbeError::NoSubscriber)
        }
    }

    #[cfg(not(feature = "tracing"))]
    {
        Err(ProbeError::NotCompiled)
    }
}

/// Process-wide availability, probed on first call and reported on stdout.
pub fn availability() -> Availability {
    PROCESS_AVAILABILITY.get_or_probe_with(probe_facility, io::stdout())
}

/// The process-wide flag if it has been probed already, without probing.
pub fn cached_availability() -> Option<Availability> {
    PROCESS_AVAILABILITY.get()
}
