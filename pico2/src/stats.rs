//! Log statistics destination.
//!
//! Counts warnings and errors seen by the logger so the heartbeat can report
//! them. Counters are atomics so the destination can run from any context.

use core::sync::atomic::{AtomicU32, Ordering};

use ulog::Level;

/// Counter snapshot.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct StatsSnapshot {
    /// Messages at `Warning`.
    pub warnings: u32,
    /// Messages at `Error` or `Critical`.
    pub errors: u32,
}

/// Warning/error counters.
pub struct LogStats {
    warnings: AtomicU32,
    errors: AtomicU32,
}

impl LogStats {
    pub const fn new() -> Self {
        Self {
            warnings: AtomicU32::new(0),
            errors: AtomicU32::new(0),
        }
    }

    /// Count one message. Levels below `Warning` and `Always` are ignored.
    pub fn record(
        &self,
        level: Level,
    ) {
        let counter = match level {
            Level::Warning => &self.warnings,
            Level::Error | Level::Critical => &self.errors,
            _ => return,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            warnings: self.warnings.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
        }
    }
}

impl Default for LogStats {
    fn default() -> Self { Self::new() }
}

/// Firmware-wide counters fed by [`record`].
pub static STATS: LogStats = LogStats::new();

/// Destination that feeds [`STATS`].
pub fn record(
    level: Level,
    _msg: &str,
) {
    STATS.record(level);
}

// =============================================================================
// Unit Tests (run on host with: cargo test --lib --target <host-triple>)
// =============================================================================
