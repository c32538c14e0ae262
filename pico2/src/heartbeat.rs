//! Heartbeat bookkeeping.
//!
//! Decides what the periodic heartbeat task logs on each tick: a plain tick
//! count, or a summary when new errors were recorded since the last tick.

use crate::stats::StatsSnapshot;

/// What to log for one tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Beat {
    /// Nothing new; log the tick count at trace level.
    Tick(u32),
    /// Errors increased since the previous tick.
    Problems {
        ticks: u32,
        warnings: u32,
        errors: u32,
    },
}

/// Tick counter plus the error count reported last.
#[derive(Default)]
pub struct Heartbeat {
    ticks: u32,
    errors_seen: u32,
}

impl Heartbeat {
    pub const fn new() -> Self {
        Self {
            ticks: 0,
            errors_seen: 0,
        }
    }

    /// Advance one tick.
    ///
    /// Only a change in the error count triggers a summary. The summary is
    /// logged as a warning and must not retrigger itself.
    pub fn beat(
        &mut self,
        stats: StatsSnapshot,
    ) -> Beat {
        self.ticks = self.ticks.wrapping_add(1);

        if stats.errors == self.errors_seen {
            return Beat::Tick(self.ticks);
        }

        self.errors_seen = stats.errors;
        Beat::Problems {
            ticks: self.ticks,
            warnings: stats.warnings,
            errors: stats.errors,
        }
    }
}
