//! Firmware configuration.
//!
//! Tick period and per-destination thresholds. Logger capacities come from
//! `ulog::config` defaults.

use ulog::Level;

// =============================================================================
// Timing
// =============================================================================

/// Heartbeat period in milliseconds (driven by the embassy time driver).
pub const HEARTBEAT_PERIOD_MS: u64 = 1000;

// =============================================================================
// Destinations
// =============================================================================

/// Minimum level forwarded to RTT via defmt.
///
/// defmt applies its own `DEFMT_LOG` filter on top of this.
pub const RTT_THRESHOLD: Level = Level::Trace;

/// Minimum level counted by the log statistics destination.
pub const STATS_THRESHOLD: Level = Level::Warning;

/// Message logged once after start-up.
pub const STARTUP_MESSAGE: &str = "this is a demo project.";

const _: () = assert!(HEARTBEAT_PERIOD_MS > 0);
const _: () = assert!(STATS_THRESHOLD as u8 <= Level::Warning as u8);
