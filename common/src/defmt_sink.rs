//! Destination that forwards messages to `defmt`.
//!
//! Subscribe [`forward`] to send every accepted message out through the
//! active `defmt` global logger (RTT on the firmware):
//!
//! ```ignore
//! logger.subscribe(ulog::defmt_sink::forward, Level::Trace)?;
//! ```

use crate::level::Level;

/// Forward one message to the matching `defmt` macro.
///
/// `Critical` has no `defmt` counterpart and goes out as a tagged error;
/// `Always` bypasses the `defmt` level filter entirely.
pub fn forward(
    level: Level,
    msg: &str,
) {
    match level {
        Level::Trace => defmt::trace!("{=str}", msg),
        Level::Debug => defmt::debug!("{=str}", msg),
        Level::Info => defmt::info!("{=str}", msg),
        Level::Warning => defmt::warn!("{=str}", msg),
        Level::Error => defmt::error!("{=str}", msg),
        Level::Critical => defmt::error!("CRITICAL {=str}", msg),
        Level::Always => defmt::println!("{=str}", msg),
    }
}
