//! uLog: lightweight, allocation-free logging for embedded systems.
//!
//! A [`Logger`] keeps a fixed-capacity registry of destinations, each with a
//! minimum [`Level`]. Every log call formats the message once into a shared
//! fixed-size buffer and hands it to each destination whose threshold is met,
//! in registration order.
//!
//! - [`level`]: Severity levels and name lookup
//! - [`subscriber`]: Destination callbacks and registry entries
//! - [`config`]: Default capacities
//! - [`SharedLogger`]: Critical-section wrapper for multi-context use (`sync`)
//! - [`defmt_sink`]: Destination forwarding to `defmt` (`defmt`)
//!
//! # Usage
//!
//! ```ignore
//! fn console(level: Level, msg: &str) {
//!     // Print it or copy it; `msg` is overwritten by the next call.
//! }
//!
//! let mut logger: Logger = Logger::new();
//! logger.subscribe(console, Level::Info)?;
//! ulog::info!(logger, "this is a demo project.");
//! ulog::warning!(logger, "x={}", 5);
//! ```
//!
//! # Features
//!
//! - `enabled` (default): compile the dispatch path in. Without it `Logger`
//!   is zero-sized, every method is an empty inline function and the macros
//!   do not evaluate their arguments.
//! - `sync` (default): [`SharedLogger`].
//! - `defmt`: `defmt::Format` impls and [`defmt_sink::forward`].
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p ulog
//! cargo test -p ulog --no-default-features   # compiled-out build
//! cargo test -p ulog --no-default-features --features sync
//! ```

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod level;
mod macros;
pub mod subscriber;

#[cfg(feature = "enabled")]
mod dispatcher;
#[cfg(not(feature = "enabled"))]
mod noop;

#[cfg(all(feature = "sync", feature = "enabled"))]
mod shared;

#[cfg(feature = "defmt")]
pub mod defmt_sink;

#[cfg(feature = "enabled")]
pub use dispatcher::Logger;
pub use error::Error;
pub use level::{Level, UNKNOWN_LEVEL_NAME, level_name};
#[cfg(not(feature = "enabled"))]
pub use noop::Logger;
#[cfg(all(feature = "sync", not(feature = "enabled")))]
pub use noop::SharedLogger;
#[cfg(all(feature = "sync", feature = "enabled"))]
pub use shared::SharedLogger;
pub use subscriber::{LogFn, Subscriber};
