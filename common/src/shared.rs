//! Logger shared between tasks and interrupt handlers.
//!
//! Wraps a [`Logger`] in a critical-section mutex so it can live in a
//! `static` (or a `StaticCell`) and be called through `&self` from any
//! execution context. Each call runs inside one critical section.
//!
//! # Reentrancy
//!
//! A destination that logs through the same `SharedLogger` finds the logger
//! already borrowed. The nested message is dropped, the outer dispatch
//! continues. Registry changes attempted from a destination are refused.
//!
//! With the `enabled` feature off this type is replaced by a zero-sized
//! stand-in that never enters a critical section.
//!
//! # Usage
//!
//! ```ignore
//! static LOGGER: SharedLogger = SharedLogger::new();
//!
//! LOGGER.init();
//! LOGGER.subscribe(console, Level::Info).ok();
//! ulog::info!(LOGGER, "this is a demo project.");
//! ```

use core::cell::RefCell;
use core::fmt;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use crate::Logger;
use crate::config::{MAX_MESSAGE_LENGTH, MAX_SUBSCRIBERS};
use crate::error::Error;
use crate::level::Level;
use crate::subscriber::LogFn;

/// [`Logger`] behind a critical-section mutex.
pub struct SharedLogger<const N: usize = MAX_SUBSCRIBERS, const M: usize = MAX_MESSAGE_LENGTH> {
    inner: Mutex<CriticalSectionRawMutex, RefCell<Logger<N, M>>>,
}

impl<const N: usize, const M: usize> SharedLogger<N, M> {
    /// Create an empty, enabled shared logger.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Logger::new())),
        }
    }

    /// Run `f` with exclusive access to the logger.
    ///
    /// Returns `None` when called from inside a destination.
    pub fn with<R>(
        &self,
        f: impl FnOnce(&mut Logger<N, M>) -> R,
    ) -> Option<R> {
        self.inner.lock(|cell| {
            let mut logger = cell.try_borrow_mut().ok()?;
            Some(f(&mut logger))
        })
    }

    /// See [`Logger::init`].
    pub fn init(&self) { self.with(Logger::init); }

    /// See [`Logger::subscribe`]. Refused with
    /// [`Error::SubscribersExceeded`] while a dispatch is running.
    pub fn subscribe(
        &self,
        destination: LogFn,
        threshold: Level,
    ) -> Result<(), Error> {
        self.with(|logger| logger.subscribe(destination, threshold))
            .unwrap_or(Err(Error::SubscribersExceeded))
    }

    /// See [`Logger::unsubscribe`]. Refused with [`Error::NotSubscribed`]
    /// while a dispatch is running.
    pub fn unsubscribe(
        &self,
        destination: LogFn,
    ) -> Result<(), Error> {
        self.with(|logger| logger.unsubscribe(destination))
            .unwrap_or(Err(Error::NotSubscribed))
    }

    /// See [`Logger::log`]. Nested calls from a destination are dropped.
    pub fn log(
        &self,
        severity: Level,
        args: fmt::Arguments<'_>,
    ) {
        self.with(|logger| logger.log(severity, args));
    }

    /// See [`Logger::set_enabled`].
    pub fn set_enabled(
        &self,
        enabled: bool,
    ) {
        self.with(|logger| logger.set_enabled(enabled));
    }

    /// Number of registered subscribers (0 while a dispatch is running).
    pub fn len(&self) -> usize { self.with(|logger| logger.len()).unwrap_or(0) }

    /// Whether no subscriber is registered.
    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

impl<const N: usize, const M: usize> Default for SharedLogger<N, M> {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
