//! Logger used when the `enabled` feature is off.
//!
//! Same API as the real dispatcher, zero-sized, and every call compiles to
//! nothing. Registry calls report success so call sites need no `cfg`.
//! The shared wrapper gets the same treatment: no mutex, no critical section.

use core::fmt;
use core::marker::PhantomData;

use crate::config::{MAX_MESSAGE_LENGTH, MAX_SUBSCRIBERS};
use crate::error::Error;
use crate::level::Level;
use crate::subscriber::{LogFn, Subscriber};

/// Disabled log dispatcher. Holds nothing and delivers nothing.
pub struct Logger<const N: usize = MAX_SUBSCRIBERS, const M: usize = MAX_MESSAGE_LENGTH> {
    _capacity: PhantomData<([(); N], [(); M])>,
}

impl<const N: usize, const M: usize> Logger<N, M> {
    #[inline(always)]
    pub const fn new() -> Self { Self { _capacity: PhantomData } }

    #[inline(always)]
    pub fn init(&mut self) {}

    #[inline(always)]
    pub fn subscribe(
        &mut self,
        _destination: LogFn,
        _threshold: Level,
    ) -> Result<(), Error> {
        Ok(())
    }

    #[inline(always)]
    pub fn unsubscribe(
        &mut self,
        _destination: LogFn,
    ) -> Result<(), Error> {
        Ok(())
    }

    #[inline(always)]
    pub fn log(
        &mut self,
        _severity: Level,
        _args: fmt::Arguments<'_>,
    ) {
    }

    #[inline(always)]
    pub fn set_enabled(
        &mut self,
        _enabled: bool,
    ) {
    }

    #[inline(always)]
    pub const fn is_enabled(&self) -> bool { false }

    #[inline(always)]
    pub fn len(&self) -> usize { 0 }

    #[inline(always)]
    pub fn is_empty(&self) -> bool { true }

    #[inline(always)]
    pub const fn capacity(&self) -> usize { N }

    #[inline(always)]
    pub fn is_subscribed(
        &self,
        _destination: LogFn,
    ) -> bool {
        false
    }

    #[inline(always)]
    pub fn threshold_of(
        &self,
        _destination: LogFn,
    ) -> Option<Level> {
        None
    }

    #[inline(always)]
    pub fn subscribers(&self) -> impl Iterator<Item = &Subscriber> { core::iter::empty() }
}

impl<const N: usize, const M: usize> Default for Logger<N, M> {
    fn default() -> Self { Self::new() }
}

/// Disabled shared logger. Never locks, never delivers.
#[cfg(feature = "sync")]
pub struct SharedLogger<const N: usize = MAX_SUBSCRIBERS, const M: usize = MAX_MESSAGE_LENGTH> {
    _capacity: PhantomData<([(); N], [(); M])>,
}

#[cfg(feature = "sync")]
impl<const N: usize, const M: usize> SharedLogger<N, M> {
    #[inline(always)]
    pub const fn new() -> Self { Self { _capacity: PhantomData } }

    /// Runs `f` against a disabled [`Logger`].
    #[inline(always)]
    pub fn with<R>(
        &self,
        f: impl FnOnce(&mut Logger<N, M>) -> R,
    ) -> Option<R> {
        Some(f(&mut Logger::new()))
    }

    #[inline(always)]
    pub fn init(&self) {}

    #[inline(always)]
    pub fn subscribe(
        &self,
        _destination: LogFn,
        _threshold: Level,
    ) -> Result<(), Error> {
        Ok(())
    }

    #[inline(always)]
    pub fn unsubscribe(
        &self,
        _destination: LogFn,
    ) -> Result<(), Error> {
        Ok(())
    }

    #[inline(always)]
    pub fn log(
        &self,
        _severity: Level,
        _args: fmt::Arguments<'_>,
    ) {
    }

    #[inline(always)]
    pub fn set_enabled(
        &self,
        _enabled: bool,
    ) {
    }

    #[inline(always)]
    pub fn len(&self) -> usize { 0 }

    #[inline(always)]
    pub fn is_empty(&self) -> bool { true }
}

#[cfg(feature = "sync")]
impl<const N: usize, const M: usize> Default for SharedLogger<N, M> {
    fn default() -> Self { Self::new() }
}
