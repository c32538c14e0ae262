//! Subscriber entries.

use core::fmt;

use crate::level::Level;

/// Destination callback.
///
/// Receives the message severity and the formatted text. The text is borrowed
/// from the dispatcher's shared buffer and is only valid for the duration of
/// the call. A destination must not log from inside the callback.
///
/// Subscribers are identified by function address. Two functions with
/// identical bodies may be merged by the optimizer and then count as one.
pub type LogFn = fn(Level, &str);

/// One registered destination and its minimum severity.
#[derive(Clone, Copy)]
pub struct Subscriber {
    pub(crate) destination: LogFn,
    pub(crate) threshold: Level,
}

impl Subscriber {
    pub(crate) const fn new(
        destination: LogFn,
        threshold: Level,
    ) -> Self {
        Self {
            destination,
            threshold,
        }
    }

    /// Minimum severity this subscriber receives.
    #[inline]
    pub const fn threshold(&self) -> Level { self.threshold }

    /// Whether this entry was registered for `destination`.
    #[inline]
    pub fn is(
        &self,
        destination: LogFn,
    ) -> bool {
        core::ptr::fn_addr_eq(self.destination, destination)
    }

    /// Whether a message of `severity` reaches this subscriber.
    #[inline]
    pub fn accepts(
        &self,
        severity: Level,
    ) -> bool {
        self.threshold <= severity
    }
}

impl fmt::Debug for Subscriber {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("Subscriber")
            .field("destination", &(self.destination as *const ()))
            .field("threshold", &self.threshold)
            .finish()
    }
}
