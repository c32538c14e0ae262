//! Registry errors.

use core::fmt;

/// Failure of a registry operation. Dispatch itself never fails.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Subscribe attempted while the registry is full.
    SubscribersExceeded,
    /// Unsubscribe attempted for a destination that is not registered.
    NotSubscribed,
}

impl fmt::Display for Error {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::SubscribersExceeded => f.write_str("subscriber registry is full"),
            Self::NotSubscribed => f.write_str("destination is not subscribed"),
        }
    }
}

impl core::error::Error for Error {}
