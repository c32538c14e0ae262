//! Severity levels.
//!
//! Levels are totally ordered by their raw value. `Always` sits above every
//! real severity and is meant as a subscription threshold that never
//! suppresses anything.
//!
//! # Levels
//!
//! | Level      | Raw | Prefix |
//! |------------|-----|--------|
//! | `Trace`    | 100 | `T`    |
//! | `Debug`    | 101 | `D`    |
//! | `Info`     | 102 | `I`    |
//! | `Warning`  | 103 | `W`    |
//! | `Error`    | 104 | `E`    |
//! | `Critical` | 105 | `C`    |
//! | `Always`   | 106 | `A`    |

use core::fmt;

/// Name returned by [`level_name`] for raw values outside the known set.
pub const UNKNOWN_LEVEL_NAME: &str = "UNKNOWN";

/// Log severity level.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Level {
    /// Verbose tracing
    Trace = 100,
    /// Debug information
    Debug = 101,
    /// Normal operation
    #[default]
    Info = 102,
    /// Something looks off
    Warning = 103,
    /// Recoverable failure
    Error = 104,
    /// Unrecoverable failure
    Critical = 105,
    /// Threshold sentinel: never suppressed
    Always = 106,
}

impl Level {
    /// Every level, lowest first.
    pub const ALL: [Self; 7] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warning,
        Self::Error,
        Self::Critical,
        Self::Always,
    ];

    /// Convert a raw value back into a level.
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            100 => Some(Self::Trace),
            101 => Some(Self::Debug),
            102 => Some(Self::Info),
            103 => Some(Self::Warning),
            104 => Some(Self::Error),
            105 => Some(Self::Critical),
            106 => Some(Self::Always),
            _ => None,
        }
    }

    /// Raw numeric rank.
    #[inline]
    pub const fn as_raw(self) -> u8 { self as u8 }

    /// Fixed human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
            Self::Always => "ALWAYS",
        }
    }

    /// Get the single-character prefix for this level.
    pub const fn prefix(self) -> char {
        match self {
            Self::Trace => 'T',
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warning => 'W',
            Self::Error => 'E',
            Self::Critical => 'C',
            Self::Always => 'A',
        }
    }
}

impl fmt::Display for Level {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.pad(self.name())
    }
}

impl TryFrom<u8> for Level {
    type Error = u8;

    fn try_from(raw: u8) -> Result<Self, u8> { Self::from_raw(raw).ok_or(raw) }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self { level.as_raw() }
}

/// Look up the name of a raw level value.
///
/// Never fails: values outside the known set map to [`UNKNOWN_LEVEL_NAME`].
pub const fn level_name(raw: u8) -> &'static str {
    match Level::from_raw(raw) {
        Some(level) => level.name(),
        None => UNKNOWN_LEVEL_NAME,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
