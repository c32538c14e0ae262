//! Logging macros.
//!
//! Each macro takes the logger followed by `format_args!`-style arguments:
//!
//! ```ignore
//! ulog::info!(logger, "this is a demo project.");
//! ulog::warning!(logger, "x={}", 5);
//! ulog::log!(logger, Level::Error, "sensor {} timeout", id);
//! ```
//!
//! The logger may be a `Logger` (borrowed mutably) or a `SharedLogger`.
//! With the `enabled` feature off the macros expand to dead code: arguments
//! are type-checked but never evaluated.

/// Log at an explicit level.
#[cfg(feature = "enabled")]
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, ::core::format_args!($($arg)+))
    };
}

/// Log at an explicit level.
#[cfg(not(feature = "enabled"))]
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        if false {
            $logger.log($level, ::core::format_args!($($arg)+));
        }
    }};
}

/// Log at [`Level::Trace`](crate::Level::Trace).
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Trace, $($arg)+)
    };
}

/// Log at [`Level::Debug`](crate::Level::Debug).
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log at [`Level::Info`](crate::Level::Info).
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log at [`Level::Warning`](crate::Level::Warning).
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warning, $($arg)+)
    };
}

/// Log at [`Level::Error`](crate::Level::Error).
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log at [`Level::Critical`](crate::Level::Critical).
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Critical, $($arg)+)
    };
}

/// Log at [`Level::Always`](crate::Level::Always). Reaches every subscriber.
#[macro_export]
macro_rules! always {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Always, $($arg)+)
    };
}
