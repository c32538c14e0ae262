//! Capacity defaults.
//!
//! Both limits are const generic parameters of [`Logger`](crate::Logger);
//! these are the values used when a build does not pick its own.

/// Maximum number of concurrent subscribers.
pub const MAX_SUBSCRIBERS: usize = 6;

/// Capacity of the formatted message buffer, terminator slot included.
///
/// A message holds at most `MAX_MESSAGE_LENGTH - 1` bytes of text.
pub const MAX_MESSAGE_LENGTH: usize = 120;

const _: () = assert!(MAX_SUBSCRIBERS > 0);
const _: () = assert!(MAX_MESSAGE_LENGTH > 1);
