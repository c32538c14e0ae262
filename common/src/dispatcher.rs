//! The log dispatcher: subscriber registry, message buffer and dispatch loop.
//!
//! A message is formatted once into the shared buffer, then handed to every
//! subscriber whose threshold it meets, in registration order.
//!
//! # Buffer lifetime
//!
//! Destinations receive a `&str` borrowed from the dispatcher. The buffer is
//! overwritten by the next call, so a destination that wants to keep the text
//! must copy it before returning.
//!
//! # Reentrancy
//!
//! A destination must not log. With a plain `Logger` this cannot compile
//! (the dispatcher is mutably borrowed for the whole dispatch); see
//! [`SharedLogger`](crate::SharedLogger) for the shared case.

use core::fmt::{self, Write};

use heapless::{String, Vec};

use crate::config::{MAX_MESSAGE_LENGTH, MAX_SUBSCRIBERS};
use crate::error::Error;
use crate::level::Level;
use crate::subscriber::{LogFn, Subscriber};

/// Fixed-capacity, allocation-free log dispatcher.
///
/// `N` is the maximum number of subscribers, `M` the buffer capacity
/// (terminator slot included, so a message holds at most `M - 1` bytes).
pub struct Logger<const N: usize = MAX_SUBSCRIBERS, const M: usize = MAX_MESSAGE_LENGTH> {
    registry: Vec<Subscriber, N>,
    buffer: String<M>,
    enabled: bool,
    // Lowest threshold in the registry, None when empty
    floor: Option<Level>,
}

impl<const N: usize, const M: usize> Logger<N, M> {
    /// Create an empty, enabled dispatcher.
    pub const fn new() -> Self {
        const { assert!(M > 1, "message buffer needs room for text and terminator") };
        Self {
            registry: Vec::new(),
            buffer: String::new(),
            enabled: true,
            floor: None,
        }
    }

    /// Reset to the freshly constructed state: no subscribers, enabled.
    pub fn init(&mut self) {
        self.registry.clear();
        self.buffer.clear();
        self.enabled = true;
        self.floor = None;
    }

    /// Register `destination`, or update its threshold if already registered.
    ///
    /// # Errors
    ///
    /// [`Error::SubscribersExceeded`] if the destination is new and the
    /// registry is full. The registry is left unchanged.
    pub fn subscribe(
        &mut self,
        destination: LogFn,
        threshold: Level,
    ) -> Result<(), Error> {
        if let Some(entry) = self.registry.iter_mut().find(|s| s.is(destination)) {
            entry.threshold = threshold;
        } else {
            self.registry
                .push(Subscriber::new(destination, threshold))
                .map_err(|_| Error::SubscribersExceeded)?;
        }
        self.refresh_floor();
        Ok(())
    }

    /// Remove `destination`. The order of the remaining subscribers is kept.
    ///
    /// # Errors
    ///
    /// [`Error::NotSubscribed`] if the destination is not registered.
    pub fn unsubscribe(
        &mut self,
        destination: LogFn,
    ) -> Result<(), Error> {
        let index = self.position(destination).ok_or(Error::NotSubscribed)?;
        self.registry.remove(index);
        self.refresh_floor();
        Ok(())
    }

    /// Format `args` once and deliver it to every subscriber at or below `severity`.
    ///
    /// Over-long messages are truncated silently.
    pub fn log(
        &mut self,
        severity: Level,
        args: fmt::Arguments<'_>,
    ) {
        if !self.enabled || !self.floor.is_some_and(|floor| floor <= severity) {
            return;
        }

        self.buffer.clear();
        // Err only means the text was cut short
        let _ = Truncating(&mut self.buffer).write_fmt(args);

        let message = self.buffer.as_str();
        for subscriber in self.registry.iter().filter(|s| s.accepts(severity)) {
            (subscriber.destination)(severity, message);
        }
    }

    /// Turn dispatch on or off at runtime. Subscriptions are kept.
    pub fn set_enabled(
        &mut self,
        enabled: bool,
    ) {
        self.enabled = enabled;
    }

    /// Whether dispatch is currently on.
    #[inline]
    pub const fn is_enabled(&self) -> bool { self.enabled }

    /// Number of registered subscribers.
    #[inline]
    pub fn len(&self) -> usize { self.registry.len() }

    /// Whether no subscriber is registered.
    #[inline]
    pub fn is_empty(&self) -> bool { self.registry.is_empty() }

    /// Maximum number of subscribers.
    #[inline]
    pub const fn capacity(&self) -> usize { N }

    /// Whether `destination` is registered.
    pub fn is_subscribed(
        &self,
        destination: LogFn,
    ) -> bool {
        self.position(destination).is_some()
    }

    /// Threshold `destination` is registered with, if any.
    pub fn threshold_of(
        &self,
        destination: LogFn,
    ) -> Option<Level> {
        self.registry.iter().find(|s| s.is(destination)).map(|s| s.threshold)
    }

    /// Registered subscribers in registration (and dispatch) order.
    pub fn subscribers(&self) -> impl Iterator<Item = &Subscriber> { self.registry.iter() }

    fn position(
        &self,
        destination: LogFn,
    ) -> Option<usize> {
        self.registry.iter().position(|s| s.is(destination))
    }

    fn refresh_floor(&mut self) { self.floor = self.registry.iter().map(|s| s.threshold).min(); }
}

impl<const N: usize, const M: usize> Default for Logger<N, M> {
    fn default() -> Self { Self::new() }
}

/// Writer that stops one byte short of the buffer capacity.
///
/// Cuts on a char boundary and reports `fmt::Error` once full so the
/// formatter stops early.
struct Truncating<'a, const M: usize>(&'a mut String<M>);

impl<const M: usize> Write for Truncating<'_, M> {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        let room = (M - 1).saturating_sub(self.0.len());
        if s.len() <= room {
            return self.0.push_str(s).map_err(|_| fmt::Error);
        }

        let mut cut = room;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        self.0.push_str(&s[..cut]).ok();
        Err(fmt::Error)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::string::{String as StdString, ToString};
    use std::vec::Vec as StdVec;

    use super::*;

    std::thread_local! {
        static CALLS: RefCell<StdVec<(&'static str, Level, StdString)>> = const { RefCell::new(StdVec::new()) };
    }

    fn record(
        name: &'static str,
        level: Level,
        msg: &str,
    ) {
        CALLS.with(|c| c.borrow_mut().push((name, level, msg.to_string())));
    }

    fn take_calls() -> StdVec<(&'static str, Level, StdString)> { CALLS.with(|c| c.borrow_mut().drain(..).collect()) }

    fn dest_a(
        level: Level,
        msg: &str,
    ) {
        record("a", level, msg);
    }

    fn dest_b(
        level: Level,
        msg: &str,
    ) {
        record("b", level, msg);
    }

    fn dest_c(
        level: Level,
        msg: &str,
    ) {
        record("c", level, msg);
    }

    fn names(calls: &[(&'static str, Level, StdString)]) -> StdVec<&'static str> { calls.iter().map(|c| c.0).collect() }

    #[test]
    fn test_capacity_scenario() {
        let mut logger: Logger<2, 32> = Logger::new();

        assert_eq!(logger.subscribe(dest_a, Level::Info), Ok(()));
        assert_eq!(logger.subscribe(dest_b, Level::Error), Ok(()));
        assert_eq!(logger.subscribe(dest_c, Level::Debug), Err(Error::SubscribersExceeded));
        assert_eq!(logger.len(), 2);
        assert!(!logger.is_subscribed(dest_c));

        logger.log(Level::Warning, format_args!("x={}", 5));
        assert_eq!(take_calls(), [("a", Level::Warning, "x=5".to_string())]);

        logger.log(Level::Critical, format_args!("boom"));
        assert_eq!(take_calls(), [
            ("a", Level::Critical, "boom".to_string()),
            ("b", Level::Critical, "boom".to_string()),
        ]);
    }

    #[test]
    fn test_resubscribe_updates_threshold() {
        let mut logger: Logger<2, 32> = Logger::new();
        logger.subscribe(dest_a, Level::Error).unwrap();
        logger.subscribe(dest_a, Level::Trace).unwrap();

        assert_eq!(logger.len(), 1);
        assert_eq!(logger.threshold_of(dest_a), Some(Level::Trace));

        logger.log(Level::Debug, format_args!("hi"));
        assert_eq!(names(&take_calls()), ["a"]);
    }

    #[test]
    fn test_resubscribe_when_full_succeeds() {
        let mut logger: Logger<1, 32> = Logger::new();
        logger.subscribe(dest_a, Level::Info).unwrap();
        assert_eq!(logger.subscribe(dest_a, Level::Error), Ok(()));
        assert_eq!(logger.threshold_of(dest_a), Some(Level::Error));
    }

    #[test]
    fn test_overflow_leaves_registry_unchanged() {
        let mut logger: Logger<1, 32> = Logger::new();
        logger.subscribe(dest_a, Level::Warning).unwrap();
        assert_eq!(logger.subscribe(dest_b, Level::Trace), Err(Error::SubscribersExceeded));

        let entries: StdVec<_> = logger.subscribers().map(|s| (s.is(dest_a), s.threshold())).collect();
        assert_eq!(entries, [(true, Level::Warning)]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut logger: Logger<3, 32> = Logger::new();
        logger.subscribe(dest_a, Level::Trace).unwrap();

        assert_eq!(logger.unsubscribe(dest_b), Err(Error::NotSubscribed));
        assert_eq!(logger.len(), 1);

        assert_eq!(logger.unsubscribe(dest_a), Ok(()));
        assert_eq!(logger.unsubscribe(dest_a), Err(Error::NotSubscribed));
        assert!(logger.is_empty());

        logger.log(Level::Always, format_args!("nobody listens"));
        assert!(take_calls().is_empty());
    }

    #[test]
    fn test_unsubscribe_preserves_order() {
        let mut logger: Logger<3, 32> = Logger::new();
        logger.subscribe(dest_a, Level::Trace).unwrap();
        logger.subscribe(dest_b, Level::Trace).unwrap();
        logger.subscribe(dest_c, Level::Trace).unwrap();

        logger.unsubscribe(dest_b).unwrap();
        logger.log(Level::Info, format_args!("m"));
        assert_eq!(names(&take_calls()), ["a", "c"]);

        // Freed slot is reusable and appends at the end
        logger.subscribe(dest_b, Level::Trace).unwrap();
        logger.log(Level::Info, format_args!("m"));
        assert_eq!(names(&take_calls()), ["a", "c", "b"]);
    }

    #[test]
    fn test_dispatch_threshold_filter() {
        let mut logger: Logger<3, 32> = Logger::new();
        logger.subscribe(dest_a, Level::Debug).unwrap();
        logger.subscribe(dest_b, Level::Always).unwrap();
        logger.subscribe(dest_c, Level::Warning).unwrap();

        for severity in Level::ALL {
            logger.log(severity, format_args!("{}", severity));
            let got = names(&take_calls());

            let mut expected = StdVec::new();
            if severity >= Level::Debug {
                expected.push("a");
            }
            if severity >= Level::Always {
                expected.push("b");
            }
            if severity >= Level::Warning {
                expected.push("c");
            }
            assert_eq!(got, expected, "dispatch for {severity}");
        }
    }

    #[test]
    fn test_truncation() {
        let mut logger: Logger<2, 8> = Logger::new();
        logger.subscribe(dest_a, Level::Trace).unwrap();
        logger.subscribe(dest_b, Level::Trace).unwrap();

        logger.log(Level::Info, format_args!("{}-{}", "abcdef", 12345));
        let calls = take_calls();
        assert_eq!(calls.len(), 2);
        for (_, _, msg) in &calls {
            assert_eq!(msg, "abcdef-");
            assert_eq!(msg.len(), 7);
        }
    }

    #[test]
    fn test_truncation_respects_char_boundary() {
        let mut logger: Logger<1, 6> = Logger::new();
        logger.subscribe(dest_a, Level::Trace).unwrap();

        // 'é' is two bytes; the fifth byte would split it
        logger.log(Level::Info, format_args!("abcdé"));
        assert_eq!(take_calls()[0].2, "abcd");
    }

    #[test]
    fn test_exact_fit_not_truncated() {
        let mut logger: Logger<1, 6> = Logger::new();
        logger.subscribe(dest_a, Level::Trace).unwrap();
        logger.log(Level::Info, format_args!("12345"));
        assert_eq!(take_calls()[0].2, "12345");
    }

    #[test]
    fn test_buffer_reused_between_calls() {
        let mut logger: Logger<1, 32> = Logger::new();
        logger.subscribe(dest_a, Level::Trace).unwrap();
        logger.log(Level::Info, format_args!("a longer first message"));
        logger.log(Level::Info, format_args!("short"));

        let calls = take_calls();
        assert_eq!(calls[1].2, "short");
    }

    #[test]
    fn test_runtime_gate() {
        let mut logger: Logger<1, 32> = Logger::new();
        logger.subscribe(dest_a, Level::Trace).unwrap();

        logger.set_enabled(false);
        assert!(!logger.is_enabled());
        logger.log(Level::Always, format_args!("muted"));
        assert!(take_calls().is_empty());

        logger.set_enabled(true);
        logger.log(Level::Info, format_args!("back"));
        assert_eq!(take_calls().len(), 1);
    }

    #[test]
    fn test_init_clears_state() {
        let mut logger: Logger<2, 32> = Logger::new();
        logger.subscribe(dest_a, Level::Trace).unwrap();
        logger.subscribe(dest_b, Level::Trace).unwrap();
        logger.set_enabled(false);

        logger.init();
        assert!(logger.is_empty());
        assert!(logger.is_enabled());
        assert_eq!(logger.subscribe(dest_c, Level::Trace), Ok(()));
        assert_eq!(logger.subscribe(dest_a, Level::Trace), Ok(()));
    }

    #[test]
    fn test_macros_dispatch() {
        let mut logger: Logger<1, 32> = Logger::new();
        logger.subscribe(dest_a, Level::Trace).unwrap();

        crate::trace!(logger, "t{}", 1);
        crate::debug!(logger, "d");
        crate::info!(logger, "i");
        crate::warning!(logger, "w");
        crate::error!(logger, "e");
        crate::critical!(logger, "c");
        crate::always!(logger, "a");
        crate::log!(logger, Level::Info, "n={}", 2);

        let calls = take_calls();
        let levels: StdVec<Level> = calls.iter().map(|c| c.1).collect();
        let mut expected = Level::ALL.to_vec();
        expected.push(Level::Info);
        assert_eq!(levels, expected);
        assert_eq!(calls[0].2, "t1");
        assert_eq!(calls[7].2, "n=2");
    }

    #[test]
    fn test_capacity_reported() {
        let logger: Logger = Logger::default();
        assert_eq!(logger.capacity(), MAX_SUBSCRIBERS);
        assert!(logger.is_empty());
    }

    std::thread_local! {
        static FORMATS: core::cell::Cell<u32> = const { core::cell::Cell::new(0) };
    }

    struct Counted;

    impl fmt::Display for Counted {
        fn fmt(
            &self,
            f: &mut fmt::Formatter<'_>,
        ) -> fmt::Result {
            FORMATS.with(|n| n.set(n.get() + 1));
            f.write_str("counted")
        }
    }

    #[test]
    fn test_formats_once_for_many_subscribers() {
        let mut logger: Logger<4, 32> = Logger::new();
        logger.subscribe(dest_a, Level::Info).unwrap();
        logger.subscribe(dest_b, Level::Warning).unwrap();

        crate::error!(logger, "{}", Counted);
        assert_eq!(FORMATS.with(|n| n.get()), 1);
        let calls = take_calls();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|(_, _, msg)| msg == "counted"));

        // No subscriber accepts Debug: nothing to deliver, nothing formatted
        crate::debug!(logger, "{}", Counted);
        assert_eq!(FORMATS.with(|n| n.get()), 1);
        assert!(take_calls().is_empty());
    }
}
