//! Result subscriptions and log callback.
//!
//! Count results are delivered per counter through [`Subscribers`]; there is
//! no global notification hub. Logging goes through a single process-wide
//! callback so hosts can route it into their own logger.
//!
//! [`TextCounter`](crate::TextCounter) logs:
//!
//! - `Debug`: every completed pass, and edits it ignores (disabled or
//!   attribute-only)
//! - `Info`: enable/disable transitions
//! - `Warn`: edit signals inconsistent with the observed text
//!
//! Messages below [`log_level`] are dropped before the callback runs.

use crate::snapshot::CountSnapshot;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, OnceLock};

/// Log level for debug callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Debug,
            1 => Self::Info,
            2 => Self::Warn,
            _ => Self::Error,
        }
    }
}

static MIN_LOG_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Debug as u8);

/// Set the minimum level passed to the log callback.
pub fn set_log_level(level: LogLevel) {
    MIN_LOG_LEVEL.store(level as u8, Ordering::Relaxed);
}

/// Get the minimum level passed to the log callback.
#[must_use]
pub fn log_level() -> LogLevel {
    LogLevel::from_u8(MIN_LOG_LEVEL.load(Ordering::Relaxed))
}

/// Whether a message at `level` would reach the log callback.
#[must_use]
pub fn log_enabled(level: LogLevel) -> bool {
    level >= log_level()
}

type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global log callback.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    if let Ok(mut guard) = log_callback().lock() {
        *guard = Some(Box::new(callback));
    }
}

/// Remove the global log callback.
pub fn clear_log_callback() {
    if let Ok(mut guard) = log_callback().lock() {
        *guard = None;
    }
}

/// Emit a log event.
pub fn emit_log(level: LogLevel, message: &str) {
    if !log_enabled(level) {
        return;
    }
    if let Ok(guard) = log_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, message);
        }
    }
}

/// Handle returned by [`Subscribers::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type CountCallback = Box<dyn FnMut(&CountSnapshot) + Send + 'static>;

/// Callbacks notified once per completed counting pass, in registration order.
#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, CountCallback)>,
}

impl Subscribers {
    /// Create an empty subscriber list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&CountSnapshot) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(existing, _)| *existing != id);
        self.callbacks.len() != before
    }

    /// Number of registered callbacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Check if no callbacks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Deliver a snapshot to every callback.
    pub fn publish(&mut self, snapshot: &CountSnapshot) {
        for (_, callback) in &mut self.callbacks {
            callback(snapshot);
        }
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("len", &self.callbacks.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_publish_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut subscribers = Subscribers::new();
        for tag in ["first", "second"] {
            let seen = Arc::clone(&seen);
            subscribers.subscribe(move |snapshot: &CountSnapshot| {
                seen.lock().unwrap().push((tag, snapshot.words));
            });
        }

        let snapshot = CountSnapshot {
            words: 4,
            ..CountSnapshot::ZERO
        };
        subscribers.publish(&snapshot);
        assert_eq!(*seen.lock().unwrap(), vec![("first", 4), ("second", 4)]);
    }

    #[test]
    fn test_unsubscribe() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut subscribers = Subscribers::new();
        let calls_clone = Arc::clone(&calls);
        let id = subscribers.subscribe(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(subscribers.len(), 1);

        assert!(subscribers.unsubscribe(id));
        assert!(!subscribers.unsubscribe(id));
        assert!(subscribers.is_empty());

        subscribers.publish(&CountSnapshot::ZERO);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_log_callback_and_level() {
        let hits = Arc::new(Mutex::new(Vec::new()));
        let hits_clone = Arc::clone(&hits);
        set_log_callback(move |level, msg| {
            if msg.starts_with("event-test") {
                hits_clone.lock().unwrap().push(level);
            }
        });

        emit_log(LogLevel::Info, "event-test");
        assert_eq!(*hits.lock().unwrap(), vec![LogLevel::Info]);

        set_log_level(LogLevel::Warn);
        assert_eq!(log_level(), LogLevel::Warn);
        assert!(!log_enabled(LogLevel::Info));
        emit_log(LogLevel::Info, "event-test dropped");
        emit_log(LogLevel::Warn, "event-test kept");
        set_log_level(LogLevel::Debug);

        assert_eq!(*hits.lock().unwrap(), vec![LogLevel::Info, LogLevel::Warn]);
        clear_log_callback();
    }
}
