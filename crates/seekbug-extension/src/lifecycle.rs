//! Disposable lifecycle container
//!
//! Everything the extension registers with the host must be released when
//! it is deactivated. A [`DisposableContext`] collects the release
//! callbacks and runs them once, at [`DisposableContext::teardown`].
//!
//! Teardown is collect-and-continue: a callback that fails or panics is
//! recorded in the [`TeardownReport`] and the remaining callbacks still run.
//! Callbacks run in reverse registration order, so later registrations
//! (which may depend on earlier ones) go first.

use seekbug_ports::Subscription;
use std::any::Any;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;
use tracing::{debug, info, warn};

type ReleaseFn = Box<dyn FnOnce() -> Result<(), String> + Send>;

struct Entry {
    label: String,
    release: ReleaseFn,
}

impl Entry {
    fn run(self) -> Result<(), ReleaseError> {
        let Entry { label, release } = self;
        match catch_unwind(AssertUnwindSafe(release)) {
            Ok(Ok(())) => Ok(()),
            Ok(Err(reason)) => Err(ReleaseError { label, reason }),
            Err(payload) => Err(ReleaseError {
                label,
                reason: format!("panicked: {}", panic_message(payload.as_ref())),
            }),
        }
    }
}

enum State {
    Active(Vec<Entry>),
    TornDown,
}

/// A release callback that failed during teardown
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to release '{label}': {reason}")]
pub struct ReleaseError {
    pub label: String,
    pub reason: String,
}

/// Outcome of a teardown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeardownReport {
    /// Callbacks that completed successfully
    pub released: usize,
    /// Callbacks that returned an error or panicked, in the order they ran
    pub failures: Vec<ReleaseError>,
}

impl TeardownReport {
    /// True when every callback succeeded
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total callbacks invoked
    pub fn invoked(&self) -> usize {
        self.released + self.failures.len()
    }
}

/// Collects release callbacks and runs each exactly once at teardown
pub struct DisposableContext {
    name: String,
    state: Mutex<State>,
}

impl DisposableContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: Mutex::new(State::Active(Vec::new())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a callback to run at teardown.
    ///
    /// After teardown the container is inert: the callback runs right away
    /// and nothing is retained.
    pub fn register_for_cleanup<F, E>(&self, label: impl Into<String>, release: F)
    where
        F: FnOnce() -> Result<(), E> + Send + 'static,
        E: fmt::Display,
    {
        let entry = Entry {
            label: label.into(),
            release: Box::new(move || release().map_err(|e| e.to_string())),
        };

        let late = {
            let mut state = self.lock();
            match &mut *state {
                State::Active(entries) => {
                    debug!(context = %self.name, label = %entry.label, "Registered for cleanup");
                    entries.push(entry);
                    None
                }
                State::TornDown => Some(entry),
            }
        };

        if let Some(entry) = late {
            warn!(
                context = %self.name,
                label = %entry.label,
                "Registration after teardown, releasing immediately"
            );
            if let Err(e) = entry.run() {
                warn!(context = %self.name, error = %e, "Late release failed");
            }
        }
    }

    /// Register a host subscription for release at teardown
    pub fn push_subscription(&self, subscription: Subscription) {
        let label = subscription.label().to_string();
        self.register_for_cleanup(label, move || subscription.release());
    }

    /// Number of callbacks waiting for teardown
    pub fn len(&self) -> usize {
        match &*self.lock() {
            State::Active(entries) => entries.len(),
            State::TornDown => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_torn_down(&self) -> bool {
        matches!(&*self.lock(), State::TornDown)
    }

    /// Run every registered callback once, newest first.
    ///
    /// Subsequent calls do nothing and return an empty report.
    pub fn teardown(&self) -> TeardownReport {
        let entries = match std::mem::replace(&mut *self.lock(), State::TornDown) {
            State::Active(entries) => entries,
            State::TornDown => {
                debug!(context = %self.name, "Already torn down");
                return TeardownReport::default();
            }
        };

        let mut report = TeardownReport::default();
        for entry in entries.into_iter().rev() {
            let label = entry.label.clone();
            match entry.run() {
                Ok(()) => {
                    debug!(context = %self.name, label = %label, "Released");
                    report.released += 1;
                }
                Err(e) => {
                    warn!(context = %self.name, error = %e, "Release failed, continuing teardown");
                    report.failures.push(e);
                }
            }
        }

        info!(
            context = %self.name,
            released = report.released,
            failed = report.failures.len(),
            "Teardown complete"
        );
        report
    }

    // A callback can only panic outside the lock, so poisoning is not
    // expected; recover the state anyway rather than lose registrations.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl fmt::Debug for DisposableContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisposableContext")
            .field("name", &self.name)
            .field("pending", &self.len())
            .field("torn_down", &self.is_torn_down())
            .finish()
    }
}

impl Drop for DisposableContext {
    fn drop(&mut self) {
        let state = self.state.get_mut().unwrap_or_else(|e| e.into_inner());
        if let State::Active(entries) = state {
            if !entries.is_empty() {
                warn!(
                    context = %self.name,
                    pending = entries.len(),
                    "Dropped without teardown; registrations were not released"
                );
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seekbug_ports::HostError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting(counter: &Arc<AtomicUsize>) -> impl FnOnce() -> Result<(), String> + Send {
        let counter = counter.clone();
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_teardown_runs_each_callback_once() {
        let ctx = DisposableContext::new("test");
        let counter = Arc::new(AtomicUsize::new(0));
        ctx.register_for_cleanup("a", counting(&counter));
        ctx.register_for_cleanup("b", counting(&counter));
        assert_eq!(ctx.len(), 2);

        let report = ctx.teardown();
        assert_eq!(report.released, 2);
        assert!(report.is_clean());
        assert_eq!(counter.load(Ordering::SeqCst), 2);
        assert!(ctx.is_torn_down());
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_second_teardown_is_noop() {
        let ctx = DisposableContext::new("test");
        let counter = Arc::new(AtomicUsize::new(0));
        ctx.register_for_cleanup("a", counting(&counter));

        ctx.teardown();
        let second = ctx.teardown();

        assert_eq!(second, TeardownReport::default());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_teardown_order_is_newest_first() {
        let ctx = DisposableContext::new("test");
        let order = Arc::new(Mutex::new(Vec::new()));
        for label in ["first", "second", "third"] {
            let order = order.clone();
            ctx.register_for_cleanup(label, move || {
                order.lock().unwrap().push(label);
                Ok::<_, String>(())
            });
        }

        ctx.teardown();
        assert_eq!(*order.lock().unwrap(), vec!["third", "second", "first"]);
    }

    #[test]
    fn test_failing_callback_does_not_stop_others() {
        let ctx = DisposableContext::new("test");
        let counter = Arc::new(AtomicUsize::new(0));
        ctx.register_for_cleanup("ok-1", counting(&counter));
        ctx.register_for_cleanup("broken", || Err::<(), _>("handle already closed"));
        ctx.register_for_cleanup("ok-2", counting(&counter));

        let report = ctx.teardown();
        assert_eq!(report.released, 2);
        assert_eq!(
            report.failures,
            vec![ReleaseError {
                label: "broken".to_string(),
                reason: "handle already closed".to_string(),
            }]
        );
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_panicking_callback_is_contained() {
        let ctx = DisposableContext::new("test");
        let counter = Arc::new(AtomicUsize::new(0));
        ctx.register_for_cleanup("ok", counting(&counter));
        ctx.register_for_cleanup("boom", || -> Result<(), String> { panic!("boom") });

        let report = ctx.teardown();
        assert_eq!(report.invoked(), 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].reason, "panicked: boom");
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_registration_after_teardown_released_immediately() {
        let ctx = DisposableContext::new("test");
        ctx.teardown();

        let counter = Arc::new(AtomicUsize::new(0));
        ctx.register_for_cleanup("late", counting(&counter));

        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(ctx.is_empty());
        assert_eq!(ctx.teardown().invoked(), 0);
    }

    #[test]
    fn test_subscription_release_errors_reported() {
        let ctx = DisposableContext::new("test");
        ctx.push_subscription(Subscription::new("command:x", || {
            Err(HostError::Release("unknown command".to_string()))
        }));

        let report = ctx.teardown();
        assert_eq!(report.failures[0].label, "command:x");
        assert_eq!(report.failures[0].reason, "Release failed: unknown command");
        assert_eq!(
            report.failures[0].to_string(),
            "Failed to release 'command:x': Release failed: unknown command"
        );
    }

    #[test]
    fn test_drop_without_teardown_does_not_run_callbacks() {
        let counter = Arc::new(AtomicUsize::new(0));
        {
            let ctx = DisposableContext::new("test");
            ctx.register_for_cleanup("a", counting(&counter));
        }
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }
}
