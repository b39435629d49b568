//! Purpose: Cadence control for callbacks: debounce, throttle, and a sleep primitive.
//! Exports: `Debounce`, `Throttle`, `sleep`.
//! Role: Explicit per-wrapper state (timer handle or throttle window) instead of captured closures.
//! Invariants: A `Debounce` owns at most one pending timer; a new call aborts the previous one.
//! Invariants: A `Throttle` never queues; calls inside an open window are dropped.
//! Invariants: Arguments are forwarded to the callback unmodified, as a single tuple `A`.
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, trace};

use crate::core::error::{Error, ErrorKind};

type Callback<A> = dyn Fn(A) + Send + Sync;

/// Delays the callback until `wait` has passed with no further calls, then
/// runs it once with the arguments of the last call.
///
/// Timers run as tokio tasks, so `call` needs a running runtime. Dropping the
/// wrapper detaches (does not cancel) a pending invocation.
pub struct Debounce<A> {
    callback: Arc<Callback<A>>,
    wait: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<A: Send + 'static> Debounce<A> {
    pub fn new<F>(wait: Duration, callback: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
            wait,
            pending: Mutex::new(None),
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    pub fn call(&self, args: A) -> Result<(), Error> {
        let runtime = Handle::try_current().map_err(|err| {
            Error::new(ErrorKind::Usage)
                .with_message("debounce requires a running tokio runtime")
                .with_hint("Call from inside an async context (e.g. a #[tokio::main] program).")
                .with_source(err)
        })?;

        let mut pending = self.lock_pending();
        if let Some(previous) = pending.take() {
            previous.abort();
            trace!(wait_ms = self.wait.as_millis() as u64, "debounce timer reset");
        }

        let callback = Arc::clone(&self.callback);
        let wait = self.wait;
        *pending = Some(runtime.spawn(async move {
            tokio::time::sleep(wait).await;
            debug!(wait_ms = wait.as_millis() as u64, "debounce fired");
            callback(args);
        }));
        Ok(())
    }

    /// Drops the pending invocation, if any. Returns whether one was cancelled.
    pub fn cancel(&self) -> bool {
        match self.lock_pending().take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                debug!("debounce cancelled");
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.lock_pending()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn lock_pending(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Runs the callback immediately on the first call of a window, then drops
/// every call until `wait` has elapsed.
///
/// A `wait` too long to add to the clock opens a window that never closes.
pub struct Throttle<A> {
    callback: Box<Callback<A>>,
    wait: Duration,
    window: Mutex<Window>,
}

#[derive(Clone, Copy, Debug)]
enum Window {
    Open,
    Until(Instant),
    Forever,
}

impl Window {
    fn starting_at(now: Instant, wait: Duration) -> Self {
        now.checked_add(wait).map_or(Window::Forever, Window::Until)
    }

    fn is_closed_at(self, now: Instant) -> bool {
        match self {
            Window::Open => false,
            Window::Until(ends) => now < ends,
            Window::Forever => true,
        }
    }
}

impl<A> Throttle<A> {
    pub fn new<F>(wait: Duration, callback: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            callback: Box::new(callback),
            wait,
            window: Mutex::new(Window::Open),
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Returns `true` when the callback ran, `false` when the call was dropped.
    pub fn call(&self, args: A) -> bool {
        let now = Instant::now();
        {
            let mut window = self.lock_window();
            if window.is_closed_at(now) {
                trace!(window = ?*window, "throttle dropped call");
                return false;
            }
            *window = Window::starting_at(now, self.wait);
        }
        // Lock released before invoking so the callback may call back in.
        (self.callback)(args);
        true
    }

    pub fn is_pending(&self) -> bool {
        let window = *self.lock_window();
        window.is_closed_at(Instant::now())
    }

    /// Closes the current window so the next call runs immediately.
    pub fn reset(&self) {
        *self.lock_window() = Window::Open;
    }

    fn lock_window(&self) -> MutexGuard<'_, Window> {
        self.window.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Suspends for at least `ms` milliseconds.
pub async fn sleep(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
