//! Query debouncer for as-you-type search.
//!
//! Wraps an operation (issue one search call) so that a burst of
//! invocations collapses into one execution. In the default trailing
//! mode the operation runs once, `wait` after the last invocation in
//! the burst, with that invocation's arguments. In leading mode the
//! first invocation fires immediately and later ones inside the window
//! are suppressed.
//!
//! The debouncer holds no reference to results, only the pending-timer
//! handle and the most recent call's arguments. One instance is meant
//! to be driven by one logical caller (an input field).

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Default wait window.
const DEFAULT_WAIT: Duration = Duration::from_millis(250);

type Callback<T> = Arc<dyn Fn(T) -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync>;

/// Debouncer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceConfig {
    /// How long a burst must be quiet before (trailing) or after
    /// (leading) an execution.
    pub wait: Duration,

    /// Leading-edge mode: fire on the first invocation of a burst and
    /// suppress the rest, instead of firing after the burst settles.
    pub immediate: bool,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            wait: DEFAULT_WAIT,
            immediate: false,
        }
    }
}

/// Mutable debouncer state, guarded by one mutex.
struct DebounceState {
    /// Timer task for the pending trailing execution, if any
    pending: Option<JoinHandle<()>>,

    /// End of the current leading-mode suppression window
    deadline: Option<Instant>,
}

/// Rate limiter for a wrapped operation.
///
/// Cheap to clone (clones share state). Must be driven from within a
/// tokio runtime, since executions are scheduled on the tokio timer.
pub struct Debouncer<T> {
    config: DebounceConfig,
    op: Callback<T>,
    state: Arc<Mutex<DebounceState>>,
}

impl<T> Clone for Debouncer<T> {
    fn clone(&self) -> Self {
        Self {
            config: self.config,
            op: self.op.clone(),
            state: self.state.clone(),
        }
    }
}

impl<T: Send + 'static> Debouncer<T> {
    /// Wrap `op` with the given debounce configuration.
    pub fn new<F, Fut>(config: DebounceConfig, op: F) -> Self
    where
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self {
            config,
            op: Arc::new(move |args| {
                Box::pin(op(args)) as Pin<Box<dyn Future<Output = ()> + Send>>
            }),
            state: Arc::new(Mutex::new(DebounceState {
                pending: None,
                deadline: None,
            })),
        }
    }

    /// Record one invocation with the given arguments.
    ///
    /// Trailing mode: cancels any pending execution and schedules a new
    /// one `wait` from now, so at most one execution is ever scheduled.
    /// Leading mode: executes immediately unless a suppression window
    /// is open; either way the window is re-armed.
    pub fn call(&self, args: T) {
        if self.config.immediate {
            self.call_leading(args);
        } else {
            self.call_trailing(args);
        }
    }

    /// Cancel a pending trailing execution and close the leading window.
    pub fn cancel(&self) {
        let mut state = self.lock_state();
        if let Some(handle) = state.pending.take() {
            handle.abort();
        }
        state.deadline = None;
    }

    fn call_trailing(&self, args: T) {
        let mut state = self.lock_state();
        if let Some(handle) = state.pending.take() {
            handle.abort();
        }

        let op = self.op.clone();
        let wait = self.config.wait;
        state.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            op(args).await;
        }));
    }

    fn call_leading(&self, args: T) {
        let now = Instant::now();
        let mut state = self.lock_state();
        let suppressed = state.deadline.is_some_and(|deadline| now < deadline);
        state.deadline = Some(now + self.config.wait);
        drop(state);

        if !suppressed {
            let op = self.op.clone();
            tokio::spawn(async move {
                op(args).await;
            });
        }
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, DebounceState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> std::fmt::Debug for Debouncer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("wait", &self.config.wait)
            .field("immediate", &self.config.immediate)
            .finish()
    }
}
