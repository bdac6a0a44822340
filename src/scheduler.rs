//! Injected timer scheduling
//!
//! The controller never reaches into global timer state. One-shot timers go
//! through the [`Scheduler`] trait, so production code runs on the tokio clock
//! while tests drive the alert cycle deterministically with
//! [`ManualScheduler`].

use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One-shot callback run when a timer fires.
pub type TimerCallback = Box<dyn FnOnce() + Send>;

/// Handle to a scheduled timer.
pub trait TimerHandle: Send {
    /// Prevent the callback from firing if it has not fired yet. Idempotent.
    fn cancel(&self);
}

/// One-shot timer scheduling capability.
pub trait Scheduler: Send + Sync {
    /// Schedule `callback` to run once after `delay`.
    fn after(&self, delay: Duration, callback: TimerCallback) -> Box<dyn TimerHandle>;
}

/// Production scheduler backed by the tokio runtime.
///
/// Must be used from within a tokio runtime context.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn after(&self, delay: Duration, callback: TimerCallback) -> Box<dyn TimerHandle> {
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });
        Box::new(TokioTimerHandle { task })
    }
}

struct TokioTimerHandle {
    task: tokio::task::JoinHandle<()>,
}

impl TimerHandle for TokioTimerHandle {
    fn cancel(&self) {
        self.task.abort();
    }
}

/// Deterministic scheduler for tests: timers fire only when the test says so.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Arc<Mutex<ManualInner>>,
}

#[derive(Default)]
struct ManualInner {
    next_id: u64,
    pending: Vec<ManualTimer>,
}

struct ManualTimer {
    id: u64,
    delay: Duration,
    callback: TimerCallback,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of armed timers.
    pub fn pending(&self) -> usize {
        self.inner.lock().unwrap().pending.len()
    }

    /// Delay of the most recently scheduled timer, if any is still armed.
    pub fn last_delay(&self) -> Option<Duration> {
        self.inner.lock().unwrap().pending.last().map(|t| t.delay)
    }

    /// Fire the oldest armed timer. Returns whether a timer fired.
    pub fn fire_next(&self) -> bool {
        // Pop under the lock, invoke after releasing it: the callback is free
        // to schedule or cancel timers.
        let timer = {
            let mut inner = self.inner.lock().unwrap();
            if inner.pending.is_empty() {
                None
            } else {
                Some(inner.pending.remove(0))
            }
        };

        match timer {
            Some(timer) => {
                (timer.callback)();
                true
            }
            None => false,
        }
    }
}

impl Scheduler for ManualScheduler {
    fn after(&self, delay: Duration, callback: TimerCallback) -> Box<dyn TimerHandle> {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.pending.push(ManualTimer {
            id,
            delay,
            callback,
        });
        Box::new(ManualTimerHandle {
            id,
            inner: Arc::clone(&self.inner),
        })
    }
}

struct ManualTimerHandle {
    id: u64,
    inner: Arc<Mutex<ManualInner>>,
}

impl TimerHandle for ManualTimerHandle {
    fn cancel(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.pending.retain(|t| t.id != self.id);
    }
}
