//! Transient denied feedback
//!
//! A denial never surfaces as an error. It flips a visible-alert flag and arms
//! a one-shot reset timer; when the timer fires, the flag clears and the
//! dialog returns to idle. The timer handle lives here so `dispose` can cancel
//! it without touching dialog state.

use crate::scheduler::TimerHandle;
use std::fmt;

/// Visible-alert flag plus the one-shot reset timer behind it.
#[derive(Default)]
pub struct AlertFeedback {
    visible: bool,
    timer: Option<Box<dyn TimerHandle>>,
}

impl AlertFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the denied cue is currently visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether a reset timer is armed.
    pub fn has_pending_timer(&self) -> bool {
        self.timer.is_some()
    }

    /// Begin a feedback cycle: the denied cue becomes visible.
    pub(crate) fn show(&mut self) {
        self.visible = true;
    }

    /// Arm the one-shot reset timer behind the visible cue.
    pub(crate) fn arm(&mut self, timer: Box<dyn TimerHandle>) {
        self.timer = Some(timer);
    }

    /// The reset timer fired: flag off, handle cleared.
    pub(crate) fn reset(&mut self) {
        self.visible = false;
        self.timer = None;
    }

    /// Cancel a pending reset timer. Idempotent when none is armed; leaves the
    /// visible flag untouched.
    pub(crate) fn cancel(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }
}

impl fmt::Debug for AlertFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertFeedback")
            .field("visible", &self.visible)
            .field("pending_timer", &self.timer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{ManualScheduler, Scheduler};
    use std::time::Duration;

    #[test]
    fn test_begin_reset_cycle() {
        let scheduler = ManualScheduler::new();
        let mut alert = AlertFeedback::new();

        assert!(!alert.is_visible());
        alert.show();
        alert.arm(scheduler.after(Duration::from_millis(250), Box::new(|| {})));
        assert!(alert.is_visible());
        assert!(alert.has_pending_timer());

        alert.reset();
        assert!(!alert.is_visible());
        assert!(!alert.has_pending_timer());
    }

    #[test]
    fn test_cancel_disarms_timer_only() {
        let scheduler = ManualScheduler::new();
        let mut alert = AlertFeedback::new();

        alert.show();
        alert.arm(scheduler.after(Duration::from_millis(250), Box::new(|| {})));
        alert.cancel();

        // The timer is gone but the flag is not mutated.
        assert_eq!(scheduler.pending(), 0);
        assert!(alert.is_visible());
        assert!(!alert.has_pending_timer());

        alert.cancel(); // idempotent
    }
}
