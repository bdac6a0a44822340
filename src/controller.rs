//! Dialog lifecycle controller
//!
//! Owns the state machine for a single hosted dialog:
//!
//! ```text
//! Idle -> InProgress -> Destroyed            (action succeeded)
//! Idle -> InProgress -> AlertShown -> Idle   (action denied, alert enabled)
//! Idle -> InProgress -> Idle                 (action denied, alert disabled)
//! ```
//!
//! `Destroyed` is terminal. The single in-flight guarantee comes from the
//! `Idle`-only entry rule: a second request during handler resolution or while
//! the alert is showing is dropped, never queued. The inner state sits behind
//! a mutex, but the lock is never held across a handler await or the timer
//! wait.

use crate::alert::AlertFeedback;
use crate::host::{ContentFactory, HostedInstance};
use crate::injector::ChildContentInjector;
use crate::resolver::{resolve, ActionOutcome};
use crate::scheduler::Scheduler;
use crate::settings::DialogSettings;
use crate::types::{
    ActionButton, ActionHandler, DialogError, DialogOptions, DialogResult, DialogState,
};
use std::sync::{Arc, Mutex, Weak};
use tracing::{debug, info};

/// Controller for one dialog instance.
///
/// Collaborators are injected explicitly: the scheduler supplies one-shot
/// timers for the alert cycle, the factory instantiates nested content. The
/// controller exclusively owns the hosted instance's destruction and, if a
/// child was created, exclusively cascades its teardown.
#[derive(Clone)]
pub struct DialogController {
    inner: Arc<Mutex<Inner>>,
    scheduler: Arc<dyn Scheduler>,
    injector: ChildContentInjector,
}

#[derive(Default)]
struct Inner {
    initialized: bool,
    state: DialogState,
    title: String,
    on_close: Option<ActionHandler>,
    action_buttons: Vec<ActionButton>,
    settings: DialogSettings,
    hosted: Option<Box<dyn HostedInstance>>,
    child: Option<Box<dyn crate::host::DialogContent>>,
    alert: AlertFeedback,
}

impl DialogController {
    pub fn new(scheduler: Arc<dyn Scheduler>, factory: Arc<dyn ContentFactory>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
            scheduler,
            injector: ChildContentInjector::new(factory),
        }
    }

    /// Initialize the dialog with its hosted instance and options.
    ///
    /// Fails with [`DialogError::ConflictingHandlers`] when both `on_close`
    /// and non-empty `action_buttons` are supplied, before any state is
    /// established. When a child descriptor is present, the nested content is
    /// created and receives the same `dialog_init` contract with the same
    /// options; the created child is owned by this controller.
    pub async fn init(
        &self,
        hosted: Box<dyn HostedInstance>,
        options: Option<DialogOptions>,
    ) -> DialogResult<()> {
        let options = options.unwrap_or_default();

        if options.on_close.is_some() && !options.action_buttons.is_empty() {
            return Err(DialogError::ConflictingHandlers);
        }
        if self.inner.lock().unwrap().initialized {
            return Err(DialogError::AlreadyInitialized);
        }

        // Create and initialize nested content before committing any state,
        // so a failing child leaves the controller untouched.
        let child = self.injector.inject(&options).await?;

        let mut inner = self.inner.lock().unwrap();
        if inner.initialized {
            return Err(DialogError::AlreadyInitialized);
        }
        inner.initialized = true;
        inner.state = DialogState::Idle;
        inner.title = options.title.unwrap_or_default();
        inner.on_close = options.on_close;
        inner.action_buttons = options.action_buttons;
        inner.settings = match &options.settings {
            Some(overrides) => DialogSettings::default().merged(overrides),
            None => DialogSettings::default(),
        };
        inner.hosted = Some(hosted);
        inner.child = child;
        info!("Dialog initialized with title '{}'", inner.title);
        Ok(())
    }

    /// Resolve a user-triggered action.
    ///
    /// No-op unless the dialog is idle. An absent handler is an unconditional
    /// success. Success destroys the hosted instance (and any owned child);
    /// denial runs the alert cycle and returns to idle. A handler that never
    /// settles leaves the dialog in progress indefinitely; no timeout is
    /// applied to action resolution.
    pub async fn request_action(&self, handler: Option<ActionHandler>) -> DialogResult<()> {
        {
            let mut inner = self.inner.lock().unwrap();
            if !inner.initialized {
                return Err(DialogError::NotInitialized);
            }
            if inner.state != DialogState::Idle {
                debug!("Dropping action request while {:?}", inner.state);
                return Ok(());
            }
            inner.state = DialogState::InProgress;
        }

        self.resolve_and_finish(handler).await;
        Ok(())
    }

    /// Resolve the overlay click or the header close control.
    ///
    /// No-op unless idle, and no-op whenever action buttons are configured: a
    /// dialog with explicit actions is only resolved through those actions.
    /// Delegates to the `on_close` handler when one is set, otherwise destroys
    /// the hosted instance immediately.
    pub async fn request_close(&self) -> DialogResult<()> {
        let handler = {
            let mut inner = self.inner.lock().unwrap();
            if !inner.initialized {
                return Err(DialogError::NotInitialized);
            }
            if inner.state != DialogState::Idle {
                debug!("Dropping close request while {:?}", inner.state);
                return Ok(());
            }
            if !inner.action_buttons.is_empty() {
                debug!("Ignoring close request: dialog resolves through its action buttons");
                return Ok(());
            }
            inner.state = DialogState::InProgress;
            inner.on_close.clone()
        };

        match handler {
            Some(handler) => self.resolve_and_finish(Some(handler)).await,
            None => self.finalize_and_destroy(),
        }
        Ok(())
    }

    /// Release resources when the hosted instance is removed externally.
    ///
    /// Cancels a pending alert timer so its callback never fires; idempotent
    /// when none is pending. Dialog state is not mutated further.
    pub fn dispose(&self) {
        let mut inner = self.inner.lock().unwrap();
        if inner.alert.has_pending_timer() {
            debug!("Disposing dialog; cancelling pending alert timer");
        }
        inner.alert.cancel();
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DialogState {
        self.inner.lock().unwrap().state
    }

    /// Whether the denied cue is currently visible.
    pub fn alert_visible(&self) -> bool {
        self.inner.lock().unwrap().alert.is_visible()
    }

    pub fn title(&self) -> String {
        self.inner.lock().unwrap().title.clone()
    }

    pub fn settings(&self) -> DialogSettings {
        self.inner.lock().unwrap().settings.clone()
    }

    /// Configured action buttons, for the renderer to bind.
    pub fn action_buttons(&self) -> Vec<ActionButton> {
        self.inner.lock().unwrap().action_buttons.clone()
    }

    async fn resolve_and_finish(&self, handler: Option<ActionHandler>) {
        let Some(handler) = handler else {
            self.finalize_and_destroy();
            return;
        };

        // The handler runs outside the lock; a synchronous panic propagates
        // and leaves the dialog in progress (known gap, caller responsibility).
        let response = handler();
        match resolve(response).await {
            Some(ActionOutcome::Success) => self.finalize_and_destroy(),
            Some(ActionOutcome::Denied) => self.trigger_alert(),
            None => debug!("Action resolution ended without an outcome; dialog stays in progress"),
        }
    }

    fn finalize_and_destroy(&self) {
        // Take ownership under the lock, tear down outside it: a hosted
        // instance may synchronously call back into the controller (dispose,
        // state queries) while it is being detached.
        let (child, hosted) = {
            let mut inner = self.inner.lock().unwrap();
            inner.state = DialogState::Destroyed;
            (inner.child.take(), inner.hosted.take())
        };
        if let Some(mut child) = child {
            child.teardown();
        }
        if let Some(mut hosted) = hosted {
            hosted.destroy();
        }
        info!("Dialog destroyed");
    }

    fn trigger_alert(&self) {
        let duration = {
            let mut inner = self.inner.lock().unwrap();

            if !inner.settings.notify_with_alert {
                inner.state = DialogState::Idle;
                debug!("Action denied; alert disabled, back to idle");
                return;
            }

            inner.state = DialogState::AlertShown;
            inner.alert.show();
            inner.settings.alert_duration
        };

        // Schedule outside the lock: a scheduler may run a zero-duration
        // callback inline on the calling thread.
        let shared: Weak<Mutex<Inner>> = Arc::downgrade(&self.inner);
        let timer = self.scheduler.after(
            duration,
            Box::new(move || {
                if let Some(inner) = shared.upgrade() {
                    let mut inner = inner.lock().unwrap();
                    inner.alert.reset();
                    inner.state = DialogState::Idle;
                    debug!("Alert cleared; dialog idle again");
                }
            }),
        );

        let mut inner = self.inner.lock().unwrap();
        // The callback may already have fired and reset the cycle; only a
        // still-showing alert keeps the handle.
        if inner.state == DialogState::AlertShown {
            inner.alert.arm(timer);
        }
        debug!("Action denied; alert shown for {:?}", duration);
    }
}
