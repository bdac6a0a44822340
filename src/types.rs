//! Core dialog types
//!
//! This module defines the option and state types shared by the controller,
//! the resolver, and the host-side collaborators.

use crate::resolver::HandlerResponse;
use crate::settings::SettingsOverride;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Identifier describing the nested content to inject into the dialog body.
///
/// The factory collaborator decides what a descriptor maps to; the controller
/// only forwards it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentDescriptor(pub String);

impl ContentDescriptor {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContentDescriptor {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ContentDescriptor {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ContentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Zero-argument action handler, callable repeatedly (a denied button may be
/// pressed again once the dialog is idle).
pub type ActionHandler = Arc<dyn Fn() -> HandlerResponse + Send + Sync>;

/// A user-facing action bound to a handler.
///
/// Resolving it may succeed (the dialog is destroyed) or be denied (the alert
/// cycle runs). An absent handler means unconditional success.
#[derive(Clone)]
pub struct ActionButton {
    /// Button label.
    pub text: String,
    /// Handler invoked when the button is activated.
    pub on_action: Option<ActionHandler>,
    /// Style class overriding the default button style.
    pub button_class: Option<String>,
}

impl ActionButton {
    /// Create a button bound to a handler.
    pub fn new(text: impl Into<String>, on_action: ActionHandler) -> Self {
        Self {
            text: text.into(),
            on_action: Some(on_action),
            button_class: None,
        }
    }

    /// Create a button with no handler; activating it always succeeds.
    pub fn unconditional(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            on_action: None,
            button_class: None,
        }
    }

    pub fn with_button_class(mut self, class: impl Into<String>) -> Self {
        self.button_class = Some(class.into());
        self
    }
}

impl fmt::Debug for ActionButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionButton")
            .field("text", &self.text)
            .field("on_action", &self.on_action.as_ref().map(|_| "<handler>"))
            .field("button_class", &self.button_class)
            .finish()
    }
}

/// Dialog configuration passed to [`crate::DialogController::init`].
///
/// Cloneable so the controller can forward the same options into nested
/// content; handlers are reference-counted.
///
/// Invariant: `on_close` and a non-empty `action_buttons` are mutually
/// exclusive. A dialog with explicit actions can only be resolved through
/// those actions, never an implicit close.
#[derive(Clone, Default)]
pub struct DialogOptions {
    /// Dialog title (optional).
    pub title: Option<String>,
    /// Handler run when the overlay or the header close control is activated.
    pub on_close: Option<ActionHandler>,
    /// Explicit action buttons; one per user-facing action.
    pub action_buttons: Vec<ActionButton>,
    /// Nested content to inject into the dialog body.
    pub child_descriptor: Option<ContentDescriptor>,
    /// Partial settings merged over the built-in defaults.
    pub settings: Option<SettingsOverride>,
}

impl DialogOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_on_close(mut self, handler: ActionHandler) -> Self {
        self.on_close = Some(handler);
        self
    }

    pub fn with_action_button(mut self, button: ActionButton) -> Self {
        self.action_buttons.push(button);
        self
    }

    pub fn with_child_descriptor(mut self, descriptor: impl Into<ContentDescriptor>) -> Self {
        self.child_descriptor = Some(descriptor.into());
        self
    }

    pub fn with_settings(mut self, settings: SettingsOverride) -> Self {
        self.settings = Some(settings);
        self
    }
}

impl fmt::Debug for DialogOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogOptions")
            .field("title", &self.title)
            .field("on_close", &self.on_close.as_ref().map(|_| "<handler>"))
            .field("action_buttons", &self.action_buttons)
            .field("child_descriptor", &self.child_descriptor)
            .field("settings", &self.settings)
            .finish()
    }
}

/// Dialog lifecycle states; exactly one live value per controller instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    /// Ready to accept a close or action request.
    Idle,
    /// An action is resolving; further requests are dropped.
    InProgress,
    /// Denied feedback is visible; cleared by the alert timer.
    AlertShown,
    /// The hosted instance has been destroyed. Terminal.
    Destroyed,
}

impl Default for DialogState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Result type for dialog operations.
pub type DialogResult<T> = std::result::Result<T, DialogError>;

/// Dialog-specific error types.
///
/// Denial of an action is not an error; it is routed through the alert cycle.
#[derive(Debug, thiserror::Error)]
pub enum DialogError {
    #[error("onClose handler and action buttons are not allowed to be defined on the same dialog")]
    ConflictingHandlers,

    #[error("dialog has already been initialized")]
    AlreadyInitialized,

    #[error("dialog has not been initialized")]
    NotInitialized,

    #[error("failed to create child content: {0}")]
    ContentCreation(#[from] anyhow::Error),
}
