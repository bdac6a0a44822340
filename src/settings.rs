//! Dialog style and behavior settings
//!
//! Settings merge works the way the host supplies them: a partial
//! [`SettingsOverride`] is applied over the built-in defaults, later keys
//! override and unspecified keys retain their defaults.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Style and behavior configuration for the dialog chrome.
///
/// The class fields are opaque to this crate; the renderer collaborator
/// interprets them. Behavior is carried by `alert_duration` and
/// `notify_with_alert`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogSettings {
    pub overlay_class: String,
    pub modal_class: String,
    pub content_class: String,
    pub header_class: String,
    pub header_title_class: String,
    pub close_button_class: String,
    pub close_button_title: String,
    pub body_class: String,
    pub footer_class: String,
    pub alert_class: String,
    /// How long denied feedback stays visible.
    pub alert_duration: Duration,
    /// Whether a denial produces visual feedback at all.
    pub notify_with_alert: bool,
    pub button_class: String,
}

impl Default for DialogSettings {
    fn default() -> Self {
        Self {
            overlay_class: "modal-backdrop fade show".to_string(),
            modal_class: "fade show modal".to_string(),
            content_class: "modal-content".to_string(),
            header_class: "modal-header".to_string(),
            header_title_class: "modal-title".to_string(),
            close_button_class: "close glyphicon glyphicon-remove".to_string(),
            close_button_title: "CLOSE".to_string(),
            body_class: "modal-body".to_string(),
            footer_class: "modal-footer".to_string(),
            alert_class: "shake".to_string(),
            alert_duration: Duration::from_millis(250),
            notify_with_alert: true,
            button_class: "btn btn-primary".to_string(),
        }
    }
}

impl DialogSettings {
    /// Apply a partial override on top of these settings.
    pub fn merged(mut self, overrides: &SettingsOverride) -> Self {
        if let Some(v) = &overrides.overlay_class {
            self.overlay_class = v.clone();
        }
        if let Some(v) = &overrides.modal_class {
            self.modal_class = v.clone();
        }
        if let Some(v) = &overrides.content_class {
            self.content_class = v.clone();
        }
        if let Some(v) = &overrides.header_class {
            self.header_class = v.clone();
        }
        if let Some(v) = &overrides.header_title_class {
            self.header_title_class = v.clone();
        }
        if let Some(v) = &overrides.close_button_class {
            self.close_button_class = v.clone();
        }
        if let Some(v) = &overrides.close_button_title {
            self.close_button_title = v.clone();
        }
        if let Some(v) = &overrides.body_class {
            self.body_class = v.clone();
        }
        if let Some(v) = &overrides.footer_class {
            self.footer_class = v.clone();
        }
        if let Some(v) = &overrides.alert_class {
            self.alert_class = v.clone();
        }
        if let Some(v) = overrides.alert_duration {
            self.alert_duration = v;
        }
        if let Some(v) = overrides.notify_with_alert {
            self.notify_with_alert = v;
        }
        if let Some(v) = &overrides.button_class {
            self.button_class = v.clone();
        }
        self
    }
}

/// Partial settings supplied through [`crate::DialogOptions`].
///
/// Every field is optional; unset fields keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modal_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_title_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_button_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_button_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_duration: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_with_alert: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_class: Option<String>,
}

impl SettingsOverride {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alert_duration(mut self, duration: Duration) -> Self {
        self.alert_duration = Some(duration);
        self
    }

    pub fn with_notify_with_alert(mut self, notify: bool) -> Self {
        self.notify_with_alert = Some(notify);
        self
    }

    pub fn with_close_button_title(mut self, title: impl Into<String>) -> Self {
        self.close_button_title = Some(title.into());
        self
    }
}
