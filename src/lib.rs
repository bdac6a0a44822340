//! Lifecycle management for a single hosted modal dialog
//!
//! This crate governs exactly one dialog's own lifecycle: opening it, optionally
//! delegating initialization into nested content, resolving a user-triggered
//! action that may complete synchronously or asynchronously, and giving
//! transient "denied" feedback when an action is rejected.
//!
//! Rendering, view-tree attachment, and the launcher that constructs the hosted
//! instance are external collaborators, consumed through the traits in [`host`].
//! Timers go through the injected [`scheduler::Scheduler`] so the alert cycle
//! can be driven deterministically in tests.

pub mod alert;
pub mod controller;
pub mod host;
pub mod injector;
pub mod resolver;
pub mod scheduler;
pub mod settings;
pub mod types;

pub use alert::AlertFeedback;
pub use controller::DialogController;
pub use host::{ContentFactory, DialogContent, HostedInstance};
pub use injector::ChildContentInjector;
pub use resolver::{resolve, ActionOutcome, HandlerResponse};
pub use scheduler::{ManualScheduler, Scheduler, TimerHandle, TokioScheduler};
pub use settings::{DialogSettings, SettingsOverride};
pub use types::*;
