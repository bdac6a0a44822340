//! Host collaborator capabilities
//!
//! The controller does not know how display units are attached to the view
//! tree. It consumes these capabilities, passed in explicitly, so the state
//! machine is testable without a host framework.

use crate::types::{ContentDescriptor, DialogOptions, DialogResult};
use async_trait::async_trait;

/// The dialog's own display unit.
///
/// Destroying it detaches it from the host view tree. The controller is its
/// exclusive owner; no other component may destroy it.
pub trait HostedInstance: Send {
    fn destroy(&mut self);
}

/// Capability implemented by any content that speaks the dialog
/// initialization contract.
///
/// The controller forwards the exact options it received, so nested content
/// sees the same title, handlers, and settings as the dialog itself.
#[async_trait]
pub trait DialogContent: Send {
    /// Initialize with the dialog options.
    async fn dialog_init(&mut self, options: &DialogOptions) -> DialogResult<()>;

    /// Teardown cascaded by the owning controller when the dialog is
    /// destroyed. Default is a no-op for stateless content.
    fn teardown(&mut self) {}
}

/// Factory capable of instantiating nested content from a descriptor.
pub trait ContentFactory: Send + Sync {
    fn create(&self, descriptor: &ContentDescriptor) -> anyhow::Result<Box<dyn DialogContent>>;
}
