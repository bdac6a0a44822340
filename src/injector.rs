//! Child content injection
//!
//! Thin pass-through: when the options carry a child descriptor, the injector
//! constructs the nested content through the injected factory and forwards the
//! same initialization contract into it. It holds no state of its own; the
//! created content is owned by the controller.

use crate::host::{ContentFactory, DialogContent};
use crate::types::{DialogOptions, DialogResult};
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct ChildContentInjector {
    factory: Arc<dyn ContentFactory>,
}

impl ChildContentInjector {
    pub fn new(factory: Arc<dyn ContentFactory>) -> Self {
        Self { factory }
    }

    /// Create the nested content named by `options.child_descriptor`, if any,
    /// and initialize it with the same options the dialog received.
    pub async fn inject(
        &self,
        options: &DialogOptions,
    ) -> DialogResult<Option<Box<dyn DialogContent>>> {
        let Some(descriptor) = &options.child_descriptor else {
            return Ok(None);
        };

        debug!("Injecting child content '{}'", descriptor);
        let mut content = self.factory.create(descriptor)?;
        content.dialog_init(options).await?;
        Ok(Some(content))
    }
}
