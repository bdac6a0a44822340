//! Action resolution
//!
//! A handler may answer in one of three shapes: an immediate boolean, a
//! deferred result, or an asynchronous stream. Each shape is normalized into
//! exactly one of success or denial so the controller never distinguishes
//! them. The shapes are an explicit sum type resolved by exhaustive match,
//! not runtime type inspection.

use futures::future::BoxFuture;
use futures::stream::BoxStream;
use futures::{Future, Stream, StreamExt};
use std::fmt;
use tracing::warn;

/// The result shape produced by an action handler.
pub enum HandlerResponse {
    /// Synchronous verdict: `true` succeeds, `false` is denied.
    Immediate(bool),
    /// Deferred verdict: fulfillment succeeds, rejection is denied
    /// (the error is discarded).
    Deferred(BoxFuture<'static, anyhow::Result<()>>),
    /// Stream verdict: the first emission succeeds, an error signal is denied.
    Stream(BoxStream<'static, anyhow::Result<()>>),
}

impl HandlerResponse {
    /// Wrap a future as a deferred verdict.
    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        Self::Deferred(Box::pin(future))
    }

    /// Wrap a stream as a stream verdict.
    pub fn stream<S>(stream: S) -> Self
    where
        S: Stream<Item = anyhow::Result<()>> + Send + 'static,
    {
        Self::Stream(Box::pin(stream))
    }
}

impl fmt::Debug for HandlerResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Immediate(value) => f.debug_tuple("Immediate").field(value).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
            Self::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

/// Outcome of resolving a handler response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action went through; the dialog is destroyed.
    Success,
    /// The action was refused; the alert cycle runs. Not an error.
    Denied,
}

/// Resolve a handler response into at most one outcome.
///
/// Returns `None` only when a stream completes without emitting; the caller
/// then stays in progress, matching a handler that never settles. A pending
/// future or stream suspends cooperatively here, so a second request observes
/// the in-progress state and is dropped.
pub async fn resolve(response: HandlerResponse) -> Option<ActionOutcome> {
    match response {
        HandlerResponse::Immediate(true) => Some(ActionOutcome::Success),
        HandlerResponse::Immediate(false) => Some(ActionOutcome::Denied),
        HandlerResponse::Deferred(future) => match future.await {
            Ok(()) => Some(ActionOutcome::Success),
            Err(err) => {
                warn!("Deferred action rejected (discarding error): {}", err);
                Some(ActionOutcome::Denied)
            }
        },
        HandlerResponse::Stream(mut stream) => match stream.next().await {
            Some(Ok(())) => Some(ActionOutcome::Success),
            Some(Err(err)) => {
                warn!("Action stream signalled an error (discarding): {}", err);
                Some(ActionOutcome::Denied)
            }
            None => None,
        },
    }
}
