//! Error types for listener callbacks and event dispatch.

use crate::types::ListenerId;

/// Failure reported by a listener callback.
#[derive(Debug, thiserror::Error)]
pub enum ListenerError {
    /// The listener rejected or could not process the payload
    #[error("Listener failed: {0}")]
    Failed(String),

    /// Any other error raised while running the listener
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl ListenerError {
    /// Convenience constructor for [`ListenerError::Failed`].
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// Errors surfaced by [`Emitter::emit`](crate::Emitter::emit).
///
/// Registration and removal never fail; the only error path is a listener
/// returning `Err` while the emitter runs with
/// [`FailurePolicy::Propagate`](crate::FailurePolicy::Propagate).
#[derive(Debug, thiserror::Error)]
pub enum EmitterError {
    /// A listener failed and the remaining dispatch for this call was skipped
    #[error("Listener {listener} for event '{event}' failed: {source}")]
    ListenerFailed {
        event: String,
        listener: ListenerId,
        #[source]
        source: ListenerError,
    },
}

impl EmitterError {
    /// Returns the id of the listener that caused the failure.
    pub fn listener(&self) -> ListenerId {
        match self {
            EmitterError::ListenerFailed { listener, .. } => *listener,
        }
    }

    /// Returns the event name that was being dispatched.
    pub fn event(&self) -> &str {
        match self {
            EmitterError::ListenerFailed { event, .. } => event,
        }
    }
}
