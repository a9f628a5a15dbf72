//! # Core Type Definitions
//!
//! Identifier and callback types shared by every part of the emitter.
//!
//! - [`ListenerId`] - Handle returned by each registration, used for removal
//! - [`Listener`] - Shared callback invoked with a reference to the payload

use crate::error::ListenerError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Shared listener callback.
///
/// Listeners receive a reference to the emitted payload and report failure
/// through [`ListenerError`] instead of panicking. Keeping the callback behind
/// an `Arc` lets a caller hold on to it and later remove it by identity with
/// [`Emitter::off_listener`](crate::Emitter::off_listener).
pub type Listener<T> = Arc<dyn Fn(&T) -> Result<(), ListenerError> + Send + Sync>;

/// Unique handle for a single listener registration.
///
/// Every call to `on`, `once` or `on_all` produces a fresh id, so registering
/// the same closure twice yields two independent entries that must be removed
/// independently.
///
/// # Examples
///
/// ```rust
/// use event_emitter::{Emitter, ListenerId};
///
/// let emitter: Emitter<u32> = Emitter::new();
/// let first: ListenerId = emitter.on("tick", |_| Ok(()));
/// let second = emitter.on("tick", |_| Ok(()));
/// assert_ne!(first, second);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(pub Uuid);

impl ListenerId {
    /// Creates a new random listener id using UUID v4.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ListenerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Wraps a closure into a shareable [`Listener`].
///
/// Useful when the caller wants to keep the callback around for
/// identity-based removal.
pub fn listener<T, F>(callback: F) -> Listener<T>
where
    F: Fn(&T) -> Result<(), ListenerError> + Send + Sync + 'static,
{
    Arc::new(callback)
}
