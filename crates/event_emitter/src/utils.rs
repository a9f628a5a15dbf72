//! # Utility Functions
//!
//! Convenience constructors for embedding applications.

use crate::config::EmitterConfig;
use crate::emitter::Emitter;
use std::sync::Arc;

/// Creates an emitter wrapped in an `Arc`.
///
/// Listeners that need to register, remove, or emit from inside a dispatch
/// capture a clone of this handle.
///
/// # Examples
///
/// ```rust
/// use event_emitter::{create_shared_emitter, EmitterConfig};
///
/// let emitter = create_shared_emitter::<u8>(EmitterConfig::default());
/// let inner = emitter.clone();
/// emitter.on("ping", move |_| {
///     inner.off_all("ping");
///     Ok(())
/// });
///
/// emitter.emit("ping", &1)?;
/// assert!(!emitter.has_listeners("ping"));
/// # Ok::<(), event_emitter::EmitterError>(())
/// ```
pub fn create_shared_emitter<T>(config: EmitterConfig) -> Arc<Emitter<T>> {
    Arc::new(Emitter::with_config(config))
}
