/// Listener registration methods
use crate::error::ListenerError;
use crate::types::{Listener, ListenerId};
use super::core::{Emitter, Registration};
use compact_str::CompactString;
use std::sync::Arc;
use tracing::debug;

impl<T> Emitter<T> {
    /// Registers a listener for `event`.
    ///
    /// The listener is appended to the event's sequence, which is created on
    /// first use. Listeners fire in registration order. Registering the same
    /// closure twice creates two independent entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use event_emitter::Emitter;
    ///
    /// let emitter: Emitter<String> = Emitter::new();
    /// let id = emitter.on("chat", |message| {
    ///     println!("chat: {message}");
    ///     Ok(())
    /// });
    /// assert!(emitter.off("chat", id));
    /// ```
    pub fn on<F>(&self, event: &str, listener: F) -> ListenerId
    where
        F: Fn(&T) -> Result<(), ListenerError> + Send + Sync + 'static,
    {
        self.register(event, Arc::new(listener), false)
    }

    /// Registers an already shared listener for `event`.
    ///
    /// Keep a clone of the `Arc` to remove it later with
    /// [`off_listener`](Self::off_listener).
    pub fn on_listener(&self, event: &str, listener: Listener<T>) -> ListenerId {
        self.register(event, listener, false)
    }

    /// Registers a listener that fires at most once.
    ///
    /// The listener runs on the next `emit` of `event` after registration and
    /// is removed from the sequence before any later listener of that pass is
    /// reached. Re-entrant emits from inside the listener do not invoke it a
    /// second time.
    pub fn once<F>(&self, event: &str, listener: F) -> ListenerId
    where
        F: Fn(&T) -> Result<(), ListenerError> + Send + Sync + 'static,
    {
        self.register(event, Arc::new(listener), true)
    }

    /// Registers a listener that receives every emitted event.
    ///
    /// Global listeners always run after the event-specific listeners of the
    /// same `emit` call.
    pub fn on_all<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&T) -> Result<(), ListenerError> + Send + Sync + 'static,
    {
        let registration = Arc::new(Registration::new(Arc::new(listener), false));
        let id = registration.id;
        self.write_all_listeners().push(registration);

        debug!("Registered global listener {}", id);
        id
    }

    fn register(&self, event: &str, callback: Listener<T>, once: bool) -> ListenerId {
        let registration = Arc::new(Registration::new(callback, once));
        let id = registration.id;

        self.listeners
            .entry(CompactString::new(event))
            .or_default()
            .push(registration);

        debug!(
            "Registered {} listener {} for event '{}'",
            if once { "once" } else { "persistent" },
            id,
            event
        );
        id
    }
}
