/// Listener removal and introspection methods
use crate::types::{Listener, ListenerId};
use super::core::{Emitter, Registration};
use std::sync::Arc;
use tracing::debug;

impl<T> Emitter<T> {
    /// Removes the registration `id` from `event`'s sequence.
    ///
    /// The id is searched for explicitly; an unknown event or an id that is
    /// not registered under `event` leaves every sequence untouched. Returns
    /// whether a registration was removed.
    pub fn off(&self, event: &str, id: ListenerId) -> bool {
        self.detach(event, |registration| registration.id == id)
    }

    /// Removes the first registration under `event` whose callback is the
    /// same allocation as `listener`.
    ///
    /// Only the first match is removed; a listener registered twice must be
    /// removed twice.
    pub fn off_listener(&self, event: &str, listener: &Listener<T>) -> bool {
        self.detach(event, |registration| Arc::ptr_eq(&registration.callback, listener))
    }

    /// Removes every listener registered for `event`.
    ///
    /// Returns the number of listeners removed, zero for an unknown event.
    pub fn off_all(&self, event: &str) -> usize {
        let Some((_, sequence)) = self.listeners.remove(event) else {
            return 0;
        };

        for registration in &sequence {
            registration.deactivate();
        }

        debug!("Removed {} listeners for event '{}'", sequence.len(), event);
        sequence.len()
    }

    /// Removes every global listener. Per-event listeners are kept.
    pub fn off_all_listeners(&self) -> usize {
        let removed = std::mem::take(&mut *self.write_all_listeners());

        for registration in &removed {
            registration.deactivate();
        }

        debug!("Removed {} global listeners", removed.len());
        removed.len()
    }

    /// Removes the registration `id` wherever it lives, per-event or global.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let event = self
            .listeners
            .iter()
            .find(|entry| entry.value().iter().any(|registration| registration.id == id))
            .map(|entry| entry.key().clone());

        if let Some(event) = event {
            return self.off(&event, id);
        }

        let removed = {
            let mut all_listeners = self.write_all_listeners();
            all_listeners
                .iter()
                .position(|registration| registration.id == id)
                .map(|index| all_listeners.remove(index))
        };

        match removed {
            Some(registration) => {
                registration.deactivate();
                debug!("Removed global listener {}", id);
                true
            }
            None => false,
        }
    }

    /// Removes every per-event and global listener.
    pub fn clear(&self) {
        self.listeners.retain(|_, sequence| {
            for registration in sequence.iter() {
                registration.deactivate();
            }
            false
        });
        self.off_all_listeners();
    }

    /// Number of listeners currently registered for `event`.
    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners.get(event).map_or(0, |sequence| sequence.len())
    }

    /// Returns true if at least one listener is registered for `event`.
    pub fn has_listeners(&self, event: &str) -> bool {
        self.listener_count(event) > 0
    }

    /// Number of global listeners.
    pub fn all_listener_count(&self) -> usize {
        self.read_all_listeners().len()
    }

    /// Number of listeners across all events plus the global ones.
    pub fn total_listener_count(&self) -> usize {
        let per_event: usize = self.listeners.iter().map(|entry| entry.value().len()).sum();
        per_event + self.all_listener_count()
    }

    /// Names of the events that currently have listeners, in no particular order.
    pub fn event_names(&self) -> Vec<String> {
        self.listeners
            .iter()
            .map(|entry| entry.key().to_string())
            .collect()
    }

    /// Removes the first registration under `event` matching `matches`.
    ///
    /// Empty sequences are dropped from the map afterwards.
    pub(super) fn detach(&self, event: &str, matches: impl Fn(&Registration<T>) -> bool) -> bool {
        let removed = match self.listeners.get_mut(event) {
            Some(mut sequence) => sequence
                .iter()
                .position(|registration| matches(registration))
                .map(|index| sequence.remove(index)),
            None => None,
        };

        let Some(registration) = removed else {
            return false;
        };

        registration.deactivate();
        self.listeners.remove_if(event, |_, sequence| sequence.is_empty());

        debug!("Removed listener {} from event '{}'", registration.id, event);
        true
    }
}
