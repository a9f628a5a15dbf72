/// Core Emitter implementation
use crate::config::EmitterConfig;
use crate::types::{Listener, ListenerId};
use super::stats::EmitterStats;
use compact_str::CompactString;
use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A single entry in a listener sequence.
///
/// The `active` flag is cleared the moment the registration is removed, so a
/// dispatch pass working from an older snapshot can tell that it must skip it.
pub(super) struct Registration<T> {
    pub(super) id: ListenerId,
    pub(super) callback: Listener<T>,
    pub(super) once: bool,
    active: AtomicBool,
}

impl<T> Registration<T> {
    pub(super) fn new(callback: Listener<T>, once: bool) -> Self {
        Self {
            id: ListenerId::new(),
            callback,
            once,
            active: AtomicBool::new(true),
        }
    }

    /// Marks the registration as removed.
    pub(super) fn deactivate(&self) {
        self.active.store(false, Ordering::SeqCst);
    }

    /// Returns whether the registration may be invoked now.
    ///
    /// Once registrations are consumed by the first successful claim.
    pub(super) fn claim(&self) -> bool {
        if self.once {
            self.active.swap(false, Ordering::SeqCst)
        } else {
            self.active.load(Ordering::SeqCst)
        }
    }
}

pub(super) type Sequence<T> = Vec<Arc<Registration<T>>>;

/// Typed synchronous event emitter.
///
/// Maps event names to ordered listener sequences and keeps a separate
/// sequence of listeners that receive every event. All methods take `&self`
/// and no internal lock is held while a listener runs, so listeners may
/// register, remove, or emit re-entrantly.
///
/// # Examples
///
/// ```rust
/// use event_emitter::Emitter;
/// use std::sync::{Arc, Mutex};
///
/// let emitter = Emitter::new();
/// let seen = Arc::new(Mutex::new(Vec::new()));
///
/// let sink = seen.clone();
/// emitter.on("x", move |value: &i32| {
///     sink.lock().unwrap().push(*value);
///     Ok(())
/// });
///
/// emitter.emit("x", &5)?;
/// assert_eq!(*seen.lock().unwrap(), vec![5]);
/// # Ok::<(), event_emitter::EmitterError>(())
/// ```
pub struct Emitter<T> {
    /// Per-event listener sequences keyed by event name
    pub(super) listeners: DashMap<CompactString, Sequence<T>>,
    /// Listeners invoked for every emitted event, after the per-event ones
    pub(super) all_listeners: RwLock<Sequence<T>>,
    pub(super) config: EmitterConfig,
    pub(super) stats: RwLock<EmitterStats>,
}

impl<T> std::fmt::Debug for Emitter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Emitter")
            .field("events", &self.listeners.len())
            .field("all_listeners", &self.read_all_listeners().len())
            .field("config", &self.config)
            .finish()
    }
}

impl<T> Emitter<T> {
    /// Creates a new emitter with no registered listeners and default config.
    pub fn new() -> Self {
        Self::with_config(EmitterConfig::default())
    }

    /// Creates a new emitter using the given configuration.
    pub fn with_config(config: EmitterConfig) -> Self {
        Self {
            listeners: DashMap::new(),
            all_listeners: RwLock::new(Vec::new()),
            config,
            stats: RwLock::new(EmitterStats::default()),
        }
    }

    /// Returns the active configuration.
    #[inline]
    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Returns a snapshot of the dispatch statistics.
    pub fn stats(&self) -> EmitterStats {
        let mut stats = self
            .stats
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        stats.total_listeners = self.total_listener_count();
        stats
    }

    pub(super) fn read_all_listeners(&self) -> RwLockReadGuard<'_, Sequence<T>> {
        self.all_listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub(super) fn write_all_listeners(&self) -> RwLockWriteGuard<'_, Sequence<T>> {
        self.all_listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub(super) fn update_stats(&self, update: impl FnOnce(&mut EmitterStats)) {
        let mut stats = self.stats.write().unwrap_or_else(PoisonError::into_inner);
        update(&mut stats);
    }
}

impl<T> Default for Emitter<T> {
    fn default() -> Self {
        Self::new()
    }
}
