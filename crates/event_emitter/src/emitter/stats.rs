/// Statistics tracking for the emitter
use serde::{Deserialize, Serialize};

/// Cumulative emitter statistics for monitoring
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitterStats {
    /// Number of registered listeners (per-event and global) at snapshot time
    pub total_listeners: usize,
    /// Total number of `emit` calls since creation
    pub events_emitted: u64,
    /// Total number of listener invocations
    pub listeners_invoked: u64,
    /// Listener invocations that returned an error
    pub listener_failures: u64,
    /// Once listeners consumed by a dispatch
    pub once_listeners_fired: u64,
}

/// Outcome of a single `emit` call
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchReport {
    /// Listeners invoked during this call, including failed ones
    pub invoked: usize,
    /// Listeners that returned an error and were isolated
    pub failed: usize,
}

impl DispatchReport {
    /// Returns true if no listener was invoked.
    pub fn is_empty(&self) -> bool {
        self.invoked == 0
    }
}
