//! Emitter configuration.
//!
//! Controls how listener failures are handled during dispatch and whether
//! each dispatch is traced. The struct is serde-friendly so embedding
//! applications can keep it in their own TOML configuration.

use serde::{Deserialize, Serialize};

/// What `emit` does when a listener returns an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop dispatch at the first failing listener and return the error.
    #[default]
    Propagate,
    /// Log the failure, count it, and keep dispatching to remaining listeners.
    Isolate,
}

impl FailurePolicy {
    /// Returns the lowercase name used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailurePolicy::Propagate => "propagate",
            FailurePolicy::Isolate => "isolate",
        }
    }
}

fn default_trace_dispatch() -> bool {
    false
}

/// Runtime settings for an [`Emitter`](crate::Emitter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitterConfig {
    /// Listener failure handling
    #[serde(default)]
    pub failure_policy: FailurePolicy,
    /// Emit a `trace!` record for every listener invocation
    #[serde(default = "default_trace_dispatch")]
    pub trace_dispatch: bool,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::default(),
            trace_dispatch: default_trace_dispatch(),
        }
    }
}

impl EmitterConfig {
    /// Sets the listener failure policy.
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Enables or disables per-invocation dispatch tracing.
    pub fn with_trace_dispatch(mut self, enabled: bool) -> Self {
        self.trace_dispatch = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_propagates() {
        let config = EmitterConfig::default();
        assert_eq!(config.failure_policy, FailurePolicy::Propagate);
        assert!(!config.trace_dispatch);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: EmitterConfig = serde_json::from_str(r#"{"failure_policy":"isolate"}"#)
            .expect("config should parse");
        assert_eq!(config.failure_policy, FailurePolicy::Isolate);
        assert!(!config.trace_dispatch);

        let empty: EmitterConfig = serde_json::from_str("{}").expect("empty config should parse");
        assert_eq!(empty, EmitterConfig::default());
    }

    #[test]
    fn test_builder_setters() {
        let config = EmitterConfig::default()
            .with_failure_policy(FailurePolicy::Isolate)
            .with_trace_dispatch(true);
        assert_eq!(config.failure_policy.as_str(), "isolate");
        assert!(config.trace_dispatch);
    }
}
