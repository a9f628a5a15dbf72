//! Core application that wires listeners onto an emitter and drives it.

use crate::config::AppConfig;
use crate::error::AppError;
use event_emitter::{create_shared_emitter, Emitter, EmitterStats, ListenerError};
use serde::Serialize;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info};

/// Event name whose listener always fails, for exercising the failure policy.
pub const FAILING_EVENT: &str = "fail";

/// Payload delivered for each emitted event.
#[derive(Debug, Clone, Serialize)]
pub struct EmittedEvent {
    /// Position of the event on the command line
    pub sequence: usize,
    /// Name the event was emitted under
    pub name: String,
}

/// Summary of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Names seen by the global listener, in delivery order
    pub delivered: Vec<String>,
    /// Name of the first event, seen by the once listener
    pub first_event: Option<String>,
    pub stats: EmitterStats,
}

/// Emitter driver.
///
/// Registers a global listener that records every event, a once listener
/// that remembers the first event, and a listener on [`FAILING_EVENT`] that
/// always fails.
pub struct Application {
    emitter: Arc<Emitter<EmittedEvent>>,
    delivered: Arc<Mutex<Vec<String>>>,
    first_event: Arc<Mutex<Option<String>>>,
}

impl Application {
    /// Creates the application and registers its listeners.
    pub fn new(config: &AppConfig, events: &[String]) -> Self {
        let emitter = create_shared_emitter(config.emitter.clone());
        let delivered = Arc::new(Mutex::new(Vec::new()));
        let first_event = Arc::new(Mutex::new(None));

        let sink = delivered.clone();
        emitter.on_all(move |event: &EmittedEvent| {
            info!("Event #{} '{}' delivered", event.sequence, event.name);
            sink.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(event.name.clone());
            Ok(())
        });

        if let Some(first) = events.first() {
            let slot = first_event.clone();
            emitter.once(first, move |event: &EmittedEvent| {
                *slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(event.name.clone());
                Ok(())
            });
        }

        emitter.on(FAILING_EVENT, |event: &EmittedEvent| {
            Err(ListenerError::failed(format!(
                "event #{} was asked to fail",
                event.sequence
            )))
        });

        debug!("Registered {} listeners", emitter.total_listener_count());

        Self {
            emitter,
            delivered,
            first_event,
        }
    }

    /// Emits each event in order and returns the run summary.
    pub fn run(&self, events: &[String]) -> Result<RunSummary, AppError> {
        for (sequence, name) in events.iter().enumerate() {
            let payload = EmittedEvent {
                sequence,
                name: name.clone(),
            };
            let report = self.emitter.emit(name, &payload)?;
            debug!(
                "Emitted '{}': {} invoked, {} failed",
                name, report.invoked, report.failed
            );
        }

        Ok(RunSummary {
            delivered: self
                .delivered
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone(),
            first_event: self
                .first_event
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone(),
            stats: self.emitter.stats(),
        })
    }
}
