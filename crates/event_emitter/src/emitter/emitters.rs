/// Event emission methods
use crate::config::FailurePolicy;
use crate::error::EmitterError;
use super::core::{Emitter, Sequence};
use super::stats::DispatchReport;
use tracing::{trace, warn};

impl<T> Emitter<T> {
    /// Emits `data` to every listener of `event`, then to every global listener.
    ///
    /// Both sequences are snapshotted before the first listener runs, so
    /// listeners added during this call only fire on a later `emit`. A
    /// listener removed during this call, including a once listener that
    /// already fired, is skipped.
    ///
    /// With [`FailurePolicy::Propagate`] the first listener error aborts the
    /// rest of the dispatch and is returned. With [`FailurePolicy::Isolate`]
    /// failures are logged and counted in the returned [`DispatchReport`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use event_emitter::Emitter;
    ///
    /// let emitter: Emitter<u32> = Emitter::new();
    /// emitter.on("score", |points| {
    ///     assert_eq!(*points, 10);
    ///     Ok(())
    /// });
    ///
    /// let report = emitter.emit("score", &10)?;
    /// assert_eq!(report.invoked, 1);
    ///
    /// // Nobody listens to this one; that is not an error.
    /// assert!(emitter.emit("unknown", &0)?.is_empty());
    /// # Ok::<(), event_emitter::EmitterError>(())
    /// ```
    pub fn emit(&self, event: &str, data: &T) -> Result<DispatchReport, EmitterError> {
        self.update_stats(|stats| stats.events_emitted += 1);

        let mut report = DispatchReport::default();

        let snapshot = self
            .listeners
            .get(event)
            .map(|sequence| sequence.value().clone())
            .unwrap_or_default();
        let global = self.read_all_listeners().clone();

        self.dispatch(event, &snapshot, data, &mut report)?;
        self.dispatch(event, &global, data, &mut report)?;

        Ok(report)
    }

    fn dispatch(
        &self,
        event: &str,
        sequence: &Sequence<T>,
        data: &T,
        report: &mut DispatchReport,
    ) -> Result<(), EmitterError> {
        for registration in sequence {
            if !registration.claim() {
                continue;
            }

            if registration.once {
                self.detach(event, |candidate| candidate.id == registration.id);
                self.update_stats(|stats| stats.once_listeners_fired += 1);
            }

            if self.config.trace_dispatch {
                trace!("Dispatching '{}' to listener {}", event, registration.id);
            }

            report.invoked += 1;
            let result = (registration.callback)(data);
            self.update_stats(|stats| {
                stats.listeners_invoked += 1;
                if result.is_err() {
                    stats.listener_failures += 1;
                }
            });

            let Err(source) = result else {
                continue;
            };

            match self.config.failure_policy {
                FailurePolicy::Propagate => {
                    return Err(EmitterError::ListenerFailed {
                        event: event.to_string(),
                        listener: registration.id,
                        source,
                    });
                }
                FailurePolicy::Isolate => {
                    warn!(
                        "Listener {} for event '{}' failed: {}",
                        registration.id, event, source
                    );
                    report.failed += 1;
                }
            }
        }

        Ok(())
    }
}
