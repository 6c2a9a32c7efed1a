//! Progress reporting.
//!
//! The runner emits a [`ProgressEvent`] every `report_interval` generations
//! to a caller-supplied [`ProgressSink`]. Sinks are purely observational:
//! nothing they do feeds back into the search.

use std::sync::mpsc::Sender;

/// Best length found so far, observed after a generation completes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressEvent {
    /// Zero-based index of the generation just completed.
    pub generation: usize,
    /// Best tour length seen since the run started.
    pub best_length: f64,
}

/// Receives progress events from a run.
///
/// Implementations must return promptly.
pub trait ProgressSink {
    /// Called with each progress event, in generation order.
    fn on_progress(&mut self, event: ProgressEvent);
}

/// Discards every event.
impl ProgressSink for () {
    fn on_progress(&mut self, _event: ProgressEvent) {}
}

impl<F: FnMut(ProgressEvent)> ProgressSink for F {
    fn on_progress(&mut self, event: ProgressEvent) {
        self(event)
    }
}

/// Collects events in memory.
impl ProgressSink for Vec<ProgressEvent> {
    fn on_progress(&mut self, event: ProgressEvent) {
        self.push(event);
    }
}

/// Forwards events over an unbounded channel. A dropped receiver is ignored.
impl ProgressSink for Sender<ProgressEvent> {
    fn on_progress(&mut self, event: ProgressEvent) {
        let _ = self.send(event);
    }
}

/// Logs each event at `info` level through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ProgressSink for TracingSink {
    fn on_progress(&mut self, event: ProgressEvent) {
        tracing::info!(
            generation = event.generation,
            best_length = event.best_length,
            "generation {}: best length = {:.2}",
            event.generation,
            event.best_length
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn event(generation: usize) -> ProgressEvent {
        ProgressEvent {
            generation,
            best_length: 10.0 - generation as f64,
        }
    }

    #[test]
    fn test_vec_sink_collects() {
        let mut sink: Vec<ProgressEvent> = Vec::new();
        sink.on_progress(event(0));
        sink.on_progress(event(20));
        assert_eq!(sink, vec![event(0), event(20)]);
    }

    #[test]
    fn test_closure_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = |e: ProgressEvent| seen.push(e.generation);
            sink.on_progress(event(0));
            sink.on_progress(event(40));
        }
        assert_eq!(seen, vec![0, 40]);
    }

    #[test]
    fn test_channel_sink() {
        let (mut tx, rx) = mpsc::channel();
        tx.on_progress(event(3));
        assert_eq!(rx.recv().unwrap(), event(3));
    }

    #[test]
    fn test_channel_sink_ignores_dropped_receiver() {
        let (mut tx, rx) = mpsc::channel::<ProgressEvent>();
        drop(rx);
        tx.on_progress(event(0));
    }

    #[test]
    fn test_unit_and_tracing_sinks_accept_events() {
        ().on_progress(event(0));
        TracingSink.on_progress(event(0));
    }
}
