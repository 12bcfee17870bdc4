//! EventSink implementations.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::LiftEvent;
use crate::ports::EventSink;

/// Drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn emit(&self, _event: LiftEvent) {}
}

/// Logs events through `tracing`.
///
/// Admissions and completed trips at `info`, floor steps at `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: LiftEvent) {
        match event {
            LiftEvent::RequestAdmitted { unit, request, .. } => tracing::info!(
                %unit,
                request = %request.id(),
                source = request.source_floor(),
                destination = request.destination_floor(),
                "request admitted"
            ),
            LiftEvent::FloorReached {
                unit,
                floor,
                direction,
                ..
            } => tracing::debug!(%unit, floor, ?direction, "floor reached"),
            LiftEvent::TripCompleted {
                unit,
                request,
                floor,
                ..
            } => tracing::info!(%unit, request = %request.id(), floor, "trip completed"),
        }
    }
}

/// Forwards events into an unbounded channel.
///
/// A dropped receiver is not an error: events are then discarded.
#[derive(Debug, Clone)]
pub struct ChannelEventSink {
    tx: mpsc::UnboundedSender<LiftEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::UnboundedSender<LiftEvent>) -> Self {
        Self { tx }
    }

    /// Convenience: sink plus the receiving end.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<LiftEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: LiftEvent) {
        // ignore send error: receiver may already be dropped
        let _ = self.tx.send(event);
    }
}

/// Sends each event to every inner sink, in order.
#[derive(Clone, Default)]
pub struct FanoutEventSink {
    sinks: Vec<Arc<dyn EventSink>>,
}

impl FanoutEventSink {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sinks.push(sink);
        self
    }
}

impl EventSink for FanoutEventSink {
    fn emit(&self, event: LiftEvent) {
        for sink in &self.sinks {
            sink.emit(event.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Direction, UnitId};
    use chrono::{TimeZone, Utc};

    fn floor_event(floor: i32) -> LiftEvent {
        LiftEvent::FloorReached {
            at: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
            unit: UnitId::new(1),
            floor,
            direction: Direction::Up,
        }
    }

    #[test]
    fn channel_sink_forwards_in_order() {
        let (sink, mut rx) = ChannelEventSink::channel();
        sink.emit(floor_event(2));
        sink.emit(floor_event(3));

        assert_eq!(rx.try_recv().unwrap(), floor_event(2));
        assert_eq!(rx.try_recv().unwrap(), floor_event(3));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn channel_sink_ignores_dropped_receiver() {
        let (sink, rx) = ChannelEventSink::channel();
        drop(rx);
        sink.emit(floor_event(2));
    }

    #[test]
    fn fanout_reaches_every_sink() {
        let (a, mut rx_a) = ChannelEventSink::channel();
        let (b, mut rx_b) = ChannelEventSink::channel();
        let fanout = FanoutEventSink::new()
            .with(Arc::new(a))
            .with(Arc::new(NoopEventSink))
            .with(Arc::new(b));

        fanout.emit(floor_event(4));

        assert_eq!(rx_a.try_recv().unwrap(), floor_event(4));
        assert_eq!(rx_b.try_recv().unwrap(), floor_event(4));
    }
}
