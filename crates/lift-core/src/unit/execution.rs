//! Per-unit execution loop.
//!
//! ```text
//! loop:
//!   Idle   -- take_next() returns -->  Moving
//!   Moving -- floor == destination --> Idle
//! ```
//!
//! The unit goes from its current floor straight to the request's
//! destination. The source floor is not visited.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use super::Unit;
use crate::domain::{Direction, LiftEvent, Request, UnitState};
use crate::ports::{Clock, EventSink};

/// Outcome of one trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trip {
    Completed,
    Interrupted,
}

/// Drain `unit`'s queue until shutdown is signalled (or the sender is dropped).
///
/// Shutdown is observed while idle and between floor steps; an in-flight trip
/// is abandoned, not finished.
pub(crate) async fn run(
    unit: Arc<Unit>,
    floor_travel: Duration,
    events: Arc<dyn EventSink>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    tracing::debug!(unit = %unit.id(), floor = unit.floor(), "worker started");

    loop {
        if *shutdown_rx.borrow() {
            break;
        }

        let request = tokio::select! {
            changed = shutdown_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                continue;
            }
            request = unit.queue().take_next() => request,
        };

        if travel(&unit, request, floor_travel, events.as_ref(), &mut shutdown_rx).await
            == Trip::Interrupted
        {
            break;
        }
    }

    unit.position().set_state(UnitState::Idle);
    tracing::debug!(unit = %unit.id(), floor = unit.floor(), "worker stopped");
}

async fn travel(
    unit: &Unit,
    request: Request,
    floor_travel: Duration,
    events: &dyn EventSink,
    shutdown_rx: &mut watch::Receiver<bool>,
) -> Trip {
    let position = unit.position();
    let destination = request.destination_floor();

    if let Some(direction) = Direction::between(position.floor(), destination) {
        position.set_state(UnitState::Moving);
        position.set_direction(direction);

        while position.floor() != destination {
            tokio::select! {
                // only `true` is ever sent; any change (or a dropped sender) means stop
                _ = shutdown_rx.changed() => return Trip::Interrupted,
                _ = tokio::time::sleep(floor_travel) => {}
            }

            let floor = position.floor() + direction.step();
            position.set_floor(floor);
            events.emit(LiftEvent::FloorReached {
                at: unit.clock().now(),
                unit: unit.id(),
                floor,
                direction,
            });
        }
    }

    position.set_state(UnitState::Idle);
    events.emit(LiftEvent::TripCompleted {
        at: unit.clock().now(),
        unit: unit.id(),
        request,
        floor: position.floor(),
    });
    Trip::Completed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Floor, RequestId, UnitId};
    use crate::impls::ChannelEventSink;
    use crate::ports::FixedClock;
    use chrono::{DateTime, TimeZone, Utc};
    use tokio::sync::mpsc;
    use ulid::Ulid;

    const TRAVEL: Duration = Duration::from_millis(100);

    fn request(source: Floor, destination: Floor) -> Request {
        Request::new(RequestId::from_ulid(Ulid::new()), source, destination)
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    struct Harness {
        unit: Arc<Unit>,
        rx: mpsc::UnboundedReceiver<LiftEvent>,
        shutdown_tx: watch::Sender<bool>,
        join: tokio::task::JoinHandle<()>,
    }

    fn start(initial_floor: Floor, capacity: usize) -> Harness {
        let (sink, rx) = ChannelEventSink::channel();
        let events: Arc<dyn EventSink> = Arc::new(sink);
        let unit = Arc::new(Unit::new(
            UnitId::new(1),
            capacity,
            initial_floor,
            Arc::clone(&events),
            Arc::new(FixedClock::new(noon())),
        ));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let join = tokio::spawn(run(Arc::clone(&unit), TRAVEL, events, shutdown_rx));
        Harness {
            unit,
            rx,
            shutdown_tx,
            join,
        }
    }

    /// Floors reached until the next `TripCompleted`.
    async fn floors_of_next_trip(rx: &mut mpsc::UnboundedReceiver<LiftEvent>) -> Vec<Floor> {
        let mut floors = Vec::new();
        while let Some(event) = rx.recv().await {
            match event {
                LiftEvent::FloorReached { floor, .. } => floors.push(floor),
                LiftEvent::TripCompleted { .. } => return floors,
                LiftEvent::RequestAdmitted { .. } => {}
            }
        }
        panic!("event stream ended before trip completed");
    }

    #[tokio::test(start_paused = true)]
    async fn travels_up_to_destination_ignoring_source() {
        let mut h = start(1, 5);
        h.unit.add_request(request(10, 12)).unwrap();

        let floors = floors_of_next_trip(&mut h.rx).await;

        assert_eq!(floors, (2..=12).collect::<Vec<_>>());
        assert_eq!(h.unit.floor(), 12);
        assert_eq!(h.unit.direction(), Direction::Up);
        assert_eq!(h.unit.state(), UnitState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn travels_down_and_sets_direction() {
        let mut h = start(9, 5);
        h.unit.add_request(request(9, 6)).unwrap();

        let floors = floors_of_next_trip(&mut h.rx).await;

        assert_eq!(floors, vec![8, 7, 6]);
        assert_eq!(h.unit.direction(), Direction::Down);
    }

    #[tokio::test(start_paused = true)]
    async fn same_floor_is_an_immediate_trip() {
        let mut h = start(4, 5);
        h.unit.add_request(request(2, 4)).unwrap();

        let floors = floors_of_next_trip(&mut h.rx).await;

        assert!(floors.is_empty());
        assert_eq!(h.unit.floor(), 4);
        // no movement, direction untouched
        assert_eq!(h.unit.direction(), Direction::Up);
    }

    #[tokio::test(start_paused = true)]
    async fn queued_requests_run_in_order_from_previous_destination() {
        let mut h = start(1, 5);
        h.unit.add_request(request(1, 4)).unwrap();
        h.unit.add_request(request(4, 2)).unwrap();

        assert_eq!(floors_of_next_trip(&mut h.rx).await, vec![2, 3, 4]);
        assert_eq!(floors_of_next_trip(&mut h.rx).await, vec![3, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn each_floor_takes_one_travel_unit() {
        let mut h = start(1, 5);
        let started = tokio::time::Instant::now();
        h.unit.add_request(request(1, 4)).unwrap();

        floors_of_next_trip(&mut h.rx).await;

        let elapsed = started.elapsed();
        assert!(elapsed >= TRAVEL * 3);
        assert!(elapsed < TRAVEL * 4);
    }

    #[tokio::test(start_paused = true)]
    async fn events_are_stamped_by_the_unit_clock() {
        let mut h = start(1, 5);
        h.unit.add_request(request(1, 3)).unwrap();

        let mut stamped = 0;
        while let Some(event) = h.rx.recv().await {
            assert_eq!(event.at(), noon());
            stamped += 1;
            if matches!(event, LiftEvent::TripCompleted { .. }) {
                break;
            }
        }
        // admitted + two floors + completed
        assert_eq!(stamped, 4);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_interrupts_trip_in_flight() {
        let mut h = start(1, 5);
        h.unit.add_request(request(1, 20)).unwrap();

        // admitted + two floors
        for _ in 0..3 {
            h.rx.recv().await.unwrap();
        }
        h.shutdown_tx.send(true).unwrap();
        h.join.await.unwrap();

        assert_eq!(h.unit.floor(), 3);
        assert_eq!(h.unit.state(), UnitState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn idle_worker_stops_when_sender_dropped() {
        let h = start(1, 5);
        drop(h.shutdown_tx);

        tokio::time::timeout(Duration::from_secs(1), h.join)
            .await
            .unwrap()
            .unwrap();
    }
}
