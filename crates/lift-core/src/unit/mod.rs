//! Unit (elevator car): admission queue, position state and execution loop.

mod execution;
mod position;
mod queue;

pub(crate) use execution::run;
pub use position::UnitPosition;
pub use queue::AdmissionQueue;

use std::sync::Arc;

use crate::domain::{AdmissionRejected, Direction, Floor, Request, UnitId, UnitState};
use crate::ports::{Clock, EventSink, UnitSnapshot};

/// One unit. Shared (`Arc`) between the dispatcher and the unit's worker.
pub struct Unit {
    id: UnitId,
    queue: AdmissionQueue,
    position: UnitPosition,
    clock: Arc<dyn Clock>,
}

impl Unit {
    pub fn new(
        id: UnitId,
        capacity: usize,
        initial_floor: Floor,
        events: Arc<dyn EventSink>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            id,
            queue: AdmissionQueue::new(id, capacity, events, Arc::clone(&clock)),
            position: UnitPosition::new(initial_floor),
            clock,
        }
    }

    pub fn id(&self) -> UnitId {
        self.id
    }

    /// Non-blocking admission into this unit's queue.
    pub fn add_request(&self, request: Request) -> Result<(), AdmissionRejected> {
        self.queue.add_request(request)
    }

    /// Last-known floor (relaxed read).
    pub fn floor(&self) -> Floor {
        self.position.floor()
    }

    pub fn direction(&self) -> Direction {
        self.position.direction()
    }

    pub fn state(&self) -> UnitState {
        self.position.state()
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    pub fn capacity(&self) -> usize {
        self.queue.capacity()
    }

    pub fn snapshot(&self) -> UnitSnapshot {
        UnitSnapshot {
            id: self.id,
            floor: self.floor(),
        }
    }

    pub(crate) fn queue(&self) -> &AdmissionQueue {
        &self.queue
    }

    pub(crate) fn position(&self) -> &UnitPosition {
        &self.position
    }

    pub(crate) fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}
