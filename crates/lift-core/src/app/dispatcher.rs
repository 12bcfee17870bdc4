//! Dispatcher - entry point for new requests and owner of the units.

use std::sync::Arc;

use crate::config::LiftConfig;
use crate::domain::{Assignment, DispatchError, Floor, FloorRange, Request, UnitId};
use crate::ports::{AssignmentStrategy, IdGenerator, UnitSnapshot};
use crate::unit::Unit;

use super::{BuildError, DispatcherBuilder, DispatcherStatus, UnitStatus, WorkerGroup};

/// Owns the units and their workers.
///
/// Explicitly constructed and passed around; several independent dispatchers
/// can live in one process. Dropping a dispatcher stops its workers without
/// waiting for them; `shutdown()` stops and joins.
pub struct Dispatcher {
    units: Vec<Arc<Unit>>,
    floors: FloorRange,
    strategy: Box<dyn AssignmentStrategy>,
    ids: Box<dyn IdGenerator>,
    workers: WorkerGroup,
}

impl Dispatcher {
    /// `unit_count` units of `capacity` each, at floor 1 heading up, with
    /// default floor range and travel time. Starts the workers, so it must be
    /// called inside a tokio runtime.
    pub fn new(unit_count: usize, capacity: usize) -> Result<Self, BuildError> {
        DispatcherBuilder::new()
            .units(unit_count)
            .capacity(capacity)
            .build()
    }

    pub fn from_config(config: &LiftConfig) -> Result<Self, BuildError> {
        DispatcherBuilder::from_config(config).build()
    }

    pub(crate) fn from_parts(
        units: Vec<Arc<Unit>>,
        floors: FloorRange,
        strategy: Box<dyn AssignmentStrategy>,
        ids: Box<dyn IdGenerator>,
        workers: WorkerGroup,
    ) -> Self {
        Self {
            units,
            floors,
            strategy,
            ids,
            workers,
        }
    }

    /// Assign a trip to the unit nearest to `source_floor` and admit it.
    ///
    /// Non-blocking. Runs on the caller's task. If the chosen unit's queue is
    /// full the request is rejected; it is not offered to another unit.
    pub fn request_elevator(
        &self,
        source_floor: Floor,
        destination_floor: Floor,
    ) -> Result<Assignment, DispatchError> {
        self.check_floor(source_floor)?;
        self.check_floor(destination_floor)?;

        let snapshots: Vec<UnitSnapshot> = self.units.iter().map(|u| u.snapshot()).collect();
        let unit = self
            .strategy
            .select(source_floor, &snapshots)
            .and_then(|index| self.units.get(index))
            .ok_or(DispatchError::NoUnitsConfigured)?;

        let request = Request::new(
            self.ids.generate_request_id(),
            source_floor,
            destination_floor,
        );
        match unit.add_request(request) {
            Ok(()) => Ok(Assignment {
                unit: unit.id(),
                request,
            }),
            Err(rejected) => {
                tracing::warn!(
                    unit = %rejected.unit,
                    capacity = rejected.capacity,
                    source = source_floor,
                    destination = destination_floor,
                    "admission rejected"
                );
                Err(rejected.into())
            }
        }
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    pub fn floors(&self) -> FloorRange {
        self.floors
    }

    /// Units in scan order.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter().map(|u| u.as_ref())
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units().find(|u| u.id() == id)
    }

    pub fn status(&self) -> DispatcherStatus {
        DispatcherStatus::from_units(self.units().map(UnitStatus::of).collect())
    }

    /// Stop every worker and wait for them. Trips in flight are abandoned.
    pub async fn shutdown(self) {
        tracing::info!(units = self.units.len(), "dispatcher shutting down");
        self.workers.shutdown_and_join().await;
    }

    fn check_floor(&self, floor: Floor) -> Result<(), DispatchError> {
        if self.floors.contains(floor) {
            Ok(())
        } else {
            Err(DispatchError::InvalidRequest {
                floor,
                range: self.floors,
            })
        }
    }
}
