//! DispatcherBuilder - construction and wiring of a `Dispatcher`.
//!
//! `build()` validates everything up front (capacity, floor range, initial
//! floor, a running tokio runtime) and only then creates units and spawns their
//! workers.

use std::sync::Arc;
use std::time::Duration;

use crate::config::LiftConfig;
use crate::domain::{Floor, FloorRange, UnitId};
use crate::impls::{NearestUnit, TracingEventSink};
use crate::ports::{
    AssignmentStrategy, Clock, EventSink, IdGenerator, SystemClock, UlidGenerator,
};
use crate::unit::Unit;

use super::{Dispatcher, WorkerGroup};

/// Errors of `DispatcherBuilder::build`.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("unit capacity must be at least 1")]
    ZeroCapacity,

    #[error("floor range {0} is empty")]
    EmptyFloorRange(FloorRange),

    #[error("initial floor {floor} is outside {range}")]
    InitialFloorOutOfRange { floor: Floor, range: FloorRange },

    #[error("too many units: {0}")]
    TooManyUnits(usize),

    #[error("a dispatcher must be built inside a tokio runtime")]
    NoRuntime,
}

/// Builder for `Dispatcher`.
///
/// # Example
/// ```ignore
/// let dispatcher = DispatcherBuilder::new()
///     .units(3)
///     .capacity(5)
///     .floors(FloorRange::new(1, 12))
///     .event_sink(Arc::new(TracingEventSink))
///     .build()?;
/// ```
pub struct DispatcherBuilder {
    units: usize,
    capacity: usize,
    floors: FloorRange,
    initial_floor: Floor,
    floor_travel: Duration,
    events: Option<Arc<dyn EventSink>>,
    clock: Option<Arc<dyn Clock>>,
    strategy: Option<Box<dyn AssignmentStrategy>>,
    id_generator: Option<Box<dyn IdGenerator>>,
}

impl DispatcherBuilder {
    /// Defaults: 3 units, capacity 5, floors 1..=20 starting at 1, one second per floor.
    pub fn new() -> Self {
        Self::from_config(&LiftConfig::default())
    }

    pub fn from_config(config: &LiftConfig) -> Self {
        Self {
            units: config.units,
            capacity: config.capacity,
            floors: config.floors(),
            initial_floor: config.initial_floor,
            floor_travel: config.floor_travel(),
            events: None,
            clock: None,
            strategy: None,
            id_generator: None,
        }
    }

    pub fn units(mut self, units: usize) -> Self {
        self.units = units;
        self
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn floors(mut self, floors: FloorRange) -> Self {
        self.floors = floors;
        self
    }

    pub fn initial_floor(mut self, floor: Floor) -> Self {
        self.initial_floor = floor;
        self
    }

    /// Simulated time between two adjacent floors.
    pub fn floor_travel(mut self, floor_travel: Duration) -> Self {
        self.floor_travel = floor_travel;
        self
    }

    /// Where progress events go. Defaults to `TracingEventSink`.
    pub fn event_sink(mut self, events: Arc<dyn EventSink>) -> Self {
        self.events = Some(events);
        self
    }

    /// Time source for event timestamps and request ids. Defaults to `SystemClock`.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Defaults to `NearestUnit`.
    pub fn strategy(mut self, strategy: Box<dyn AssignmentStrategy>) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Defaults to a ULID generator on the builder's clock.
    pub fn id_generator(mut self, id_generator: Box<dyn IdGenerator>) -> Self {
        self.id_generator = Some(id_generator);
        self
    }

    /// Validate, create the units and start one worker per unit.
    pub fn build(self) -> Result<Dispatcher, BuildError> {
        if self.capacity == 0 {
            return Err(BuildError::ZeroCapacity);
        }
        if self.floors.is_empty() {
            return Err(BuildError::EmptyFloorRange(self.floors));
        }
        if !self.floors.contains(self.initial_floor) {
            return Err(BuildError::InitialFloorOutOfRange {
                floor: self.initial_floor,
                range: self.floors,
            });
        }
        let unit_count =
            u32::try_from(self.units).map_err(|_| BuildError::TooManyUnits(self.units))?;
        if tokio::runtime::Handle::try_current().is_err() {
            return Err(BuildError::NoRuntime);
        }

        let events = self.events.unwrap_or_else(|| Arc::new(TracingEventSink));
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let units: Vec<Arc<Unit>> = (1..=unit_count)
            .map(|n| {
                Arc::new(Unit::new(
                    UnitId::new(n),
                    self.capacity,
                    self.initial_floor,
                    Arc::clone(&events),
                    Arc::clone(&clock),
                ))
            })
            .collect();
        let workers = WorkerGroup::spawn(&units, self.floor_travel, events);

        tracing::info!(
            units = units.len(),
            capacity = self.capacity,
            floors = %self.floors,
            initial_floor = self.initial_floor,
            floor_travel_ms = self.floor_travel.as_millis() as u64,
            "dispatcher started"
        );

        Ok(Dispatcher::from_parts(
            units,
            self.floors,
            self.strategy.unwrap_or_else(|| Box::new(NearestUnit)),
            self.id_generator
                .unwrap_or_else(|| Box::new(UlidGenerator::new(clock))),
            workers,
        ))
    }
}

impl Default for DispatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn build_with_defaults() {
        let dispatcher = DispatcherBuilder::new().build().unwrap();
        assert_eq!(dispatcher.unit_count(), 3);
        assert_eq!(dispatcher.floors(), FloorRange::new(1, 20));
        dispatcher.shutdown().await;
    }

    #[tokio::test]
    async fn build_rejects_zero_capacity() {
        let result = DispatcherBuilder::new().capacity(0).build();
        assert!(matches!(result, Err(BuildError::ZeroCapacity)));
    }

    #[tokio::test]
    async fn build_rejects_empty_floor_range() {
        let result = DispatcherBuilder::new()
            .floors(FloorRange::new(10, 1))
            .build();
        assert!(matches!(result, Err(BuildError::EmptyFloorRange(_))));
    }

    #[tokio::test]
    async fn build_rejects_initial_floor_outside_range() {
        let result = DispatcherBuilder::new()
            .floors(FloorRange::new(0, 5))
            .initial_floor(6)
            .build();
        assert!(matches!(
            result,
            Err(BuildError::InitialFloorOutOfRange { floor: 6, .. })
        ));
    }

    #[test]
    fn build_outside_runtime_fails() {
        let result = DispatcherBuilder::new().build();
        assert!(matches!(result, Err(BuildError::NoRuntime)));
    }

    #[tokio::test]
    async fn zero_units_is_allowed() {
        let dispatcher = DispatcherBuilder::new().units(0).build().unwrap();
        assert_eq!(dispatcher.unit_count(), 0);
        dispatcher.shutdown().await;
    }
}
