//! lift-core
//!
//! Multi-unit elevator dispatch with one execution worker per unit.
//!
//! # Modules
//! - **domain**: requests, floors, ids, unit state, events, errors
//! - **ports**: seams (AssignmentStrategy, EventSink, IdGenerator, Clock)
//! - **impls**: NearestUnit and the event sinks
//! - **unit**: admission queue, position state, execution loop
//! - **app**: Dispatcher, DispatcherBuilder, WorkerGroup, status views
//! - **config**: LiftConfig (env / JSON)

pub mod app;
pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;
pub mod unit;

pub use app::{BuildError, Dispatcher, DispatcherBuilder, DispatcherStatus, UnitStatus};
pub use config::{ConfigError, LiftConfig};
pub use domain::{
    AdmissionRejected, Assignment, Direction, DispatchError, Floor, FloorRange, LiftEvent,
    Request, RequestId, UnitId, UnitState,
};
