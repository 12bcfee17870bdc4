//! App - wiring of units, their workers and the dispatcher.
//!
//! - **DispatcherBuilder**: validated construction
//! - **Dispatcher**: single entry point for new requests
//! - **WorkerGroup**: one execution loop per unit, with shutdown/join
//! - **status**: point-in-time views for observability

pub mod builder;
pub mod dispatcher;
pub mod status;
pub mod workers;

pub use self::builder::{BuildError, DispatcherBuilder};
pub use self::dispatcher::Dispatcher;
pub use self::status::{DispatcherCounts, DispatcherStatus, UnitStatus};
pub use self::workers::WorkerGroup;
