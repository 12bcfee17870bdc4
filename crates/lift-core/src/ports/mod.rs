//! Ports - seams between the dispatcher/units and their collaborators.
//!
//! - **AssignmentStrategy**: which unit serves a new request
//! - **EventSink**: where progress events go
//! - **IdGenerator** / **Clock**: request ids and the time they are derived from

pub mod assignment;
pub mod clock;
pub mod event_sink;
pub mod id_generator;

pub use self::assignment::{AssignmentStrategy, UnitSnapshot};
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::event_sink::EventSink;
pub use self::id_generator::{IdGenerator, UlidGenerator};
