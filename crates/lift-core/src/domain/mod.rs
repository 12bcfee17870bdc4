//! Domain model (ids, floors, requests, unit state, events, errors).

pub mod errors;
pub mod events;
pub mod floors;
pub mod ids;
pub mod request;
pub mod state;

pub use self::errors::{AdmissionRejected, DispatchError};
pub use self::events::LiftEvent;
pub use self::floors::{Floor, FloorRange};
pub use self::ids::{RequestId, UnitId};
pub use self::request::{Assignment, Request};
pub use self::state::{Direction, UnitState};
