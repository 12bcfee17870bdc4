//! Progress events emitted by admission and by unit execution loops.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Direction, Floor, Request, UnitId};

/// Observable event stream of the system.
///
/// One `RequestAdmitted` per successful admission, one `FloorReached` per
/// floor step, one `TripCompleted` when a unit finishes a request. `at` comes
/// from the dispatcher's `Clock`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LiftEvent {
    RequestAdmitted {
        at: DateTime<Utc>,
        unit: UnitId,
        request: Request,
    },
    FloorReached {
        at: DateTime<Utc>,
        unit: UnitId,
        floor: Floor,
        direction: Direction,
    },
    TripCompleted {
        at: DateTime<Utc>,
        unit: UnitId,
        request: Request,
        floor: Floor,
    },
}

impl LiftEvent {
    pub fn unit(&self) -> UnitId {
        match self {
            LiftEvent::RequestAdmitted { unit, .. }
            | LiftEvent::FloorReached { unit, .. }
            | LiftEvent::TripCompleted { unit, .. } => *unit,
        }
    }

    pub fn at(&self) -> DateTime<Utc> {
        match self {
            LiftEvent::RequestAdmitted { at, .. }
            | LiftEvent::FloorReached { at, .. }
            | LiftEvent::TripCompleted { at, .. } => *at,
        }
    }
}
