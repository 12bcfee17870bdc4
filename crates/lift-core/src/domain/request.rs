use serde::{Deserialize, Serialize};

use super::{Floor, RequestId, UnitId};

/// A single trip instruction. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    id: RequestId,
    source_floor: Floor,
    destination_floor: Floor,
}

impl Request {
    pub fn new(id: RequestId, source_floor: Floor, destination_floor: Floor) -> Self {
        Self {
            id,
            source_floor,
            destination_floor,
        }
    }

    pub fn id(&self) -> RequestId {
        self.id
    }

    pub fn source_floor(&self) -> Floor {
        self.source_floor
    }

    pub fn destination_floor(&self) -> Floor {
        self.destination_floor
    }
}

/// Result of a successful `request_elevator`: which unit admitted which request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub unit: UnitId,
    pub request: Request,
}
