//! Status views of the dispatcher and its units.

use serde::{Deserialize, Serialize};

use crate::domain::{Direction, Floor, UnitId, UnitState};
use crate::unit::Unit;

/// Point-in-time view of one unit. Fields are read independently, so a unit in
/// motion may show a floor one step behind its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitStatus {
    pub id: UnitId,
    pub floor: Floor,
    pub direction: Direction,
    pub state: UnitState,
    pub queued: usize,
    pub capacity: usize,
}

impl UnitStatus {
    pub fn of(unit: &Unit) -> Self {
        Self {
            id: unit.id(),
            floor: unit.floor(),
            direction: unit.direction(),
            state: unit.state(),
            queued: unit.queued(),
            capacity: unit.capacity(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatcherCounts {
    pub idle: usize,
    pub moving: usize,
    pub queued: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatcherStatus {
    pub units: Vec<UnitStatus>,
    pub counts: DispatcherCounts,
}

impl DispatcherStatus {
    pub fn from_units(units: Vec<UnitStatus>) -> Self {
        let mut counts = DispatcherCounts::default();
        for unit in &units {
            match unit.state {
                UnitState::Idle => counts.idle += 1,
                UnitState::Moving => counts.moving += 1,
            }
            counts.queued += unit.queued;
        }
        Self { units, counts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(id: u32, state: UnitState, queued: usize) -> UnitStatus {
        UnitStatus {
            id: UnitId::new(id),
            floor: 1,
            direction: Direction::Up,
            state,
            queued,
            capacity: 5,
        }
    }

    #[test]
    fn counts_aggregate_units() {
        let s = DispatcherStatus::from_units(vec![
            status(1, UnitState::Moving, 2),
            status(2, UnitState::Idle, 0),
            status(3, UnitState::Moving, 1),
        ]);

        assert_eq!(
            s.counts,
            DispatcherCounts {
                idle: 1,
                moving: 2,
                queued: 3,
            }
        );
    }

    #[test]
    fn serializes_to_json() {
        let s = DispatcherStatus::from_units(vec![status(1, UnitState::Idle, 0)]);
        let json = serde_json::to_value(&s).unwrap();

        assert_eq!(json["units"][0]["state"], "idle");
        assert_eq!(json["units"][0]["direction"], "up");
        assert_eq!(json["counts"]["idle"], 1);
    }
}
