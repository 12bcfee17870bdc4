//! Position/direction/state of a unit.
//!
//! Single writer: only the unit's own execution loop stores. Everyone else
//! (dispatcher scan, status queries) loads with `Relaxed` and may observe a
//! value one step behind a unit in motion.

use std::sync::atomic::{AtomicI32, AtomicU8, Ordering};

use crate::domain::{Direction, Floor, UnitState};

#[derive(Debug)]
pub struct UnitPosition {
    floor: AtomicI32,
    direction: AtomicU8,
    state: AtomicU8,
}

impl UnitPosition {
    pub fn new(floor: Floor) -> Self {
        Self {
            floor: AtomicI32::new(floor),
            direction: AtomicU8::new(encode_direction(Direction::Up)),
            state: AtomicU8::new(encode_state(UnitState::Idle)),
        }
    }

    pub fn floor(&self) -> Floor {
        self.floor.load(Ordering::Relaxed)
    }

    pub fn direction(&self) -> Direction {
        decode_direction(self.direction.load(Ordering::Relaxed))
    }

    pub fn state(&self) -> UnitState {
        decode_state(self.state.load(Ordering::Relaxed))
    }

    pub(crate) fn set_floor(&self, floor: Floor) {
        self.floor.store(floor, Ordering::Relaxed);
    }

    pub(crate) fn set_direction(&self, direction: Direction) {
        self.direction
            .store(encode_direction(direction), Ordering::Relaxed);
    }

    pub(crate) fn set_state(&self, state: UnitState) {
        self.state.store(encode_state(state), Ordering::Relaxed);
    }
}

fn encode_direction(direction: Direction) -> u8 {
    match direction {
        Direction::Up => 0,
        Direction::Down => 1,
    }
}

fn decode_direction(raw: u8) -> Direction {
    if raw == 0 { Direction::Up } else { Direction::Down }
}

fn encode_state(state: UnitState) -> u8 {
    match state {
        UnitState::Idle => 0,
        UnitState::Moving => 1,
    }
}

fn decode_state(raw: u8) -> UnitState {
    if raw == 0 { UnitState::Idle } else { UnitState::Moving }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_going_up() {
        let position = UnitPosition::new(1);
        assert_eq!(position.floor(), 1);
        assert_eq!(position.direction(), Direction::Up);
        assert_eq!(position.state(), UnitState::Idle);
    }

    #[test]
    fn stores_are_visible() {
        let position = UnitPosition::new(1);
        position.set_floor(-3);
        position.set_direction(Direction::Down);
        position.set_state(UnitState::Moving);

        assert_eq!(position.floor(), -3);
        assert_eq!(position.direction(), Direction::Down);
        assert_eq!(position.state(), UnitState::Moving);
    }
}
