//! Unit movement state.

use serde::{Deserialize, Serialize};

use super::Floor;

/// Direction of the most recently started or in-progress movement.
///
/// There is no "stopped" direction: an idle unit keeps the direction of its
/// last trip (units start out as `Up`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Direction needed to get from `from` to `to`, or `None` when already there.
    pub fn between(from: Floor, to: Floor) -> Option<Self> {
        match from.cmp(&to) {
            std::cmp::Ordering::Less => Some(Direction::Up),
            std::cmp::Ordering::Greater => Some(Direction::Down),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Floor delta of a single step.
    pub fn step(self) -> Floor {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }
}

/// Execution loop state.
///
/// State transitions:
/// - Idle -> Moving (a request was taken from the queue)
/// - Moving -> Idle (destination reached)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitState {
    /// Queue empty, loop suspended in `take_next`.
    Idle,

    /// Travelling toward a destination.
    Moving,
}
