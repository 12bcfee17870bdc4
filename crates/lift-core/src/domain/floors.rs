//! Floors and the valid floor range of a building.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A floor number. Signed so buildings with basement levels can be modelled.
pub type Floor = i32;

/// Inclusive range of floors a request may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorRange {
    pub min: Floor,
    pub max: Floor,
}

impl FloorRange {
    pub const fn new(min: Floor, max: Floor) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, floor: Floor) -> bool {
        (self.min..=self.max).contains(&floor)
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

impl Default for FloorRange {
    fn default() -> Self {
        Self::new(1, 20)
    }
}

impl fmt::Display for FloorRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}
