//! NearestUnit - greedy nearest-floor assignment.

use crate::domain::Floor;
use crate::ports::{AssignmentStrategy, UnitSnapshot};

/// Selects the unit whose last-known floor is closest to the request's source
/// floor.
///
/// Only instantaneous distance counts: direction, queue depth and ETA are
/// ignored. On equal distance the first unit in scan order wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestUnit;

impl NearestUnit {
    pub fn new() -> Self {
        Self
    }
}

impl AssignmentStrategy for NearestUnit {
    fn select(&self, source: Floor, candidates: &[UnitSnapshot]) -> Option<usize> {
        // min_by_key keeps the first of equal minima
        candidates
            .iter()
            .enumerate()
            .min_by_key(|(_, unit)| source.abs_diff(unit.floor))
            .map(|(index, _)| index)
    }
}
