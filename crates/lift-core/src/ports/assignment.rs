//! AssignmentStrategy port - maps a new request to one unit.

use crate::domain::{Floor, UnitId};

/// Last-known position of a unit at the time of the scan.
///
/// The floor is read without synchronizing with the unit's worker, so it may
/// be one step behind a unit that is mid-traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitSnapshot {
    pub id: UnitId,
    pub floor: Floor,
}

/// Picks the unit that should serve a request from `source`.
///
/// `candidates` are in scan order. Returns an index into `candidates`, or
/// `None` when there is nothing to choose from.
pub trait AssignmentStrategy: Send + Sync {
    fn select(&self, source: Floor, candidates: &[UnitSnapshot]) -> Option<usize>;
}
