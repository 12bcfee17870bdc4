//! Errors reported to callers of the dispatcher.

use thiserror::Error;

use super::{Floor, FloorRange, Request, UnitId};

/// The unit's queue was at capacity. The rejected request is handed back so
/// the caller still owns it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{unit} rejected request {}: queue full (capacity {capacity})", .request.id())]
pub struct AdmissionRejected {
    pub unit: UnitId,
    pub capacity: usize,
    pub request: Request,
}

/// Synchronous errors of `Dispatcher::request_elevator`.
///
/// Nothing is retried automatically; callers decide on retry policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("invalid request: floor {floor} is outside {range}")]
    InvalidRequest { floor: Floor, range: FloorRange },

    #[error("no units configured")]
    NoUnitsConfigured,

    #[error(transparent)]
    AdmissionRejected(#[from] AdmissionRejected),
}
