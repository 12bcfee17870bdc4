//! EventSink port - destination of `LiftEvent`s.

use crate::domain::LiftEvent;

/// Receives progress events.
///
/// Called from the dispatcher's caller (admission, while the unit's queue lock
/// is held) and from unit workers (floor steps). Implementations must not block.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: LiftEvent);
}
