//! IdGenerator port - request id generation.
//!
//! Ids are ULIDs whose timestamp part comes from a `Clock`, so tests can pin
//! the time with `FixedClock`.

use crate::domain::RequestId;
use crate::ports::Clock;
use ulid::Ulid;

pub trait IdGenerator: Send + Sync {
    fn generate_request_id(&self) -> RequestId;
}

/// ULID based generator.
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn generate_request_id(&self) -> RequestId {
        let timestamp_ms = self.clock.now().timestamp_millis() as u64;
        let ulid = Ulid::from_parts(timestamp_ms, rand::random());
        RequestId::from(ulid)
    }
}
