//! Bounded FIFO admission queue of a single unit.
//!
//! - Producers: any caller of `add_request` (never blocks).
//! - Consumer: the unit's own execution loop via `take_next` (waits while empty).
//!
//! The mutex guards only the `VecDeque` and is never held across an `.await`.
//! Wakeups go through `tokio::sync::Notify`; `notify_one` stores a permit when
//! the consumer is not waiting yet, so an admission between the consumer's
//! emptiness check and its `notified().await` is not lost.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::Notify;

use crate::domain::{AdmissionRejected, LiftEvent, Request, UnitId};
use crate::ports::{Clock, EventSink};

pub struct AdmissionQueue {
    unit: UnitId,
    capacity: usize,
    requests: Mutex<VecDeque<Request>>,
    notify: Notify,
    events: Arc<dyn EventSink>,
    clock: Arc<dyn Clock>,
}

impl AdmissionQueue {
    pub fn new(
        unit: UnitId,
        capacity: usize,
        events: Arc<dyn EventSink>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            unit,
            capacity,
            requests: Mutex::new(VecDeque::with_capacity(capacity)),
            notify: Notify::new(),
            events,
            clock,
        }
    }

    /// Append `request` if there is room, and wake the consumer.
    ///
    /// `RequestAdmitted` is emitted before the lock is released, so it always
    /// precedes the `FloorReached` events of the same request.
    pub fn add_request(&self, request: Request) -> Result<(), AdmissionRejected> {
        {
            let mut requests = self.lock();
            if requests.len() >= self.capacity {
                return Err(AdmissionRejected {
                    unit: self.unit,
                    capacity: self.capacity,
                    request,
                });
            }
            requests.push_back(request);
            self.events.emit(LiftEvent::RequestAdmitted {
                at: self.clock.now(),
                unit: self.unit,
                request,
            });
        }

        self.notify.notify_one();
        Ok(())
    }

    /// Wait for and remove the head request.
    ///
    /// Cancel safe: a request is only removed in the poll that returns it.
    pub async fn take_next(&self) -> Request {
        loop {
            if let Some(request) = self.lock().pop_front() {
                return request;
            }
            self.notify.notified().await;
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<Request>> {
        // a panicking holder cannot leave the deque half-updated
        self.requests.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
