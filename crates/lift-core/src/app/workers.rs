use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::ports::EventSink;
use crate::unit::{self, Unit};

/// Worker group handle.
/// - one long-lived task per unit
/// - dropping the group (and with it `shutdown_tx`) stops every worker
/// - `shutdown_and_join()` stops them and waits
pub struct WorkerGroup {
    shutdown_tx: watch::Sender<bool>,
    joins: Vec<JoinHandle<()>>,
}

impl WorkerGroup {
    /// Spawn one execution loop per unit. Must run inside a tokio runtime.
    pub fn spawn(units: &[Arc<Unit>], floor_travel: Duration, events: Arc<dyn EventSink>) -> Self {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let joins = units
            .iter()
            .map(|u| {
                tokio::spawn(unit::run(
                    Arc::clone(u),
                    floor_travel,
                    Arc::clone(&events),
                    shutdown_rx.clone(),
                ))
            })
            .collect();

        Self { shutdown_tx, joins }
    }

    /// Ask every worker to stop. In-flight trips are abandoned, queued
    /// requests are not executed.
    pub fn request_shutdown(&self) {
        // ignore send error: workers may already be gone
        let _ = self.shutdown_tx.send(true);
    }

    /// Shutdown and wait for all workers.
    pub async fn shutdown_and_join(self) {
        self.request_shutdown();
        for join in self.joins {
            if let Err(e) = join.await {
                tracing::warn!(error = %e, "unit worker ended abnormally");
            }
        }
    }
}
