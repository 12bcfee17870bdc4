use std::sync::Arc;

use lift_core::impls::{ChannelEventSink, FanoutEventSink, TracingEventSink};
use lift_core::{Dispatcher, DispatcherBuilder, Floor, LiftConfig};
use tokio::time::{Duration, sleep};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// (delay before submit, source, destination)
const DEMO_SCRIPT: [(u64, Floor, Floor); 4] = [(3, 10, 12), (3, 1, 7), (3, 2, 5), (3, 1, 9)];

/// Usage: `lift [config.json]`. Without a file, config comes from `LIFT_*`
/// env vars (a `.env` file is loaded first).
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lift=info,lift_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => LiftConfig::from_json_file(path)?,
        None => LiftConfig::from_env()?,
    };

    // (A) event stream: logs on stderr, JSON lines on stdout
    let (channel, mut rx) = ChannelEventSink::channel();
    let events = FanoutEventSink::new()
        .with(Arc::new(TracingEventSink))
        .with(Arc::new(channel));
    let printer = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            match serde_json::to_string(&event) {
                Ok(line) => println!("{line}"),
                Err(e) => tracing::warn!(error = %e, "failed to encode event"),
            }
        }
    });

    // (B) units + workers
    let dispatcher = DispatcherBuilder::from_config(&config)
        .event_sink(Arc::new(events))
        .build()?;

    // (C) replay the demo requests, then idle until Ctrl-C
    tokio::select! {
        () = replay(&dispatcher) => tokio::signal::ctrl_c().await?,
        signal = tokio::signal::ctrl_c() => signal?,
    }

    // (D) stop workers; in-flight trips are abandoned
    dispatcher.shutdown().await;
    printer.await?;
    tracing::info!("lift stopped");
    Ok(())
}

async fn replay(dispatcher: &Dispatcher) {
    for (delay_secs, source, destination) in DEMO_SCRIPT {
        sleep(Duration::from_secs(delay_secs)).await;
        match dispatcher.request_elevator(source, destination) {
            Ok(assignment) => tracing::debug!(unit = %assignment.unit, "assigned"),
            Err(e) => tracing::warn!(source, destination, error = %e, "request not admitted"),
        }
    }
    tracing::info!(status = ?dispatcher.status(), "demo requests submitted; Ctrl-C to stop");
}
