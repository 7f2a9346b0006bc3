// SPDX-FileCopyrightText: 2026 Furrow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `furrow serve` command implementation.
//!
//! Builds the classifier and router once, installs the Prometheus recorder
//! when enabled, and serves the HTTP API until SIGINT or SIGTERM.

use std::sync::Arc;
use std::time::Duration;

use furrow_classifier::QuestionClassifier;
use furrow_config::FurrowConfig;
use furrow_core::FurrowError;
use furrow_gateway::{GatewayState, HealthState};
use furrow_prometheus::PrometheusExporter;
use furrow_router::QuestionRouter;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::shutdown;

/// Run the HTTP service.
pub async fn run_serve(config: FurrowConfig) -> Result<(), FurrowError> {
    init_tracing(&config.service.log_level);

    info!(
        service = %config.service.name,
        version = env!("CARGO_PKG_VERSION"),
        "starting furrow serve"
    );

    let prometheus_render: Option<Arc<dyn Fn() -> String + Send + Sync>> =
        if config.metrics.enabled {
            let exporter = Arc::new(PrometheusExporter::install()?);
            Some(Arc::new(move || exporter.render()))
        } else {
            info!("metrics disabled");
            None
        };

    let classifier = QuestionClassifier::new(&config.classifier, &config.nlp);
    info!(
        scorers = ?classifier.scorer_kinds().iter().map(|k| k.as_str()).collect::<Vec<_>>(),
        "classifier ready"
    );
    let router = QuestionRouter::new(&config.routing);

    let state = GatewayState {
        classifier: Arc::new(classifier),
        router: Arc::new(router),
        health: HealthState::new(prometheus_render),
    };

    let cancel = shutdown::install_signal_handler();
    if config.metrics.enabled {
        tokio::spawn(memory_monitor(cancel.clone()));
    }
    furrow_gateway::start_server(&config.server, state, cancel).await
}

/// Interval between allocator stat samples.
const MEMORY_SAMPLE_INTERVAL: Duration = Duration::from_secs(15);

/// Export jemalloc heap and resident bytes as Prometheus gauges until
/// shutdown.
#[cfg(not(target_env = "msvc"))]
async fn memory_monitor(cancel: CancellationToken) {
    let mut interval = tokio::time::interval(MEMORY_SAMPLE_INTERVAL);
    loop {
        tokio::select! {
            _ = interval.tick() => {
                let (allocated, resident) = sample_allocator();
                debug!(allocated, resident, "allocator stats");
                furrow_prometheus::set_memory_heap(allocated as f64);
                furrow_prometheus::set_memory_resident(resident as f64);
            }
            _ = cancel.cancelled() => break,
        }
    }
}

/// Stub memory monitor for MSVC (no jemalloc).
#[cfg(target_env = "msvc")]
async fn memory_monitor(cancel: CancellationToken) {
    cancel.cancelled().await;
}

/// Read allocated and resident bytes. Stats are refreshed by advancing the
/// jemalloc epoch first.
#[cfg(not(target_env = "msvc"))]
fn sample_allocator() -> (usize, usize) {
    let _ = tikv_jemalloc_ctl::epoch::advance();
    let allocated = tikv_jemalloc_ctl::stats::allocated::read().unwrap_or(0);
    let resident = tikv_jemalloc_ctl::stats::resident::read().unwrap_or(0);
    (allocated, resident)
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("furrow={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
