//! # sensorpaneld — sensorpanel daemon
//!
//! Composition root that wires the poller and the HTTP server together.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise `tracing` logging
//! - Construct the HTTP reading source (adapter) pointed at the host device
//! - Construct the display store and the poller, injecting the source via
//!   the `ReadingSource` port
//! - Build the axum router around the display store
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use sensorpanel_adapter_http_axum::state::AppState;
use sensorpanel_adapter_http_reqwest::HttpReadingSource;
use sensorpanel_app::display_store::DisplayStore;
use sensorpanel_app::poller::Poller;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Upstream device
    let source = HttpReadingSource::new(&config.upstream)?;
    tracing::info!(upstream = %source.base_url(), "polling host device");

    // Display + poller
    let store = DisplayStore::default();
    let poller = Poller::new(source, store.clone(), config.poll_interval());
    let poller_task = tokio::spawn(poller.run());

    // HTTP
    let state = AppState::new(store, config.poller.interval_ms);
    let app = sensorpanel_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, interval_ms = config.poller.interval_ms, "sensorpaneld listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    poller_task.abort();
    tracing::info!("sensorpaneld stopped");

    Ok(())
}

/// Resolve on Ctrl-C, or on SIGTERM where available.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
