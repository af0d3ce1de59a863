// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::{env, error::Error, net::SocketAddr};

use bluegreen_site::{
    api::router,
    config::{ConfigSource, SiteConfig, DEFAULT_HOST, DEFAULT_PORT, HOST_ENV, PORT_ENV},
    state::AppState,
    telemetry::{self, LogFormat},
};
use tokio::net::TcpListener;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    telemetry::init(LogFormat::from_env());

    let (config, source) = SiteConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load site configuration");
        e
    })?;

    match &source {
        ConfigSource::File(path) => info!(path = %path.display(), "Loaded site configuration"),
        ConfigSource::EnvironmentOnly => {
            warn!("No site configuration file found, using environment only")
        }
    }
    info!(
        app_settings = config.app_settings.len(),
        connection_strings = config.connection_strings.len(),
        "Site configuration ready"
    );

    let state = AppState::new(config)?;
    let app = router(state);

    // Parse bind address
    let host = env::var(HOST_ENV).unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port: u16 = env::var(PORT_ENV)
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr: SocketAddr = format!("{host}:{port}").parse()?;

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "BlueGreen site listening (docs at /docs)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
