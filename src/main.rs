// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 TechRover Solutions

use std::{env, net::SocketAddr};

use tracing_subscriber::EnvFilter;

use techrover_content_server::{
    api::router,
    auth::AdminCredentials,
    config::{
        CONTENT_SECRET_ENV, DATA_DIR_ENV, DEFAULT_CONTENT_SECRET, DEFAULT_DATA_DIR,
        DEFAULT_HOST, DEFAULT_LOG_FILTER, DEFAULT_PORT, HOST_ENV, LOG_FORMAT_ENV, PORT_ENV,
    },
    crypto::ContentCipher,
    state::{AppState, AuthContext},
    storage::{ContentStorage, StoragePaths},
};

#[tokio::main]
async fn main() {
    init_tracing();

    // Initialize content storage under the configured data directory.
    let data_dir = env::var(DATA_DIR_ENV).unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
    let mut storage = ContentStorage::new(StoragePaths::new(&data_dir));
    storage
        .initialize()
        .expect("failed to initialize content storage");

    // One passphrase seals both tokens and content at rest.
    let secret = env::var(CONTENT_SECRET_ENV).unwrap_or_else(|_| {
        tracing::warn!("CONTENT_SECRET not set, using built-in fallback passphrase");
        DEFAULT_CONTENT_SECRET.to_string()
    });
    let credentials = AdminCredentials::from_env();
    let auth = AuthContext::new(credentials, ContentCipher::new(secret));

    let state = AppState::new(storage, auth);
    let app = router(state);

    // Parse bind address
    let host = env::var(HOST_ENV).unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port: u16 = env::var(PORT_ENV)
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .expect("failed to parse bind address");

    tracing::info!(%addr, data_dir = %data_dir, "content service listening (docs at /docs)");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server failed");
}

/// Configure tracing output from `RUST_LOG` and `LOG_FORMAT`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let json = env::var(LOG_FORMAT_ENV)
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Resolve when the process receives ctrl-c or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
