// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Registrar Contributors

use std::{env, net::SocketAddr, sync::Arc};

use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use registrar_server::{
    api::router,
    auth::{password::hash_secret, TokenService},
    config::Config,
    state::AppState,
    store::{Identity, InMemoryIdentities, SchoolRegistry},
};

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` overrides the default `info` filter; `LOG_FORMAT=json` switches
/// the output from human-readable to newline-delimited JSON.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"))
        .add_directive("hyper=warn".parse().expect("static directive"))
        .add_directive("tower_http=info".parse().expect("static directive"));

    let registry = tracing_subscriber::registry().with(env_filter);
    match env::var("LOG_FORMAT").as_deref() {
        Ok("json") => registry.with(fmt::layer().json()).init(),
        _ => registry.with(fmt::layer().pretty()).init(),
    }
}

#[tokio::main]
async fn main() {
    init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("configuration error: {err}");
            std::process::exit(1);
        }
    };

    let mut identities = InMemoryIdentities::new();
    match &config.seed {
        Some(seed) => {
            let secret_hash = hash_secret(&seed.secret).expect("Failed to hash seed secret");
            identities.insert(Identity {
                user_id: 1,
                username: seed.username.clone(),
                secret_hash,
                role: seed.role,
            });
            tracing::info!(username = %seed.username, role = %seed.role, "seeded identity");
        }
        None => {
            tracing::warn!("no seed identity configured; every login will be rejected");
        }
    }

    let tokens = Arc::new(TokenService::new(
        &config.jwt_secret,
        config.jwt_issuer.clone(),
        config.jwt_audience.clone(),
    ));
    let state = AppState::new(Arc::new(identities), tokens, SchoolRegistry::new());
    let app = router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Failed to parse bind address");

    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    tracing::info!("registrar listening on http://{addr} (docs at /docs)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server failed");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
    tracing::info!("shutdown signal received, draining connections");
}
