//! Gateway process entry point: binds an HTTP listener and serves
//! [`crate::router::build_router`].

use crate::adapters::RemoteStateStore;
use crate::domain::GatewayConfig;
use crate::router::{build_router, AppState};

/// Run the gateway until the process is killed.
///
/// # Errors
/// Returns an error if the configured address can't be bound, or if the
/// configured remote state store can't be constructed.
pub async fn run(config: GatewayConfig) -> std::io::Result<()> {
    let addr = config.addr();
    let state = match &config.remote_store_url {
        Some(url) => {
            tracing::info!(%url, "backing ledger with remote state store");
            let store = RemoteStateStore::new(url.clone())
                .map_err(|err| std::io::Error::other(err.to_string()))?;
            AppState::with_store(std::sync::Arc::new(store))
        }
        None => AppState::new(),
    };
    let router = build_router(state);

    tracing::info!(%addr, "starting ledger gateway");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await
}
