//! # ledger-gateway
//!
//! REST front-end for the asset registry transaction processor. Binds
//! the port from `LEDGER_GATEWAY_PORT` (default 8080) and serves account,
//! token, and balance lookups plus batch submission/status polling.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use ledger_gateway::domain::GatewayConfig;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let level = std::env::var("LEDGER_GATEWAY_LOG_LEVEL")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default tracing subscriber failed");

    let mut config = GatewayConfig::default();
    if let Ok(port) = std::env::var("LEDGER_GATEWAY_PORT") {
        config.port = port.parse().expect("LEDGER_GATEWAY_PORT must be a u16");
    }
    if let Ok(url) = std::env::var("LEDGER_GATEWAY_REMOTE_STORE_URL") {
        config.remote_store_url = Some(url);
    }

    ledger_gateway::service::run(config).await
}
