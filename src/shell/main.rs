use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use ev_bookings::shell::config::AppConfig;
use ev_bookings::shell::state::{AppState, InMemoryDeps};
use ev_bookings::shell::{http, seed, workers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let deps = InMemoryDeps::default();
    if let Some(path) = &config.seed_path {
        seed::apply(&deps, seed::load(path)?).await;
    }

    let state = AppState::from_deps(&deps, &config.outbox_topic, config.commit_max_retries);
    let relay = Arc::new(deps.relay(config.outbox_batch_size, config.outbox_max_attempts));
    workers::spawn_sweeper(state.availability_handler.clone(), config.sweep_interval);
    workers::spawn_relay(relay, config.relay_interval);

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "booking ledger listening, GraphQL at /gql");
    axum::serve(listener, http::app(state)).await?;
    Ok(())
}
