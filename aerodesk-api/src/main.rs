use aerodesk_api::{app, AppState};
use aerodesk_store::{SeatEventBus, SharedInventory};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aerodesk_api=debug,aerodesk_store=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let (config, inventory) = aerodesk_store::bootstrap()?;
    tracing::info!("Starting Aerodesk API on port {}", config.server.port);

    let events = SeatEventBus::new(config.events.channel_capacity);
    let state = AppState::new(SharedInventory::new(inventory, events)).with_limits(config.limits.clone());
    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
