//! # haven-board binary
//!
//! The entry point that assembles the application: settings, the seeded
//! in-memory store, the services, and the HTTP surface.

use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_adapters::handlers::AppState;
use api_adapters::{middleware, router};
use configs::AppConfig;
use services::{FeedService, ReportService};
use storage_adapters::MemoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "haven_board=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;

    // One store owns all shared state for the process lifetime. Both
    // services hold a handle to the same instance.
    let store = Arc::new(MemoryStore::seeded());
    let state = AppState {
        feed: FeedService::new(store.clone()),
        reports: ReportService::new(store),
    };

    let app = router::router(state)
        .layer(middleware::cors_policy())
        .layer(TraceLayer::new_for_http());

    let addr = config.bind_addr();
    tracing::info!(%addr, "haven-board listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
