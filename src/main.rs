use std::net::SocketAddr;
use std::sync::Arc;

use techsite::api::build_app;
use techsite::config::CONFIG;
use techsite::{InMemoryStorage, SiteService};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&CONFIG.log_level))
        .init();
    info!(config = ?*CONFIG, "Starting techsite");

    let storage = InMemoryStorage::new();
    let service = Arc::new(SiteService::new(storage));
    let app = build_app(service, CONFIG.request_timeout);

    let addr: SocketAddr = format!("{}:{}", CONFIG.host, CONFIG.port).parse()?;
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
