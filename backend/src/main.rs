use axum::{extract::Request, ServiceExt};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use usuarios_backend::{create_router, initialize_backend, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::parse();
    info!("Loaded configuration: {:?}", config);

    let app_state = initialize_backend();
    let app = create_router(app_state, &config)?;

    let addr = config.bind_addr();
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
