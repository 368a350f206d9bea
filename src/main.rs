use axum::Router;
use tokio::net::TcpListener;

use anyhow::anyhow;

use lectora::{routes, state::AppState, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Initialize crypto provider for TLS connections
    // This must be done before any TLS connections are attempted
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow!("Failed to install default crypto provider"))?;

    // Load configuration
    let config = ServerConfig::from_env().map_err(|e| anyhow!(e.to_string()))?;
    let address = config.address();
    println!("Starting server on {address}");

    // Create application state (also creates the staging directories)
    let app_state = AppState::new(config)?;

    // Public health check route plus the API surface under /api
    let app = Router::new()
        .route("/", axum::routing::get(lectora::handlers::api::health_check))
        .nest("/api", routes::api::create_api_router())
        .with_state(app_state);

    // Create listener
    let listener = TcpListener::bind(&address).await?;

    println!("Server listening on {address}");

    // Start server
    axum::serve(listener, app).await?;

    Ok(())
}
