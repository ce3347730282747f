//! Chronicare Web Server
//!
//! Run with: cargo run -p chronicare-web

use chronicare_common::source::source_from_location;
use chronicare_web::config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("chronicare=info,chronicare_web=info,chronicare_common=info,tower_http=info")),
        )
        .init();

    info!("Starting Chronicare Web Server...");

    let config = Config::load()?;
    let source = source_from_location(&config.dataset.source, config.dataset.timeout())?;
    info!(dataset = %source.describe(), "Dataset source configured");

    // Create app state
    let state = chronicare_web::state::AppState::new(source);

    // Build router
    let app = chronicare_web::router::build_router(state, &config.server.static_dir);

    let addr = config.bind_addr()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
