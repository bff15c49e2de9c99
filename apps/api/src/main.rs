use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use teamboard_api::api;
use teamboard_api::config::AppConfig;
use teamboard_api::domain::board::TeamBoard;
use teamboard_api::infrastructure::BoardStore;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    let board = TeamBoard::seeded();
    tracing::info!(members = board.roster_size(), "Board seeded");
    let store = BoardStore::new(board, config.event_buffer);

    // Configure CORS
    let cors = match &config.cors_allowed_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin.parse::<axum::http::HeaderValue>()?)
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    // Build router
    let app = api::router(store)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
