use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use wiki_desc::{
    config::Config,
    api::routes::create_router,
    wikipedia::HttpFetcher,
    AppState,
};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // Load configuration
    let config = Config::load()?;
    let server_addr = config.server_addr;
    let fetcher = HttpFetcher::new(&config)?;

    // Create application state
    let app_state = AppState {
        fetcher: Arc::new(fetcher),
    };

    let app = create_router(app_state);
    let listener = TcpListener::bind(server_addr).await?;

    tracing::info!("Listening on {}", server_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
