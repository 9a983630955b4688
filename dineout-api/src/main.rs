use dineout_api::{
    config::Config,
    handlers::{AppState, app},
    store::Store,
};
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    // Nothing is bound until the store is reachable; a failure exits non-zero.
    let store = match Store::connect(&config.database_url).await {
        Ok(store) => store,
        Err(e) => {
            error!("Database connection failed: {e}");
            return Err(e.into());
        }
    };
    info!("Database connected: {}", config.database_url);

    let app = app(AppState { store });

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("DineOut API listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
