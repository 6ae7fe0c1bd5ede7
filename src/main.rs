use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use supply_chain_admin::{
    config::Config,
    db::{self, DocumentStore},
    handlers::{self, AppState},
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "supply_chain_admin=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = db::init_db_pool(&config.database_url, config.db_max_connections).await?;
    let state = AppState {
        store: DocumentStore::new(pool),
    };

    let app = handlers::router(state);

    let listener = tokio::net::TcpListener::bind(config.server_addr()).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
