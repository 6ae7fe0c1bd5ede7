use anyhow::Result;
use sqlx::{Pool, Sqlite, migrate::MigrateDatabase, sqlite::SqlitePoolOptions};
use std::time::Duration;

use crate::models::Collection;

pub mod document_store;

pub use document_store::DocumentStore;

pub type DbPool = Pool<Sqlite>;

/// Initialize the database connection pool
pub async fn init_db_pool(database_url: &str, max_connections: u32) -> Result<DbPool> {
    // Create the database if it doesn't exist
    if !Sqlite::database_exists(database_url).await.unwrap_or(false) {
        tracing::info!("Creating database {}", database_url);
        Sqlite::create_database(database_url).await?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .connect(database_url)
        .await?;

    setup_database(&pool).await?;

    Ok(pool)
}

/// Create one table per document collection
async fn setup_database(pool: &DbPool) -> Result<()> {
    for collection in Collection::ALL {
        sqlx::query(&collection.create_table())
            .execute(pool)
            .await?;
        tracing::debug!("Collection {} ready", collection);
    }

    Ok(())
}
