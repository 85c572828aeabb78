use color_eyre::eyre::Result;
use secrecy::{ExposeSecret, Secret};
use signet_adapters::persistence::run_migrations;
use sqlx::{PgPool, postgres::PgPoolOptions};

/// Configure and return a PostgreSQL connection pool
///
/// Creates the pool and runs all pending migrations.
pub async fn configure_postgresql(url: &Secret<String>) -> Result<PgPool> {
    let pg_pool = get_postgres_pool(url.expose_secret()).await?;

    run_migrations(&pg_pool).await?;

    Ok(pg_pool)
}

/// Create a PostgreSQL connection pool
pub async fn get_postgres_pool(url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new().max_connections(5).connect(url).await
}
