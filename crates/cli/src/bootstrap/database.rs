use scrapbook_domain::config::DatabaseConfig;
use scrapbook_infrastructure::create_pool;
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    info!("Initializing database: {}", cfg.url);

    let pool = create_pool(&cfg.url, cfg.max_connections, &cfg.migrations_dir)
        .await
        .map_err(|e| {
            error!("Failed to initialize database pool: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!(
        max_connections = cfg.max_connections,
        migrations = %cfg.migrations_dir,
        "Database initialized successfully"
    );

    Ok(pool)
}
