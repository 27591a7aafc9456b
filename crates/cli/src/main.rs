//! # Scrapbook Server
//!
//! Entry point: loads configuration, opens the database and serves the API.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use scrapbook_domain::CliOverrides;
use tracing::info;

#[derive(Parser)]
#[command(name = "scrapbook")]
#[command(version)]
#[command(about = "Notes, tasks and users over HTTP with a cache-aside store")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// HTTP port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// SQLite database URL, e.g. sqlite://scrapbook.db
    #[arg(long)]
    database_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind,
        database_url: cli.database_url,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!("Scrapbook server starting");

    let pool = bootstrap::init_database(&config.database).await?;
    let state = di::build_app_state(pool.clone());

    let result = server::start_web_server(&config, state).await;

    pool.close().await;
    info!("Database pool closed");

    result
}
