use serde::{Deserialize, Serialize};

/// SQLite entity store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Connection URL (default: "sqlite://scrapbook.db")
    #[serde(default = "default_db_url")]
    pub url: String,

    /// Maximum pooled connections (default: 8)
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Directory holding the SQL migrations (default: "./migrations")
    #[serde(default = "default_migrations_dir")]
    pub migrations_dir: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_db_url(),
            max_connections: default_max_connections(),
            migrations_dir: default_migrations_dir(),
        }
    }
}

fn default_db_url() -> String {
    "sqlite://scrapbook.db".to_string()
}

fn default_max_connections() -> u32 {
    8
}

fn default_migrations_dir() -> String {
    "./migrations".to_string()
}
