//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Production database URL. When empty the local SQLite file is used.
    #[serde(default)]
    pub url: Option<String>,
    /// Path of the local SQLite database file.
    #[serde(default = "default_sqlite_path")]
    pub sqlite_path: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            sqlite_path: default_sqlite_path(),
            max_connections: default_max_connections(),
        }
    }
}

fn default_sqlite_path() -> String {
    "./peminjaman.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

/// Database engine selected by the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseEngine {
    /// PostgreSQL (production).
    Postgres,
    /// File-backed SQLite (local).
    Sqlite,
}

impl std::fmt::Display for DatabaseEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Postgres => f.write_str("postgres"),
            Self::Sqlite => f.write_str("sqlite"),
        }
    }
}

impl DatabaseConfig {
    fn production_url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|url| !url.is_empty())
    }

    /// Returns the engine this configuration connects to.
    #[must_use]
    pub fn engine(&self) -> DatabaseEngine {
        if self.production_url().is_some() {
            DatabaseEngine::Postgres
        } else {
            DatabaseEngine::Sqlite
        }
    }

    /// Returns the connection URL, creating the SQLite file if missing.
    #[must_use]
    pub fn connection_url(&self) -> String {
        match self.production_url() {
            Some(url) => url.to_string(),
            None => format!("sqlite://{}?mode=rwc", self.sqlite_path),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// `DATABASE_URL` and `PORT` override everything else.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());
        let port = std::env::var("PORT").ok().filter(|port| !port.is_empty());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("PEMINJAMAN")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("database.url", database_url)?
            .set_override_option("server.port", port)?
            .build()?;

        config.try_deserialize()
    }
}
