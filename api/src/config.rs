use std::env;
use std::fmt;
use std::str::FromStr;

use anyhow::Context;

/// Where the catalog store keeps its rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// PostgreSQL reached through `DATABASE_URL`
    Persistent,
    /// In-process SQLite memory database, lost on restart
    Ephemeral,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Persistent => write!(f, "persistent"),
            StorageBackend::Ephemeral => write!(f, "ephemeral"),
        }
    }
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "persistent" => Ok(StorageBackend::Persistent),
            "ephemeral" => Ok(StorageBackend::Ephemeral),
            _ => Err(format!("Unknown storage backend: {}", s)),
        }
    }
}

/// Storage connection settings
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    /// Environment name reported by the health endpoint
    pub environment: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = match lookup("STORAGE_BACKEND") {
            Some(value) => value
                .parse::<StorageBackend>()
                .map_err(anyhow::Error::msg)?,
            None => StorageBackend::Ephemeral,
        };

        Ok(Self {
            storage: StorageConfig {
                backend,
                database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
                max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 10)?,
                connect_timeout_secs: parse_or(&lookup, "DATABASE_CONNECT_TIMEOUT_SECS", 5)?,
            },
            environment: lookup("APP_ENVIRONMENT").unwrap_or_else(|| "Development".to_string()),
            port: parse_or(&lookup, "PORT", 8080)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: {}", key, raw)),
        None => Ok(default),
    }
}
