//! Configuration loading
//!
//! Priority order (highest to lowest):
//! 1. Command-line flags
//! 2. Environment variables (after loading ./.env and ~/.trivia/.env)
//! 3. ~/.trivia/config.toml
//! 4. Built-in defaults

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use trivia_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use trivia_server::ServerConfig;

/// Load environment variables from .env files.
///
/// dotenvy never overwrites variables that are already set, so loading the
/// current directory first gives it priority over ~/.trivia/.env. Runs
/// before tracing is up, so it returns the files it loaded for the caller
/// to log.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded.push(path);
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() && dotenvy::from_path(&env_file).is_ok() {
            loaded.push(env_file);
        }
    }

    loaded
}

/// The trivia config directory (~/.trivia)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".trivia"))
}

/// Default config file path (~/.trivia/config.toml)
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Contents of config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriviaConfig {
    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub database: DatabaseSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub bind: Option<SocketAddr>,
    pub cors_permissive: Option<bool>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseSection {
    pub url: Option<String>,
    pub max_connections: Option<u32>,
}

impl TriviaConfig {
    /// Load from an explicit path, or from ~/.trivia/config.toml.
    ///
    /// A missing default file is not an error; a missing explicit file is.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Server settings with flag overrides applied on top of the file.
    pub fn server_config(
        &self,
        bind: Option<SocketAddr>,
        cors_permissive: bool,
        timeout_secs: Option<u64>,
    ) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            bind_addr: bind.or(self.server.bind).unwrap_or(defaults.bind_addr),
            cors_permissive: cors_permissive || self.server.cors_permissive.unwrap_or(false),
            request_timeout: timeout_secs
                .or(self.server.timeout_secs)
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
        }
    }

    /// Database URL from flag/env, falling back to the file.
    pub fn database_url(&self, from_args: Option<String>) -> Option<String> {
        from_args.or_else(|| self.database.url.clone())
    }

    pub fn max_connections(&self, from_args: Option<u32>) -> u32 {
        from_args
            .or(self.database.max_connections)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS)
    }
}
