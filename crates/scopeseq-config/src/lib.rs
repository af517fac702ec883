//! Configuration loading for scopeseq.
//! Reads scopeseq.toml from the current directory or the path in the SCOPESEQ_CONFIG env var.
//! Every field has a default, so a missing file or an empty one is a valid configuration.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_ENV: &str = "SCOPESEQ_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "scopeseq.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {value}")]
    InvalidEnv { key: String, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host()       -> String { "127.0.0.1".to_string() }
fn default_port()       -> u16    { 3001 }
fn default_static_dir() -> String { "static".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Explicit catalog file. Tried before `search_paths`.
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default = "default_search_paths")]
    pub search_paths: Vec<String>,
}

fn default_search_paths() -> Vec<String> {
    vec![
        "data/curriculum-data.json".to_string(),
        "server/curriculum-data.json".to_string(),
        "curriculum-data.json".to_string(),
    ]
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            search_paths: default_search_paths(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_total_weeks")]
    pub total_weeks: usize,
    #[serde(default = "default_labelled_weeks")]
    pub labelled_weeks: usize,
}

fn default_total_weeks()    -> usize { 10 }
fn default_labelled_weeks() -> usize { 8 }

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            total_weeks: default_total_weeks(),
            labelled_weeks: default_labelled_weeks(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when RUST_LOG is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String { "scopeseq=debug,info".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_filter() }
    }
}

impl Config {
    /// Load configuration from scopeseq.toml (or SCOPESEQ_CONFIG), apply
    /// SCOPESEQ_* env overrides, and validate.
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        let mut config = if Path::new(&path).exists() {
            Self::load_from(&path)?
        } else {
            tracing::info!("No config file at {path}; using defaults");
            Self::default()
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply `SCOPESEQ_HOST`, `SCOPESEQ_PORT` and `SCOPESEQ_CATALOG` from `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(host) = lookup("SCOPESEQ_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SCOPESEQ_PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidEnv {
                key: "SCOPESEQ_PORT".to_string(),
                value: port.clone(),
            })?;
        }
        if let Some(catalog) = lookup("SCOPESEQ_CATALOG") {
            self.catalog.path = Some(catalog);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid.total_weeks == 0 {
            return Err(ConfigError::Invalid("grid.total_weeks must be at least 1".to_string()));
        }
        if self.grid.labelled_weeks > self.grid.total_weeks {
            return Err(ConfigError::Invalid(format!(
                "grid.labelled_weeks ({}) exceeds grid.total_weeks ({})",
                self.grid.labelled_weeks, self.grid.total_weeks
            )));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("bad listen address {}:{}", self.server.host, self.server.port)))
    }
}
