//! Shared application state for the web server.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use scopeseq_config::{Config, GridConfig};
use scopeseq_store::{CatalogStore, JsonCatalogStore};

use crate::templates::Templates;

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
    pub grid: GridConfig,
    pub templates: Templates,
    /// Directory served under `/static`.
    pub static_dir: String,
}

impl AppState {
    pub fn new(store: Arc<dyn CatalogStore>, grid: GridConfig, static_dir: impl Into<String>) -> anyhow::Result<Self> {
        Ok(Self {
            store,
            grid,
            templates: Templates::new().context("compiling page templates")?,
            static_dir: static_dir.into(),
        })
    }

    /// Locate and load the catalog named by `config`, then build the state.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let store = JsonCatalogStore::discover(
            config.catalog.path.as_deref().map(Path::new),
            config.catalog.search_paths.as_slice(),
        )?;
        Self::new(Arc::new(store), config.grid.clone(), config.server.static_dir.clone())
    }
}

pub type SharedState = Arc<AppState>;
