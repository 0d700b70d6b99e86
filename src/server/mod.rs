// src/server/mod.rs
//! Kettle HTTP server
//!
//! Two listeners share one state:
//! - public: recipe listing, detail, download, export, label and
//!   fermentation endpoints
//! - admin (localhost by default): save, overwrite, import and stats
//!
//! Handlers keep no recipe state between requests; every request goes to
//! the recipe directory.

mod handlers;
pub mod metrics;
mod routes;

pub use metrics::{MetricsSnapshot, ServerMetrics};
pub use routes::{create_admin_router, create_router};

use crate::fermentation::FermentationDefaults;
use crate::label::LabelDesign;
use crate::store::RecipeStore;
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address for the public API
    pub bind_addr: SocketAddr,
    /// Address for the admin API
    pub admin_bind_addr: SocketAddr,
    /// Directory holding recipe files
    pub recipe_dir: PathBuf,
    /// CORS allowed origins (empty = any)
    pub cors_allowed_origins: Vec<String>,
    /// Request body limit for both routers (None = unlimited)
    pub max_upload_bytes: Option<usize>,
    /// Label look for the label endpoint
    pub label: LabelDesign,
    /// Defaults for the fermentation endpoint
    pub fermentation: FermentationDefaults,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            admin_bind_addr: SocketAddr::from(([127, 0, 0, 1], 8081)),
            recipe_dir: PathBuf::from("recipes"),
            cors_allowed_origins: Vec::new(),
            max_upload_bytes: None,
            label: LabelDesign::default(),
            fermentation: FermentationDefaults::default(),
        }
    }
}

/// Shared server state
pub struct ServerState {
    pub config: ServerConfig,
    pub store: RecipeStore,
    pub metrics: Arc<ServerMetrics>,
}

impl ServerState {
    pub fn new(config: ServerConfig) -> Self {
        let store = RecipeStore::new(config.recipe_dir.clone());
        Self {
            config,
            store,
            metrics: Arc::new(ServerMetrics::new()),
        }
    }
}

/// Start the public and admin listeners and serve until one fails
pub async fn run_server(config: ServerConfig) -> Result<()> {
    tracing::info!("Starting kettle server on {}", config.bind_addr);
    tracing::info!("Admin API on {}", config.admin_bind_addr);
    tracing::info!("Recipe directory: {:?}", config.recipe_dir);
    match config.max_upload_bytes {
        Some(limit) => tracing::info!("Request body limit: {} bytes", limit),
        None => tracing::info!("Request body limit: none"),
    }

    let state = Arc::new(ServerState::new(config.clone()));
    state.store.ensure_dir()?;

    let public = create_router(state.clone());
    let admin = create_admin_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    let admin_listener = tokio::net::TcpListener::bind(config.admin_bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.admin_bind_addr))?;
    tracing::info!("Kettle is ready to serve");

    tokio::try_join!(
        async { axum::serve(listener, public).await },
        async { axum::serve(admin_listener, admin).await },
    )?;
    Ok(())
}
