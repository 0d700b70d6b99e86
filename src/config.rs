// src/config.rs
//! Configuration file parsing
//!
//! Supports TOML configuration files with the following sections:
//! - [server] - Public and admin bind addresses
//! - [storage] - Recipe directory
//! - [security] - CORS origins
//! - [upload] - Import size limit
//! - [label] - Label colors, size, font and caption language
//! - [fermentation] - Defaults for simulated readings
//!
//! Every section is optional; a missing file means all defaults.

use crate::fermentation::FermentationDefaults;
use crate::label::LabelDesign;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize)]
pub struct KettleConfig {
    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub storage: StorageSection,

    #[serde(default)]
    pub security: SecuritySection,

    #[serde(default)]
    pub upload: UploadSection,

    #[serde(default)]
    pub label: LabelDesign,

    #[serde(default)]
    pub fermentation: FermentationDefaults,
}

/// Server configuration section
#[derive(Debug, Deserialize)]
pub struct ServerSection {
    /// Public API bind address
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Admin API bind address (localhost only by default)
    #[serde(default = "default_admin_bind")]
    pub admin_bind: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            admin_bind: default_admin_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_admin_bind() -> String {
    "127.0.0.1:8081".to_string()
}

/// Storage configuration section
#[derive(Debug, Deserialize)]
pub struct StorageSection {
    /// Directory holding `<slug>.xml` recipe files
    #[serde(default = "default_recipe_dir")]
    pub recipe_dir: PathBuf,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            recipe_dir: default_recipe_dir(),
        }
    }
}

fn default_recipe_dir() -> PathBuf {
    PathBuf::from("recipes")
}

/// Security configuration section
#[derive(Debug, Default, Deserialize)]
pub struct SecuritySection {
    /// CORS allowed origins (empty = any origin)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

/// Upload configuration section
#[derive(Debug, Default, Deserialize)]
pub struct UploadSection {
    /// Maximum request body on both listeners (e.g. "10MB"); unset means no
    /// limit
    #[serde(default)]
    pub max_size: Option<String>,
}

impl KettleConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: KettleConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.server
            .bind
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid server.bind address: {}", self.server.bind))?;

        self.server.admin_bind.parse::<SocketAddr>().with_context(|| {
            format!("Invalid server.admin_bind address: {}", self.server.admin_bind)
        })?;

        if let Some(ref size) = self.upload.max_size {
            parse_size(size)?;
        }

        if self.fermentation.interval_hours == 0 {
            anyhow::bail!("fermentation.interval_hours must be at least 1");
        }
        if !self.fermentation.temperature.is_finite() {
            anyhow::bail!("fermentation.temperature must be a number");
        }

        if self.label.width == 0 || self.label.height == 0 {
            anyhow::bail!("label.width and label.height must be positive");
        }

        Ok(())
    }

    /// Upload limit in bytes, `None` for unlimited
    pub fn max_upload_bytes(&self) -> Result<Option<usize>> {
        self.upload
            .max_size
            .as_deref()
            .map(|s| parse_size(s).map(|n| n as usize))
            .transpose()
    }

    /// Convert to the internal ServerConfig structure
    #[cfg(feature = "server")]
    pub fn to_server_config(&self) -> Result<crate::server::ServerConfig> {
        Ok(crate::server::ServerConfig {
            bind_addr: self.server.bind.parse()?,
            admin_bind_addr: self.server.admin_bind.parse()?,
            recipe_dir: self.storage.recipe_dir.clone(),
            cors_allowed_origins: self.security.cors_origins.clone(),
            max_upload_bytes: self.max_upload_bytes()?,
            label: self.label.clone(),
            fermentation: self.fermentation.clone(),
        })
    }
}

/// Parse a human-readable size string (e.g., "10MB", "512KB", "1GB")
pub fn parse_size(s: &str) -> Result<u64> {
    let s = s.trim().to_uppercase();

    let (num_str, multiplier) = if let Some(n) = s.strip_suffix("GB") {
        (n, 1024u64 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("MB") {
        (n, 1024u64 * 1024)
    } else if let Some(n) = s.strip_suffix("KB") {
        (n, 1024u64)
    } else if let Some(n) = s.strip_suffix('B') {
        (n, 1u64)
    } else {
        // Assume bytes
        (s.as_str(), 1u64)
    };

    let num: f64 = num_str
        .trim()
        .parse()
        .with_context(|| format!("Invalid size number: {}", num_str))?;
    if !num.is_finite() || num < 0.0 {
        anyhow::bail!("Invalid size: {}", s);
    }

    Ok((num * multiplier as f64) as u64)
}
