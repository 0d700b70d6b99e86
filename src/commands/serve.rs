// src/commands/serve.rs
//! HTTP server command

use super::CommandContext;
use anyhow::{Context, Result};

/// Run the public and admin listeners until interrupted
pub fn cmd_serve(
    ctx: &CommandContext,
    bind: Option<&str>,
    admin_bind: Option<&str>,
) -> Result<()> {
    let mut server_config = ctx.config.to_server_config()?;
    server_config.recipe_dir = ctx.recipe_dir.clone();
    if let Some(bind) = bind {
        server_config.bind_addr = bind
            .parse()
            .with_context(|| format!("Invalid bind address: {}", bind))?;
    }
    if let Some(admin_bind) = admin_bind {
        server_config.admin_bind_addr = admin_bind
            .parse()
            .with_context(|| format!("Invalid admin bind address: {}", admin_bind))?;
    }

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    rt.block_on(kettle::server::run_server(server_config))
}
