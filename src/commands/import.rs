// src/commands/import.rs
//! Recipe file import command

use super::CommandContext;
use anyhow::Result;
use kettle::store::IncomingFile;
use std::path::PathBuf;
use tracing::warn;

/// Copy recipe files into the recipe directory
pub fn cmd_import(ctx: &CommandContext, files: &[PathBuf]) -> Result<()> {
    let store = ctx.store();
    store.ensure_dir()?;

    let mut batch = Vec::with_capacity(files.len());
    let mut unreadable = Vec::new();
    for path in files {
        let filename = path.to_string_lossy().into_owned();
        match std::fs::read(path) {
            Ok(content) => batch.push(IncomingFile::new(filename, content)),
            Err(e) => {
                warn!("Cannot read {}: {}", path.display(), e);
                unreadable.push(filename);
            }
        }
    }

    let report = store.ingest(batch);
    for name in &report.written {
        println!("  imported {}", name);
    }
    for skipped in &report.skipped {
        println!("  skipped {} ({})", skipped.filename, skipped.reason);
    }
    for name in &unreadable {
        println!("  skipped {} (unreadable)", name);
    }
    println!("\nImported {} file(s) into {}", report.count(), ctx.recipe_dir.display());
    Ok(())
}
