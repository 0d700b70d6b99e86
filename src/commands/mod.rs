// src/commands/mod.rs
//! Command handlers for the kettle CLI

mod ferment;
mod import;
mod label;
mod recipes;
#[cfg(feature = "server")]
mod serve;

pub use ferment::cmd_ferment;
pub use import::cmd_import;
pub use label::cmd_label;
pub use recipes::{cmd_export, cmd_list, cmd_save, cmd_show};
#[cfg(feature = "server")]
pub use serve::cmd_serve;

use anyhow::{Context, Result};
use kettle::config::KettleConfig;
use kettle::recipe::Recipe;
use kettle::store::RecipeStore;
use std::path::{Path, PathBuf};

/// Settings shared by every command: the loaded config and the recipe
/// directory after CLI overrides
pub struct CommandContext {
    pub config: KettleConfig,
    pub recipe_dir: PathBuf,
}

impl CommandContext {
    pub fn load(config_path: Option<&Path>, recipes_dir: Option<PathBuf>) -> Result<Self> {
        let mut config = KettleConfig::load_or_default(config_path)?;
        if let Some(dir) = recipes_dir {
            config.storage.recipe_dir = dir;
        }
        let recipe_dir = config.storage.recipe_dir.clone();
        Ok(Self { config, recipe_dir })
    }

    pub fn store(&self) -> RecipeStore {
        RecipeStore::new(&self.recipe_dir)
    }

    /// Load a recipe that must exist
    pub fn require_recipe(&self, slug: &str) -> Result<Recipe> {
        self.store()
            .load(slug)
            .with_context(|| format!("Failed to read recipe '{}'", slug))?
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Recipe '{}' not found in {}",
                    slug,
                    self.recipe_dir.display()
                )
            })
    }
}

/// Read a JSON recipe from a file
pub(crate) fn read_json_recipe(path: &Path) -> Result<Recipe> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON recipe {}", path.display()))
}

/// Write to `output`, or stdout when none is given
pub(crate) fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}
