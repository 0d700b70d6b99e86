// src/store/mod.rs

//! Directory-backed recipe store
//!
//! One recipe per file, `<slug>.xml`, in a single flat directory. Nothing is
//! cached: every call goes back to the filesystem. Writes replace the whole
//! file through a temp file and rename, so concurrent writers to the same
//! slug resolve last-write-wins and readers never see a torn file.

mod ingest;

pub use ingest::{sanitize_filename, IncomingFile, IngestReport, SkippedFile};

use crate::error::{Error, Result};
use crate::recipe::{parse_recipe, parse_summary, write_recipe, Recipe, RecipeSummary};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Extension of recipe files
pub const RECIPE_EXTENSION: &str = "xml";

/// Recipe files in one directory
#[derive(Debug, Clone)]
pub struct RecipeStore {
    root: PathBuf,
}

impl RecipeStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the recipe directory if it does not exist
    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|e| {
            Error::IoError(format!(
                "Failed to create recipe directory {}: {}",
                self.root.display(),
                e
            ))
        })
    }

    /// List every recipe file that has a name
    ///
    /// Never fails: an unreadable directory lists as empty and unreadable
    /// files are skipped, both with a warning in the log.
    pub fn list(&self) -> Vec<RecipeSummary> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Cannot read recipe directory {}: {}", self.root.display(), e);
                return Vec::new();
            }
        };

        let mut summaries = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            let Some(slug) = slug_from_path(&path) else {
                continue;
            };
            if !path.is_file() {
                continue;
            }

            match fs::read(&path) {
                Ok(bytes) => match parse_summary(&slug, &decode_text(&bytes)) {
                    Some(summary) => summaries.push(summary),
                    None => debug!("Skipping {}: no recipe name", path.display()),
                },
                Err(e) => warn!("Skipping unreadable recipe {}: {}", path.display(), e),
            }
        }

        summaries.sort_by(|a, b| a.slug.cmp(&b.slug));
        summaries
    }

    /// Path of the file backing `slug`, or `None` if `slug` cannot name a
    /// file in this directory
    pub fn path_for(&self, slug: &str) -> Option<PathBuf> {
        if !is_valid_slug(slug) {
            return None;
        }
        Some(self.root.join(format!("{}.{}", slug, RECIPE_EXTENSION)))
    }

    /// Raw text of a recipe file
    ///
    /// `Ok(None)` when there is no such file.
    pub fn raw(&self, slug: &str) -> Result<Option<String>> {
        let Some(path) = self.path_for(slug) else {
            return Ok(None);
        };

        match fs::read(&path) {
            Ok(bytes) => Ok(Some(decode_text(&bytes))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::IoError(format!(
                "Failed to read recipe {}: {}",
                path.display(),
                e
            ))),
        }
    }

    /// Load and parse one recipe
    ///
    /// `Ok(None)` when the file does not exist or holds no `<RECIPE>` block.
    pub fn load(&self, slug: &str) -> Result<Option<Recipe>> {
        Ok(self.raw(slug)?.and_then(|content| parse_recipe(&content)))
    }

    /// Save a new recipe under a slug derived from its name
    ///
    /// An existing file with the same slug is overwritten.
    pub fn save(&self, recipe: &Recipe) -> Result<String> {
        let slug = slugify(&recipe.name);
        self.save_as(&slug, recipe)?;
        Ok(slug)
    }

    /// Write a recipe to `<slug>.xml`, replacing any existing file
    pub fn save_as(&self, slug: &str, recipe: &Recipe) -> Result<()> {
        if !is_valid_slug(slug) {
            return Err(Error::InvalidPath(format!("Invalid recipe slug: {:?}", slug)));
        }

        let filename = format!("{}.{}", slug, RECIPE_EXTENSION);
        write_atomic(&self.root, &filename, write_recipe(recipe).as_bytes())?;
        info!("Saved recipe '{}' to {}", recipe.name, filename);
        Ok(())
    }
}

/// Derive a slug from a recipe name
///
/// Lowercase ASCII letters and digits are kept, every other run of
/// characters becomes a single `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        "recipe".to_string()
    } else {
        slug
    }
}

/// Whether `slug` is a plain file stem
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug != "."
        && slug != ".."
        && !slug.contains(['/', '\\', '\0'])
}

/// Slug of a recipe file path (`foo.xml` -> `foo`)
fn slug_from_path(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let stem = name.strip_suffix(".xml")?;
    if stem.is_empty() {
        return None;
    }
    Some(stem.to_string())
}

/// Recipe files are UTF-8 or, as BeerXML tools often write them,
/// ISO-8859-1
fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

/// Replace `dir/filename` with `content` via a temp file and rename
fn write_atomic(dir: &Path, filename: &str, content: &[u8]) -> Result<()> {
    let target = dir.join(filename);
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| {
        Error::IoError(format!("Failed to create temp file in {}: {}", dir.display(), e))
    })?;
    tmp.write_all(content)
        .map_err(|e| Error::IoError(format!("Failed to write {}: {}", target.display(), e)))?;
    tmp.persist(&target)
        .map_err(|e| Error::IoError(format!("Failed to replace {}: {}", target.display(), e.error)))?;
    Ok(())
}
