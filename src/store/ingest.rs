// src/store/ingest.rs

//! Batch import of uploaded recipe files
//!
//! Files are written as given, without looking inside them. Only the name
//! is checked: it must end in `.xml` and is cut down to its last path
//! component. A file that fails is reported and the rest of the batch goes
//! ahead.

use super::{write_atomic, RecipeStore, RECIPE_EXTENSION};
use serde::Serialize;
use tracing::{info, warn};

/// One uploaded file
#[derive(Debug, Clone)]
pub struct IncomingFile {
    /// Name as supplied by the client, possibly with a path
    pub filename: String,
    pub content: Vec<u8>,
}

impl IncomingFile {
    pub fn new(filename: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedFile {
    pub filename: String,
    pub reason: String,
}

/// Outcome of an import batch
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IngestReport {
    /// Filenames written, after sanitizing
    pub written: Vec<String>,
    pub skipped: Vec<SkippedFile>,
}

impl IngestReport {
    /// Number of files written
    pub fn count(&self) -> usize {
        self.written.len()
    }

    fn skip(&mut self, filename: &str, reason: impl Into<String>) {
        self.skipped.push(SkippedFile {
            filename: filename.to_string(),
            reason: reason.into(),
        });
    }
}

/// Reduce an uploaded filename to a safe `<stem>.xml`
///
/// Returns `None` unless the name ends in `.xml` (any case) and its last
/// path component has a usable stem. The extension is written lowercase so
/// the file lists under its stem.
pub fn sanitize_filename(filename: &str) -> Option<String> {
    let base = filename.rsplit(['/', '\\']).next()?.trim();
    if base.len() <= 4 || !base.is_char_boundary(base.len() - 4) {
        return None;
    }

    let (stem, ext) = base.split_at(base.len() - 4);
    if !ext.eq_ignore_ascii_case(".xml") {
        return None;
    }
    let stem = stem.trim();
    if stem.is_empty() || stem == "." || stem == ".." || stem.contains('\0') {
        return None;
    }

    Some(format!("{}.{}", stem, RECIPE_EXTENSION))
}

impl RecipeStore {
    /// Write a batch of uploaded files into the recipe directory
    ///
    /// Existing files with the same name are overwritten silently.
    pub fn ingest<I>(&self, files: I) -> IngestReport
    where
        I: IntoIterator<Item = IncomingFile>,
    {
        let mut report = IngestReport::default();

        for file in files {
            let Some(name) = sanitize_filename(&file.filename) else {
                report.skip(&file.filename, "not an .xml file");
                continue;
            };

            match write_atomic(self.root(), &name, &file.content) {
                Ok(()) => report.written.push(name),
                Err(e) => {
                    warn!("Import of {} failed: {}", file.filename, e);
                    report.skip(&file.filename, "write failed");
                }
            }
        }

        info!(
            "Imported {} recipe file(s), skipped {}",
            report.count(),
            report.skipped.len()
        );
        report
    }
}
