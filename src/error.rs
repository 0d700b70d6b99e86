// src/error.rs

//! Error types for the kettle library

use thiserror::Error;

/// Errors raised by the recipe store and validation
///
/// Malformed fields inside a recipe file are never errors; the parser
/// degrades them to defaults. A missing recipe is `Ok(None)`, not an error.
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem failure while reading or writing recipe files
    #[error("I/O error: {0}")]
    IoError(String),

    /// Slug or filename that cannot name a file in the recipe directory
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Recipe rejected by validation before writing
    #[error("Invalid recipe: {0}")]
    InvalidRecipe(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err.to_string())
    }
}

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, Error>;
