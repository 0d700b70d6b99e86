// src/lib.rs

//! Kettle BeerXML recipe store
//!
//! Browse, create and edit beer recipes kept as BeerXML files in one flat
//! directory.
//!
//! # Architecture
//!
//! - Files are the only state: one `<slug>.xml` per recipe, no database,
//!   no cache
//! - Parsing is tag extraction over raw text, tolerant of anything it does
//!   not recognize
//! - Writing is a pure function of a validated recipe with fixed field
//!   order and precision
//! - Labels (SVG) and simulated fermentation readings are derived from a
//!   parsed recipe on demand

pub mod config;
mod error;
pub mod fermentation;
pub mod label;
pub mod recipe;
pub mod store;

#[cfg(feature = "server")]
pub mod server;

pub use config::KettleConfig;
pub use error::{Error, Result};
pub use fermentation::{simulate, FermentationDefaults, FermentationProfile, Reading};
pub use label::{render_svg, LabelContent, LabelDesign, Language};
pub use recipe::{
    parse_recipe, parse_summary, validate_recipe, write_recipe, Recipe, RecipeSummary,
};
pub use store::{IncomingFile, IngestReport, RecipeStore};
