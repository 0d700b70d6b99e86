// src/recipe/mod.rs

//! BeerXML recipe handling
//!
//! Recipes are stored one per file in BeerXML 1.0 form. kettle does not use
//! an XML parser for them: the parser pulls fields out of raw text with
//! first-match, case-insensitive tag patterns, and the writer emits a fixed
//! template. A file that would upset a strict parser still lists and loads,
//! with missing pieces defaulted.
//!
//! # Example
//!
//! ```xml
//! <RECIPES>
//!   <RECIPE>
//!     <NAME>Backyard Pale</NAME>
//!     <VERSION>1</VERSION>
//!     <TYPE>All Grain</TYPE>
//!     <BATCH_SIZE>20.00</BATCH_SIZE>
//!     <BOIL_SIZE>25.00</BOIL_SIZE>
//!     <BOIL_TIME>60</BOIL_TIME>
//!     <FERMENTABLES>
//!       <FERMENTABLE>
//!         <NAME>Pale Malt</NAME>
//!         <AMOUNT>4.500</AMOUNT>
//!         ...
//! ```
//!
//! # Round trip
//!
//! Writing then parsing reproduces every field within the writer's fixed
//! decimal precision. Fields kettle does not model (water profiles,
//! equipment) are dropped on write.

mod format;
pub mod parser;
pub mod validate;
pub mod writer;

pub use format::{
    Fermentable, Hop, MashProfile, MashStep, Misc, Recipe, RecipeSummary, Style, Yeast,
};
pub use parser::{parse_recipe, parse_summary};
pub use validate::validate_recipe;
pub use writer::write_recipe;
