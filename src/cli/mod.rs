// src/cli/mod.rs
//! CLI definitions for kettle
//!
//! This module contains the command-line interface definitions using clap.
//! The command implementations are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kettle")]
#[command(author = "Kettle Contributors")]
#[command(version)]
#[command(about = "BeerXML recipe store with label and fermentation tools", long_about = None)]
pub struct Cli {
    /// Recipe directory (overrides storage.recipe_dir from the config file)
    #[arg(short = 'd', long, global = true)]
    pub recipes_dir: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List recipes in the recipe directory
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one recipe
    Show {
        /// Recipe slug (file name without .xml)
        slug: String,

        /// Print JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Validate a JSON recipe and save it to the recipe directory
    Save {
        /// JSON recipe file
        input: PathBuf,

        /// Save under this slug instead of one derived from the name
        #[arg(long)]
        slug: Option<String>,
    },

    /// Validate a JSON recipe and write it as BeerXML without saving
    Export {
        /// JSON recipe file
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Copy .xml recipe files into the recipe directory
    Import {
        /// Files to import; anything not ending in .xml is skipped
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Render a recipe's bottle label as SVG
    Label {
        /// Recipe slug
        slug: String,

        /// Caption language (en, de)
        #[arg(short, long)]
        language: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Simulate fermentation readings for a recipe
    Ferment {
        /// Recipe slug
        slug: String,

        /// Length of the simulation in days
        #[arg(long)]
        days: Option<u32>,

        /// Hours between readings
        #[arg(long)]
        interval_hours: Option<u32>,

        /// Seed for reproducible readings
        #[arg(long)]
        seed: Option<u64>,

        /// Print CSV instead of JSON
        #[arg(long)]
        csv: bool,
    },

    /// Run the HTTP server
    #[cfg(feature = "server")]
    Serve {
        /// Public bind address (overrides server.bind)
        #[arg(long)]
        bind: Option<String>,

        /// Admin bind address (overrides server.admin_bind)
        #[arg(long)]
        admin_bind: Option<String>,
    },
}
