// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use commands::CommandContext;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = CommandContext::load(cli.config.as_deref(), cli.recipes_dir)?;

    match cli.command {
        Commands::List { json } => commands::cmd_list(&ctx, json),
        Commands::Show { slug, json } => commands::cmd_show(&ctx, &slug, json),
        Commands::Save { input, slug } => commands::cmd_save(&ctx, &input, slug.as_deref()),
        Commands::Export { input, output } => commands::cmd_export(&input, output.as_deref()),
        Commands::Import { files } => commands::cmd_import(&ctx, &files),
        Commands::Label {
            slug,
            language,
            output,
        } => commands::cmd_label(&ctx, &slug, language.as_deref(), output.as_deref()),
        Commands::Ferment {
            slug,
            days,
            interval_hours,
            seed,
            csv,
        } => commands::cmd_ferment(&ctx, &slug, days, interval_hours, seed, csv),
        #[cfg(feature = "server")]
        Commands::Serve { bind, admin_bind } => {
            commands::cmd_serve(&ctx, bind.as_deref(), admin_bind.as_deref())
        }
    }
}
