// src/commands/ferment.rs
//! Simulated fermentation command

use super::CommandContext;
use anyhow::Result;
use kettle::fermentation::{simulate, FermentationProfile};

/// Print simulated fermentation readings for a recipe
pub fn cmd_ferment(
    ctx: &CommandContext,
    slug: &str,
    days: Option<u32>,
    interval_hours: Option<u32>,
    seed: Option<u64>,
    csv: bool,
) -> Result<()> {
    let recipe = ctx.require_recipe(slug)?;

    let mut profile = FermentationProfile::from_recipe(&recipe, &ctx.config.fermentation);
    if let Some(days) = days {
        profile.days = days;
    }
    if let Some(interval) = interval_hours {
        if interval == 0 {
            anyhow::bail!("--interval-hours must be at least 1");
        }
        profile.interval_hours = interval;
    }
    profile.seed = seed;

    let readings = simulate(&profile, chrono::Utc::now());

    if csv {
        println!("hour,timestamp,gravity,temperature,abv");
        for r in &readings {
            println!(
                "{},{},{:.4},{:.1},{:.2}",
                r.hour,
                r.timestamp.to_rfc3339(),
                r.gravity,
                r.temperature,
                r.abv
            );
        }
    } else {
        let body = serde_json::json!({
            "slug": slug,
            "profile": profile,
            "readings": readings,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    }
    Ok(())
}
