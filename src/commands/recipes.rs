// src/commands/recipes.rs
//! Recipe listing, inspection, saving and export commands

use super::{read_json_recipe, write_output, CommandContext};
use anyhow::{Context, Result};
use kettle::recipe::{validate_recipe, write_recipe, Recipe};
use std::path::Path;
use tracing::{info, warn};

/// List recipes in the recipe directory
pub fn cmd_list(ctx: &CommandContext, json: bool) -> Result<()> {
    let summaries = ctx.store().list();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!("No recipes found in {}", ctx.recipe_dir.display());
        return Ok(());
    }

    let width = summaries.iter().map(|s| s.slug.len()).max().unwrap_or(0);
    for summary in &summaries {
        print!("  {:width$}  {}", summary.slug, summary.name, width = width);
        if !summary.recipe_type.is_empty() {
            print!(" ({})", summary.recipe_type);
        }
        println!();
    }
    println!("\nTotal: {} recipe(s)", summaries.len());
    Ok(())
}

/// Show one recipe
pub fn cmd_show(ctx: &CommandContext, slug: &str, json: bool) -> Result<()> {
    let recipe = ctx.require_recipe(slug)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&recipe)?);
    } else {
        print_recipe(&recipe);
    }
    Ok(())
}

fn print_recipe(recipe: &Recipe) {
    println!("{}", recipe.name);
    if !recipe.recipe_type.is_empty() {
        println!("  Type: {}", recipe.recipe_type);
    }
    if let Some(brewer) = &recipe.brewer {
        println!("  Brewer: {}", brewer);
    }
    if let Some(style) = &recipe.style {
        println!("  Style: {}", style.name);
    }
    println!(
        "  Batch: {:.1} L, boil {:.1} L for {:.0} min",
        recipe.batch_size, recipe.boil_size, recipe.boil_time
    );
    if let Some(efficiency) = recipe.efficiency {
        println!("  Efficiency: {:.1}%", efficiency);
    }
    if let (Some(og), Some(fg)) = (recipe.og, recipe.fg) {
        println!("  OG {:.3} / FG {:.3}", og, fg);
    }

    if !recipe.fermentables.is_empty() {
        println!("\nFermentables ({:.2} kg):", recipe.total_fermentables());
        for f in &recipe.fermentables {
            println!("  {:>7.3} kg  {} ({:.0} SRM)", f.amount, f.name, f.color);
        }
    }
    if !recipe.hops.is_empty() {
        println!("\nHops:");
        for h in &recipe.hops {
            println!(
                "  {:>5.0} g  {} {:.1}% AA, {} {:.0} min",
                h.amount * 1000.0,
                h.name,
                h.alpha,
                h.hop_use,
                h.time
            );
        }
    }
    if !recipe.yeasts.is_empty() {
        println!("\nYeast:");
        for y in &recipe.yeasts {
            print!("  {}", y.name);
            if let Some(lab) = &y.laboratory {
                print!(" ({})", lab);
            }
            println!();
        }
    }
    if !recipe.miscs.is_empty() {
        println!("\nMiscs:");
        for m in &recipe.miscs {
            println!("  {} ({}, {:.0} min)", m.name, m.misc_use, m.time);
        }
    }
    if let Some(mash) = &recipe.mash {
        println!("\nMash: {}", mash.name);
        for step in &mash.mash_steps {
            println!(
                "  {}: {:.1} °C for {:.0} min",
                step.name, step.step_temp, step.step_time
            );
        }
    }
    if let Some(notes) = &recipe.notes {
        println!("\n{}", notes);
    }
}

/// Validate a JSON recipe and save it
pub fn cmd_save(ctx: &CommandContext, input: &Path, slug: Option<&str>) -> Result<()> {
    let recipe = read_json_recipe(input)?;
    let warnings = validate_recipe(&recipe)?;
    for warning in &warnings {
        warn!("{}", warning);
    }

    let store = ctx.store();
    store.ensure_dir()?;
    let slug = match slug {
        Some(slug) => {
            store
                .save_as(slug, &recipe)
                .with_context(|| format!("Failed to save recipe '{}'", slug))?;
            slug.to_string()
        }
        None => store.save(&recipe).context("Failed to save recipe")?,
    };

    info!("Saved {} as {}", recipe.name, slug);
    println!("Saved '{}' as {}", recipe.name, slug);
    Ok(())
}

/// Validate a JSON recipe and write it as BeerXML
pub fn cmd_export(input: &Path, output: Option<&Path>) -> Result<()> {
    let recipe = read_json_recipe(input)?;
    for warning in validate_recipe(&recipe)? {
        warn!("{}", warning);
    }
    write_output(output, &write_recipe(&recipe))
}
