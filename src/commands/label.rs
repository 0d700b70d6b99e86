// src/commands/label.rs

//! Bottle label command

use super::{write_output, CommandContext};
use anyhow::Result;
use kettle::label::{render_svg, LabelContent, Language};

/// Render a recipe's label as SVG
pub fn cmd_label(
    ctx: &CommandContext,
    slug: &str,
    language: Option<&str>,
    output: Option<&std::path::Path>,
) -> Result<()> {
    let recipe = ctx.require_recipe(slug)?;

    let mut design = ctx.config.label.clone();
    if let Some(language) = language {
        design.language = language.parse::<Language>().map_err(anyhow::Error::msg)?;
    }

    let svg = render_svg(&LabelContent::from_recipe(&recipe), &design);
    write_output(output, &svg)
}
