// src/recipe/validate.rs

//! Recipe validation, run before a recipe is written

use crate::error::{Error, Result};
use crate::recipe::format::Recipe;

/// Validate a recipe for writing
///
/// Returns an error for problems that would produce a nonsense file (no
/// name, negative or non-finite quantities) and a list of warnings for
/// things that are merely unusual.
pub fn validate_recipe(recipe: &Recipe) -> Result<Vec<String>> {
    let mut warnings = Vec::new();

    if recipe.name.trim().is_empty() {
        return Err(Error::InvalidRecipe("Recipe name cannot be empty".to_string()));
    }

    check_quantity("batch size", recipe.batch_size)?;
    check_quantity("boil size", recipe.boil_size)?;
    check_quantity("boil time", recipe.boil_time)?;
    for (label, value) in [
        ("efficiency", recipe.efficiency),
        ("OG", recipe.og),
        ("FG", recipe.fg),
        ("ABV", recipe.abv),
        ("IBU", recipe.ibu),
        ("color", recipe.color),
    ] {
        if let Some(value) = value {
            check_quantity(label, value)?;
        }
    }

    for fermentable in &recipe.fermentables {
        check_named("fermentable", &fermentable.name)?;
        check_quantity(&format!("fermentable '{}' amount", fermentable.name), fermentable.amount)?;
        check_quantity(&format!("fermentable '{}' yield", fermentable.name), fermentable.yield_percentage)?;
        check_quantity(&format!("fermentable '{}' color", fermentable.name), fermentable.color)?;
    }
    for hop in &recipe.hops {
        check_named("hop", &hop.name)?;
        check_quantity(&format!("hop '{}' amount", hop.name), hop.amount)?;
        check_quantity(&format!("hop '{}' time", hop.name), hop.time)?;
        check_quantity(&format!("hop '{}' alpha", hop.name), hop.alpha)?;
    }
    for yeast in &recipe.yeasts {
        check_named("yeast", &yeast.name)?;
        check_quantity(&format!("yeast '{}' amount", yeast.name), yeast.amount)?;
    }
    for misc in &recipe.miscs {
        check_named("misc", &misc.name)?;
        check_quantity(&format!("misc '{}' amount", misc.name), misc.amount)?;
        check_quantity(&format!("misc '{}' time", misc.name), misc.time)?;
    }
    if let Some(mash) = &recipe.mash {
        for step in &mash.mash_steps {
            check_named("mash step", &step.name)?;
            check_quantity(&format!("mash step '{}' time", step.name), step.step_time)?;
            if let Some(amount) = step.infuse_amount {
                check_quantity(&format!("mash step '{}' infuse amount", step.name), amount)?;
            }
            if !step.step_temp.is_finite() {
                return Err(Error::InvalidRecipe(format!(
                    "mash step '{}' temperature must be a number",
                    step.name
                )));
            }
        }
    }

    if recipe.recipe_type.trim().is_empty() {
        warnings.push("Missing recipe type".to_string());
    }
    if recipe.fermentables.is_empty() {
        warnings.push("No fermentables listed".to_string());
    }
    if recipe.yeasts.is_empty() {
        warnings.push("No yeast listed".to_string());
    }
    if let (Some(og), Some(fg)) = (recipe.og, recipe.fg) {
        if fg > og {
            warnings.push(format!("FG {:.3} is higher than OG {:.3}", fg, og));
        }
    }

    Ok(warnings)
}

fn check_quantity(label: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::InvalidRecipe(format!("{} must be a number", label)));
    }
    if value < 0.0 {
        return Err(Error::InvalidRecipe(format!(
            "{} cannot be negative (got {})",
            label, value
        )));
    }
    Ok(())
}

fn check_named(kind: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidRecipe(format!("Every {} needs a name", kind)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::format::{Fermentable, Hop, Yeast};

    fn valid() -> Recipe {
        Recipe {
            name: "Bitter".to_string(),
            recipe_type: "All Grain".to_string(),
            batch_size: 20.0,
            boil_size: 24.0,
            boil_time: 60.0,
            fermentables: vec![Fermentable {
                name: "Maris Otter".to_string(),
                amount: 3.5,
                ..Default::default()
            }],
            yeasts: vec![Yeast {
                name: "S-04".to_string(),
                amount: 0.011,
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_recipe_has_no_warnings() {
        assert!(validate_recipe(&valid()).unwrap().is_empty());
    }

    #[test]
    fn test_empty_name() {
        let mut recipe = valid();
        recipe.name = "   ".to_string();
        assert!(validate_recipe(&recipe).is_err());
    }

    #[test]
    fn test_negative_amount() {
        let mut recipe = valid();
        recipe.hops.push(Hop {
            name: "Goldings".to_string(),
            amount: -0.01,
            ..Default::default()
        });
        let err = validate_recipe(&recipe).unwrap_err();
        assert!(err.to_string().contains("Goldings"));
    }

    #[test]
    fn test_non_finite_value() {
        let mut recipe = valid();
        recipe.batch_size = f64::INFINITY;
        assert!(validate_recipe(&recipe).is_err());
    }

    #[test]
    fn test_unnamed_item() {
        let mut recipe = valid();
        recipe.fermentables[0].name.clear();
        assert!(validate_recipe(&recipe).is_err());
    }

    #[test]
    fn test_warnings() {
        let mut recipe = valid();
        recipe.fermentables.clear();
        recipe.yeasts.clear();
        recipe.recipe_type.clear();
        recipe.og = Some(1.010);
        recipe.fg = Some(1.020);

        let warnings = validate_recipe(&recipe).unwrap();
        assert!(warnings.iter().any(|w| w.contains("type")));
        assert!(warnings.iter().any(|w| w.contains("fermentables")));
        assert!(warnings.iter().any(|w| w.contains("yeast")));
        assert!(warnings.iter().any(|w| w.contains("FG")));
    }
}
