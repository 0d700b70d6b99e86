// tests/roundtrip.rs

//! Writer/parser agreement: what the writer emits, the parser reads back.

mod common;

use kettle::recipe::{parse_recipe, parse_summary, validate_recipe, write_recipe, Recipe};

#[test]
fn test_full_recipe_survives_write_and_parse() {
    let recipe = common::full_recipe();
    assert!(validate_recipe(&recipe).unwrap().is_empty());

    let xml = write_recipe(&recipe);
    let parsed = parse_recipe(&xml).unwrap();

    assert_eq!(parsed, recipe);
}

#[test]
fn test_text_whitespace_survives_write_and_parse() {
    let mut recipe = common::full_recipe();
    recipe.notes = Some("Step one.\n\n".to_string());
    recipe.brewer = Some("  Sam".to_string());
    recipe.hops[0].name = " East Kent Goldings ".to_string();

    let parsed = parse_recipe(&write_recipe(&recipe)).unwrap();

    assert_eq!(parsed.notes.as_deref(), Some("Step one.\n\n"));
    assert_eq!(parsed.brewer.as_deref(), Some("  Sam"));
    assert_eq!(parsed, recipe);
}

#[test]
fn test_values_are_rounded_to_field_precision() {
    let mut recipe = common::full_recipe();
    recipe.og = Some(1.04567);
    recipe.batch_size = 23.456;
    recipe.hops[0].amount = 0.028_349;
    recipe.boil_time = 59.6;

    let parsed = parse_recipe(&write_recipe(&recipe)).unwrap();

    assert_eq!(parsed.og, Some(1.046));
    assert_eq!(parsed.batch_size, 23.46);
    assert_eq!(parsed.hops[0].amount, 0.0283);
    assert_eq!(parsed.boil_time, 60.0);
}

#[test]
fn test_optional_fields_stay_absent() {
    let recipe = Recipe {
        name: "Bare".to_string(),
        recipe_type: "Extract".to_string(),
        batch_size: 19.0,
        ..Default::default()
    };

    let xml = write_recipe(&recipe);
    assert!(!xml.contains("<EFFICIENCY>"));
    assert!(!xml.contains("<BREWER>"));
    assert!(!xml.contains("<STYLE>"));
    assert!(xml.contains("<WATERS></WATERS>"));

    let parsed = parse_recipe(&xml).unwrap();
    assert_eq!(parsed.efficiency, None);
    assert_eq!(parsed.brewer, None);
    assert_eq!(parsed.style, None);
    assert_eq!(parsed.mash, None);
    assert!(parsed.fermentables.is_empty());
    assert_eq!(parsed.version, 1);
}

#[test]
fn test_written_recipe_lists_under_its_name() {
    let recipe = common::full_recipe();
    let summary = parse_summary("bitter", &write_recipe(&recipe)).unwrap();

    assert_eq!(summary.slug, "bitter");
    assert_eq!(summary.name, "Fish & Chips <Bitter>");
    assert_eq!(summary.recipe_type, "All Grain");
}

#[test]
fn test_minimal_recipe_has_empty_lists() {
    let recipe = parse_recipe(common::minimal_recipe_xml()).unwrap();

    assert_eq!(recipe.name, "SMaSH");
    assert_eq!(recipe.fermentables.len(), 1);
    assert_eq!(recipe.hops.len(), 1);
    assert!(recipe.yeasts.is_empty());
    assert!(recipe.miscs.is_empty());
    assert_eq!(recipe.efficiency, None);
    assert_eq!(recipe.hops[0].form, None);
}

#[test]
fn test_empty_numeric_tag_is_zero() {
    let xml = common::minimal_recipe_xml().replace(
        "<BOIL_TIME>60</BOIL_TIME>",
        "<BOIL_TIME>60</BOIL_TIME>\n  <EFFICIENCY></EFFICIENCY>\n  <OG>n/a</OG>",
    );
    let recipe = parse_recipe(&xml).unwrap();

    assert_eq!(recipe.efficiency, Some(0.0));
    assert_eq!(recipe.og, Some(0.0));
    assert_eq!(recipe.fg, None);
}
