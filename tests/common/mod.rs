// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use kettle::recipe::{
    Fermentable, Hop, MashProfile, MashStep, Misc, Recipe, Style, Yeast,
};
use kettle::RecipeStore;
use std::path::Path;
use tempfile::TempDir;

/// Create an empty recipe directory.
///
/// Returns (TempDir, RecipeStore) - keep the TempDir alive to prevent cleanup.
pub fn setup_store() -> (TempDir, RecipeStore) {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = RecipeStore::new(temp_dir.path());
    (temp_dir, store)
}

/// Write a file into a directory, returning its path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// A recipe with every field populated.
///
/// Every number is already at the precision the writer uses for its field,
/// so a written and re-parsed copy compares equal.
pub fn full_recipe() -> Recipe {
    Recipe {
        name: "Fish & Chips <Bitter>".to_string(),
        version: 1,
        recipe_type: "All Grain".to_string(),
        brewer: Some("Sam \"Hops\" O'Neil".to_string()),
        batch_size: 23.5,
        boil_size: 28.75,
        boil_time: 60.0,
        efficiency: Some(72.5),
        og: Some(1.045),
        fg: Some(1.011),
        abv: Some(4.5),
        ibu: Some(35.2),
        color: Some(11.5),
        notes: Some("Dry hop on day 5.\nCrash before kegging.".to_string()),
        style: Some(Style {
            name: "Best Bitter".to_string(),
            category: Some("British Bitter".to_string()),
            og_min: 1.04,
            og_max: 1.048,
            fg_min: 1.008,
            fg_max: 1.012,
            ibu_min: 25.0,
            ibu_max: 40.0,
            color_min: 8.0,
            color_max: 16.0,
            abv_min: 3.8,
            abv_max: 4.6,
        }),
        fermentables: vec![
            Fermentable {
                name: "Maris Otter".to_string(),
                amount: 4.2,
                fermentable_type: "Grain".to_string(),
                yield_percentage: 81.0,
                color: 3.0,
            },
            Fermentable {
                name: "Crystal 60".to_string(),
                amount: 0.35,
                fermentable_type: "Grain".to_string(),
                yield_percentage: 74.0,
                color: 60.0,
            },
        ],
        hops: vec![
            Hop {
                name: "East Kent Goldings".to_string(),
                amount: 0.028,
                hop_use: "Boil".to_string(),
                time: 60.0,
                alpha: 5.5,
                form: Some("Pellet".to_string()),
            },
            Hop {
                name: "Fuggle".to_string(),
                amount: 0.0145,
                hop_use: "Aroma".to_string(),
                time: 5.0,
                alpha: 4.5,
                form: None,
            },
        ],
        yeasts: vec![Yeast {
            name: "London ESB".to_string(),
            amount: 0.125,
            yeast_type: "Ale".to_string(),
            form: "Liquid".to_string(),
            laboratory: Some("Wyeast Labs".to_string()),
            product_id: Some("1968".to_string()),
        }],
        miscs: vec![Misc {
            name: "Irish Moss".to_string(),
            amount: 0.0025,
            misc_use: "Boil".to_string(),
            time: 15.0,
            misc_type: "Fining".to_string(),
        }],
        mash: Some(MashProfile {
            name: "Single Infusion".to_string(),
            grain_temp: Some(20.0),
            mash_steps: vec![
                MashStep {
                    name: "Saccharification".to_string(),
                    step_type: "Infusion".to_string(),
                    step_temp: 66.5,
                    step_time: 60.0,
                    infuse_amount: Some(14.25),
                },
                MashStep {
                    name: "Mash Out".to_string(),
                    step_type: "Temperature".to_string(),
                    step_temp: 76.0,
                    step_time: 10.0,
                    infuse_amount: None,
                },
            ],
        }),
    }
}

/// A recipe with one fermentable, one hop and nothing else.
pub fn minimal_recipe_xml() -> &'static str {
    r#"<?xml version="1.0" encoding="ISO-8859-1"?>
<RECIPES>
 <RECIPE>
  <NAME>SMaSH</NAME>
  <VERSION>1</VERSION>
  <TYPE>All Grain</TYPE>
  <BATCH_SIZE>10</BATCH_SIZE>
  <BOIL_SIZE>12</BOIL_SIZE>
  <BOIL_TIME>60</BOIL_TIME>
  <FERMENTABLES>
   <FERMENTABLE>
    <NAME>Pilsner</NAME>
    <TYPE>Grain</TYPE>
    <AMOUNT>2.0</AMOUNT>
    <YIELD>80</YIELD>
    <COLOR>2</COLOR>
   </FERMENTABLE>
  </FERMENTABLES>
  <HOPS>
   <HOP>
    <NAME>Saaz</NAME>
    <ALPHA>3.5</ALPHA>
    <AMOUNT>0.020</AMOUNT>
    <USE>Boil</USE>
    <TIME>60</TIME>
   </HOP>
  </HOPS>
 </RECIPE>
</RECIPES>
"#
}
